use super::schema::{AppConfig, PartialConfig, DEFAULT_API_BASE_URL};

impl PartialConfig {
    /// Merge self with a lower-priority fallback.
    /// Self's non-None values take precedence.
    pub fn with_fallback(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
        }
    }

    /// Convert to AppConfig, filling any remaining gaps with defaults.
    pub fn finalize(self) -> AppConfig {
        AppConfig {
            api_base_url: self
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(url: &str) -> PartialConfig {
        PartialConfig {
            api_base_url: Some(url.to_string()),
        }
    }

    #[test]
    fn higher_priority_wins() {
        let merged = partial("http://cli:1/api").with_fallback(partial("http://file:2/api"));
        assert_eq!(merged.api_base_url.as_deref(), Some("http://cli:1/api"));
    }

    #[test]
    fn fallback_fills_missing() {
        let merged = PartialConfig::default().with_fallback(partial("http://file:2/api"));
        assert_eq!(merged.api_base_url.as_deref(), Some("http://file:2/api"));
    }

    #[test]
    fn finalize_applies_default() {
        let config = PartialConfig::default().finalize();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn finalize_keeps_explicit_value() {
        let config = partial("http://staging:9000/api").finalize();
        assert_eq!(config.api_base_url, "http://staging:9000/api");
    }
}
