//! Per-engine configuration: viewport size, base font size, and an
//! optional user-agent stylesheet override. Validated once at
//! construction rather than on every frame.

use css::parse_stylesheet;

use crate::error::EngineError;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub base_font_size_px: f32,
    /// Replaces the built-in user-agent stylesheet entirely when set.
    pub user_agent_stylesheet_source: Option<String>,
}

impl EngineConfig {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        EngineConfig {
            viewport_width,
            viewport_height,
            base_font_size_px: 16.0,
            user_agent_stylesheet_source: None,
        }
    }

    pub fn with_base_font_size(mut self, size_px: f32) -> Self {
        self.base_font_size_px = size_px;
        self
    }

    pub fn with_user_agent_stylesheet(mut self, source: String) -> Self {
        self.user_agent_stylesheet_source = Some(source);
        self
    }

    /// Checks viewport/font sanity and that both the built-in and any
    /// override user-agent stylesheet parse into at least one rule.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(EngineError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.base_font_size_px <= 0.0 {
            return Err(EngineError::InvalidBaseFontSize(self.base_font_size_px));
        }

        match &self.user_agent_stylesheet_source {
            Some(src) => {
                if parse_stylesheet(src).rules.is_empty() {
                    return Err(EngineError::EmptyUserAgentOverride);
                }
            }
            None => {
                if parse_stylesheet(css::ua_stylesheet::USER_AGENT_CSS).rules.is_empty() {
                    return Err(EngineError::EmptyUserAgentStylesheet);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_viewport() {
        let cfg = EngineConfig::new(0.0, 600.0);
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidViewport { .. })));
    }

    #[test]
    fn rejects_empty_stylesheet_override() {
        let cfg = EngineConfig::new(800.0, 600.0).with_user_agent_stylesheet("/* nothing here */".to_string());
        assert!(matches!(cfg.validate(), Err(EngineError::EmptyUserAgentOverride)));
    }

    #[test]
    fn default_config_validates() {
        let cfg = EngineConfig::new(800.0, 600.0);
        assert!(cfg.validate().is_ok());
    }
}
