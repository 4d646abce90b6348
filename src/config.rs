//! Page configuration - element identifiers, class names and the reveal threshold

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Identifiers and class names the behaviors bind to.
///
/// Every field falls back to the markup the behaviors were written for, so
/// `{}` deserializes to [`PageConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Identifier of the control that opens and closes the menu
    #[serde(default = "default_menu_toggle_id")]
    pub menu_toggle_id: String,
    /// Identifier of the navigation container
    #[serde(default = "default_navbar_id")]
    pub navbar_id: String,
    /// Selector for the list inside the navigation container
    #[serde(default = "default_nav_list_selector")]
    pub nav_list_selector: String,
    /// Class marking the menu as open
    #[serde(default = "default_menu_open_class")]
    pub menu_open_class: String,
    /// Selector for in-page links
    #[serde(default = "default_link_selector")]
    pub link_selector: String,
    /// Identifier of the section revealed on scroll
    #[serde(default = "default_reveal_section_id")]
    pub reveal_section_id: String,
    /// Class added once the section is in view
    #[serde(default = "default_reveal_class")]
    pub reveal_class: String,
    /// Viewport height is divided by this to get the reveal threshold
    #[serde(default = "default_reveal_divisor")]
    pub reveal_divisor: f64,
}

fn default_menu_toggle_id() -> String { "menu-toggle".to_string() }
fn default_navbar_id() -> String { "navbar".to_string() }
fn default_nav_list_selector() -> String { "ul".to_string() }
fn default_menu_open_class() -> String { "show".to_string() }
fn default_link_selector() -> String { "a[href^=\"#\"]".to_string() }
fn default_reveal_section_id() -> String { "workflow".to_string() }
fn default_reveal_class() -> String { "visible".to_string() }
fn default_reveal_divisor() -> f64 { 1.3 }

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            menu_toggle_id: default_menu_toggle_id(),
            navbar_id: default_navbar_id(),
            nav_list_selector: default_nav_list_selector(),
            menu_open_class: default_menu_open_class(),
            link_selector: default_link_selector(),
            reveal_section_id: default_reveal_section_id(),
            reveal_class: default_reveal_class(),
            reveal_divisor: default_reveal_divisor(),
        }
    }
}

impl PageConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> NavResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the DOM would refuse at dispatch time
    pub fn validate(&self) -> NavResult<()> {
        let required = [
            ("menu_toggle_id", &self.menu_toggle_id),
            ("navbar_id", &self.navbar_id),
            ("nav_list_selector", &self.nav_list_selector),
            ("link_selector", &self.link_selector),
            ("reveal_section_id", &self.reveal_section_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(NavError::InvalidConfig(format!("{} must not be empty", field)));
            }
        }

        // classList rejects empty tokens and tokens containing whitespace
        for (field, class) in [
            ("menu_open_class", &self.menu_open_class),
            ("reveal_class", &self.reveal_class),
        ] {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(NavError::InvalidConfig(format!(
                    "{} '{}' is not a valid class token",
                    field, class
                )));
            }
        }

        if !self.reveal_divisor.is_finite() || self.reveal_divisor <= 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "reveal_divisor must be a positive number, got {}",
                self.reveal_divisor
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_markup() {
        let config = PageConfig::default();
        assert_eq!(config.menu_toggle_id, "menu-toggle");
        assert_eq!(config.navbar_id, "navbar");
        assert_eq!(config.menu_open_class, "show");
        assert_eq!(config.reveal_section_id, "workflow");
        assert_eq!(config.reveal_class, "visible");
        assert_eq!(config.reveal_divisor, 1.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PageConfig::from_json(r#"{ "reveal_section_id": "features" }"#).unwrap();
        assert_eq!(config.reveal_section_id, "features");
        assert_eq!(config.menu_toggle_id, "menu-toggle");
        assert_eq!(config.link_selector, "a[href^=\"#\"]");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_rejects_bad_divisor() {
        let err = PageConfig::from_json(r#"{ "reveal_divisor": 0.0 }"#).unwrap_err();
        assert!(matches!(err, NavError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_class_with_whitespace() {
        let config = PageConfig {
            menu_open_class: "is open".to_string(),
            ..PageConfig::default()
        };
        assert!(matches!(config.validate(), Err(NavError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        let err = PageConfig::from_json("{ reveal_class: ").unwrap_err();
        assert!(matches!(err, NavError::Json(_)));
    }
}
