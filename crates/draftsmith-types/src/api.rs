use serde::{Deserialize, Serialize};

use crate::validation::ValidationIssue;

// -- Generation --

/// Options sent alongside a prompt. Every field is optional; see
/// [`GenerationOptions::resolve`] for the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub layout_style: Option<String>,
    pub color_theme: Option<String>,
    pub include_hover_states: Option<bool>,
    pub dark_mode_support: Option<bool>,
    pub include_accessibility: Option<bool>,
    pub include_animations: Option<bool>,
    pub output_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub layout_style: String,
    pub color_theme: String,
    pub include_hover_states: bool,
    pub dark_mode_support: bool,
    pub include_accessibility: bool,
    pub include_animations: bool,
    pub output_format: String,
}

impl GenerationOptions {
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            layout_style: self
                .layout_style
                .clone()
                .unwrap_or_else(|| "responsive".into()),
            color_theme: self.color_theme.clone().unwrap_or_else(|| "default".into()),
            include_hover_states: self.include_hover_states.unwrap_or(true),
            dark_mode_support: self.dark_mode_support.unwrap_or(true),
            include_accessibility: self.include_accessibility.unwrap_or(true),
            include_animations: self.include_animations.unwrap_or(false),
            output_format: self
                .output_format
                .clone()
                .unwrap_or_else(|| "react-tailwind".into()),
        }
    }
}

// -- Errors --

/// JSON body returned with every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationIssue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let resolved = GenerationOptions::default().resolve();
        assert_eq!(resolved.layout_style, "responsive");
        assert_eq!(resolved.color_theme, "default");
        assert!(resolved.include_hover_states);
        assert!(resolved.dark_mode_support);
        assert!(resolved.include_accessibility);
        assert!(!resolved.include_animations);
        assert_eq!(resolved.output_format, "react-tailwind");
    }

    #[test]
    fn explicit_options_override_defaults() {
        let options: GenerationOptions = serde_json::from_value(json!({
            "layoutStyle": "grid",
            "darkModeSupport": false,
            "includeAnimations": true,
            "somethingElse": 1
        }))
        .unwrap();

        let resolved = options.resolve();
        assert_eq!(resolved.layout_style, "grid");
        assert!(!resolved.dark_mode_support);
        assert!(resolved.include_animations);
        assert_eq!(resolved.color_theme, "default");
    }

    #[test]
    fn error_response_omits_empty_detail() {
        let body = serde_json::to_value(ErrorResponse::message("Design not found")).unwrap();
        assert_eq!(body, json!({ "message": "Design not found" }));
    }
}
