use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::DesignDraft;

/// One field-level problem found while validating a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: Vec<String>,
    pub message: String,
    pub code: String,
}

impl ValidationIssue {
    pub fn invalid_type(field: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.into(),
            code: "invalid_type".into(),
        }
    }

    pub fn invalid_object(path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code: "invalid_object".into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{} validation issue(s)", .issues.len())]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

/// Body of a design-creation request after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDesign {
    pub name: String,
    pub prompt: String,
    pub generated_design: Option<Value>,
}

impl NewDesign {
    /// Validates a raw JSON body. All issues are reported, not just the first.
    /// Keys other than `name`, `prompt` and `generatedDesign` are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let Some(obj) = body.as_object() else {
            return Err(ValidationErrors {
                issues: vec![ValidationIssue::invalid_object(
                    Vec::new(),
                    format!("Expected object, received {}", kind_of(body)),
                )],
            });
        };

        let mut issues = Vec::new();
        let name = required_string(obj, "name", &mut issues);
        let prompt = required_string(obj, "prompt", &mut issues);
        let generated_design = match obj.get("generatedDesign") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.clone()),
        };

        match (name, prompt) {
            (Some(name), Some(prompt)) if issues.is_empty() => Ok(Self {
                name,
                prompt,
                generated_design,
            }),
            _ => Err(ValidationErrors { issues }),
        }
    }

    pub fn stamped(self, created_at: impl Into<String>) -> DesignDraft {
        DesignDraft {
            name: self.name,
            prompt: self.prompt,
            generated_design: self.generated_design,
            created_at: created_at.into(),
        }
    }
}

fn required_string(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        None | Some(Value::Null) => {
            issues.push(ValidationIssue::invalid_type(field, "Required"));
            None
        }
        Some(other) => {
            issues.push(ValidationIssue::invalid_type(
                field,
                format!("Expected string, received {}", kind_of(other)),
            ));
            None
        }
    }
}

pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_minimal_body() {
        let design = NewDesign::from_json(&json!({ "name": "Card", "prompt": "a card" })).unwrap();
        assert_eq!(design.name, "Card");
        assert_eq!(design.prompt, "a card");
        assert_eq!(design.generated_design, None);
    }

    #[test]
    fn ignores_caller_supplied_metadata() {
        let design = NewDesign::from_json(&json!({
            "name": "Card",
            "prompt": "a card",
            "userId": 42,
            "createdAt": "1999-01-01",
            "generatedDesign": { "html": "<div/>" }
        }))
        .unwrap();

        let draft = design.stamped("2026-10-17T00:00:00.000Z");
        assert_eq!(draft.created_at, "2026-10-17T00:00:00.000Z");
        assert_eq!(draft.generated_design, Some(json!({ "html": "<div/>" })));
    }

    #[test]
    fn null_generated_design_is_absent() {
        let design =
            NewDesign::from_json(&json!({ "name": "a", "prompt": "b", "generatedDesign": null }))
                .unwrap();
        assert!(design.generated_design.is_none());
    }

    #[test]
    fn reports_every_missing_field() {
        let err = NewDesign::from_json(&json!({})).unwrap_err();
        let paths: Vec<_> = err.issues.iter().map(|i| i.path[0].as_str()).collect();
        assert_eq!(paths, vec!["name", "prompt"]);
        assert!(err.issues.iter().all(|i| i.message == "Required"));
    }

    #[test]
    fn reports_wrong_types() {
        let err = NewDesign::from_json(&json!({ "name": 5, "prompt": "ok" })).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].message, "Expected string, received number");
        assert_eq!(err.issues[0].code, "invalid_type");
    }

    #[test]
    fn rejects_non_object_body() {
        let err = NewDesign::from_json(&json!(["name"])).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected object, received array");
        assert!(err.issues[0].path.is_empty());
    }
}
