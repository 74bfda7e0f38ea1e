//! Request body validation. Collects every field error before failing.

use crate::entity::{AuthorPatch, CreateAuthor};
use crate::error::AppError;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Both names are required strings.
    pub fn create_author(body: &Value) -> Result<CreateAuthor, AppError> {
        let fields = fields_of(body);
        let mut errors = Vec::new();
        let first_name = required_string(&fields, "firstName", &mut errors);
        let last_name = required_string(&fields, "lastName", &mut errors);
        match (first_name, last_name) {
            (Some(first_name), Some(last_name)) if errors.is_empty() => Ok(CreateAuthor {
                first_name,
                last_name,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }

    /// Only the fields present in body (for PATCH). Absent and null fields are skipped.
    pub fn author_patch(body: &Value) -> Result<AuthorPatch, AppError> {
        let fields = fields_of(body);
        let mut errors = Vec::new();
        let first_name = optional_string(&fields, "firstName", &mut errors);
        let last_name = optional_string(&fields, "lastName", &mut errors);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(AuthorPatch {
            first_name,
            last_name,
        })
    }
}

/// Anything other than an object is validated as `{}`.
fn fields_of(body: &Value) -> Map<String, Value> {
    match body {
        Value::Object(m) => m.clone(),
        _ => Map::new(),
    }
}

fn not_a_string(field: &str) -> String {
    format!("{} must be a string", field)
}

fn required_string(fields: &Map<String, Value>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match fields.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => {
            errors.push(not_a_string(field));
            None
        }
    }
}

fn optional_string(fields: &Map<String, Value>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(not_a_string(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(result: Result<impl std::fmt::Debug, AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(m)) => m,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn create_accepts_both_names() {
        let input = RequestValidator::create_author(&json!({ "firstName": "A", "lastName": "B", "extra": 1 })).unwrap();
        assert_eq!(input.first_name, "A");
        assert_eq!(input.last_name, "B");
    }

    #[test]
    fn create_reports_missing_first_name_only() {
        let m = messages(RequestValidator::create_author(&json!({ "lastName": "X" })));
        assert_eq!(m, vec!["firstName must be a string"]);
    }

    #[test]
    fn create_reports_both_fields_in_order() {
        let m = messages(RequestValidator::create_author(&json!({})));
        assert_eq!(m, vec!["firstName must be a string", "lastName must be a string"]);
    }

    #[test]
    fn create_rejects_non_string_and_null() {
        let m = messages(RequestValidator::create_author(&json!({ "firstName": null, "lastName": 5 })));
        assert_eq!(m, vec!["firstName must be a string", "lastName must be a string"]);
    }

    #[test]
    fn create_treats_non_object_as_empty() {
        let m = messages(RequestValidator::create_author(&json!(["firstName"])));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn patch_skips_absent_and_null() {
        let patch = RequestValidator::author_patch(&json!({ "firstName": "A", "lastName": null })).unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("A"));
        assert_eq!(patch.last_name, None);
        assert!(RequestValidator::author_patch(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn patch_rejects_wrong_types() {
        let m = messages(RequestValidator::author_patch(&json!({ "firstName": 1, "lastName": 1 })));
        assert_eq!(m, vec!["firstName must be a string", "lastName must be a string"]);
        let m = messages(RequestValidator::author_patch(&json!({ "lastName": true })));
        assert_eq!(m, vec!["lastName must be a string"]);
    }
}
