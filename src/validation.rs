//! Structural validation shared by every request and response schema.
//!
//! Validation only checks shape: which fields are present, which are
//! missing and what JSON type each one holds. Policy (password strength,
//! wallet existence) belongs to the wallet engine.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value as Json};

/// Path used for errors about the value as a whole rather than one of its fields.
pub const ROOT: &str = "$";

/// A list of errors. An error is a pair of (field, error msg).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<(String, String)>);

impl ValidationErrors {
    /// Append the errors of `other` to this list.
    pub fn extend(&mut self, other: ValidationErrors) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    /// Iterate over the `(field, message)` pairs, in the order they were found.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, msg)| (field.as_str(), msg.as_str()))
    }

    /// Iterate over the offending field paths.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(field, _)| field)
    }

    /// Whether `field` is one of the offending field paths.
    pub fn contains(&self, field: &str) -> bool {
        self.fields().any(|f| f == field)
    }

    /// Number of errors in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no errors at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nest every path under `prefix`, e.g. `id` under `[2]` becomes `[2].id`.
    pub fn prefixed(self, prefix: &str) -> Self {
        ValidationErrors(
            self.0
                .into_iter()
                .map(|(field, msg)| {
                    let field = if field == ROOT {
                        prefix.to_string()
                    } else {
                        format!("{}.{}", prefix, field)
                    };
                    (field, msg)
                })
                .collect(),
        )
    }
}

impl From<Vec<(String, String)>> for ValidationErrors {
    fn from(errors: Vec<(String, String)>) -> Self {
        ValidationErrors(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value")?;
        for (i, (field, msg)) in self.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{}`{}` {}", sep, field, msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A value with a fixed wire shape that must be checked whenever it crosses
/// the boundary between the wallet UI and the wallet engine.
pub trait Schema: Sized {
    /// Check `value` against the schema and build the validated value.
    fn validate(value: &Json) -> Result<Self, ValidationErrors>;

    /// Wire form of the value. Validating it again yields an equal value.
    fn to_json(&self) -> Json;
}

/// Create an error message associated to a field name.
pub fn field_error<F: ToString, M: ToString>(field: F, msg: M) -> ValidationErrors {
    vec![(field.to_string(), msg.to_string())].into()
}

/// Combine two Results but accumulate their errors.
pub fn combine_field_errors<A, B, C, F>(
    res1: Result<A, ValidationErrors>,
    res2: Result<B, ValidationErrors>,
    combinator: F,
) -> Result<C, ValidationErrors>
where
    F: FnOnce(A, B) -> C,
{
    match (res1, res2) {
        (Err(mut err1), Err(err2)) => {
            err1.extend(err2);
            Err(err1)
        }
        (Err(err1), _) => Err(err1),
        (_, Err(err2)) => Err(err2),
        (Ok(a), Ok(b)) => Ok(combinator(a, b)),
    }
}

/// Combine three Results accumulating their errors.
pub fn combine3_field_errors<A, B, C, D, F>(
    res1: Result<A, ValidationErrors>,
    res2: Result<B, ValidationErrors>,
    res3: Result<C, ValidationErrors>,
    combinator: F,
) -> Result<D, ValidationErrors>
where
    F: FnOnce(A, B, C) -> D,
{
    combine_field_errors(
        combine_field_errors(res1, res2, |a, b| (a, b)),
        res3,
        |(a, b), c| combinator(a, b, c),
    )
}

/// Name of the JSON type of `value`, for error messages.
pub(crate) fn kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

pub(crate) fn object(value: &Json) -> Result<&Map<String, Json>, ValidationErrors> {
    value
        .as_object()
        .ok_or_else(|| field_error(ROOT, format!("expected an object, found {}", kind(value))))
}

pub(crate) fn array(value: &Json) -> Result<&Vec<Json>, ValidationErrors> {
    value
        .as_array()
        .ok_or_else(|| field_error(ROOT, format!("expected an array, found {}", kind(value))))
}

/// Every field of `fields` not listed in `known` is an error.
pub(crate) fn reject_unknown_fields(
    fields: &Map<String, Json>,
    known: &[&str],
) -> Result<(), ValidationErrors> {
    let unknown: Vec<(String, String)> = fields
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .map(|key| (key.clone(), "unexpected field".to_string()))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(unknown.into())
    }
}

pub(crate) fn required_string(
    fields: &Map<String, Json>,
    field: &str,
) -> Result<String, ValidationErrors> {
    match fields.get(field) {
        None => Err(field_error(field, "missing required field")),
        Some(value) => string(field, value),
    }
}

/// An absent field is `None`; a present one must hold a string, `null` included.
pub(crate) fn optional_string(
    fields: &Map<String, Json>,
    field: &str,
) -> Result<Option<String>, ValidationErrors> {
    fields
        .get(field)
        .map(|value| string(field, value))
        .transpose()
}

pub(crate) fn non_empty(field: &str, value: String) -> Result<String, ValidationErrors> {
    if value.is_empty() {
        Err(field_error(field, "must not be empty"))
    } else {
        Ok(value)
    }
}

fn string(field: &str, value: &Json) -> Result<String, ValidationErrors> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| field_error(field, format!("expected a string, found {}", kind(value))))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields(value: Json) -> Map<String, Json> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_combine_accumulates_both_errors() {
        let res1: Result<u8, _> = Err(field_error("a", "bad"));
        let res2: Result<u8, _> = Err(field_error("b", "bad"));

        let err = combine_field_errors(res1, res2, |a, b| a + b).unwrap_err();

        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_combine3_returns_combined_value() {
        let combined = combine3_field_errors(Ok(1), Ok(2), Ok(3), |a, b, c| a + b + c);

        assert_eq!(combined, Ok(6));
    }

    #[test]
    fn test_combine3_keeps_single_error() {
        let res2: Result<i32, _> = Err(field_error("b", "bad"));

        let err = combine3_field_errors(Ok(1), res2, Ok(3), |a, b, c| a + b + c).unwrap_err();

        assert_eq!(err.len(), 1);
        assert!(err.contains("b"));
    }

    #[test]
    fn test_required_string_missing_and_wrong_type() {
        let map = fields(json!({ "n": 1 }));

        let missing = required_string(&map, "s").unwrap_err();
        assert_eq!(
            missing.iter().collect::<Vec<_>>(),
            vec![("s", "missing required field")]
        );

        let wrong = required_string(&map, "n").unwrap_err();
        assert_eq!(
            wrong.iter().collect::<Vec<_>>(),
            vec![("n", "expected a string, found number")]
        );
    }

    #[test]
    fn test_optional_string_distinguishes_absent_empty_and_null() {
        let map = fields(json!({ "empty": "", "null": null }));

        assert_eq!(optional_string(&map, "absent"), Ok(None));
        assert_eq!(optional_string(&map, "empty"), Ok(Some(String::new())));
        assert!(optional_string(&map, "null").unwrap_err().contains("null"));
    }

    #[test]
    fn test_reject_unknown_fields_names_every_extra_field() {
        let map = fields(json!({ "id": "w1", "x": 1, "y": 2 }));

        let err = reject_unknown_fields(&map, &["id"]).unwrap_err();

        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(reject_unknown_fields(&map, &["id", "x", "y"]).is_ok());
    }

    #[test]
    fn test_non_object_is_rejected_at_root() {
        let err = object(&json!([1, 2])).unwrap_err();

        assert_eq!(
            err.iter().collect::<Vec<_>>(),
            vec![(ROOT, "expected an object, found array")]
        );
    }

    #[test]
    fn test_prefixed_nests_paths() {
        let mut errors = field_error(ROOT, "expected an object, found null");
        errors.extend(field_error("id", "must not be empty"));

        let nested = errors.prefixed("[3]");

        assert_eq!(nested.fields().collect::<Vec<_>>(), vec!["[3]", "[3].id"]);
    }

    #[test]
    fn test_display_lists_fields() {
        let mut errors = field_error("id", "missing required field");
        errors.extend(field_error("password", "expected a string, found number"));

        assert_eq!(
            errors.to_string(),
            "invalid value: `id` missing required field, `password` expected a string, found number"
        );
    }

    #[test]
    fn test_serializes_as_field_message_pairs() {
        let errors = field_error("id", "missing required field");

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!([["id", "missing required field"]])
        );
    }
}
