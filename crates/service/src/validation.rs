//! Required-field checks shared by every create request.

use serde_json::Number;

use crate::errors::ServiceError;

/// How strictly a required field is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The key must be present; any value, `null` included, is accepted.
    Present,
    /// The key must be present and its value must not be blank.
    NonEmpty,
}

pub trait FieldValue {
    fn is_blank(&self) -> bool;
}

impl FieldValue for String {
    fn is_blank(&self) -> bool { self.trim().is_empty() }
}

impl FieldValue for Number {
    fn is_blank(&self) -> bool { false }
}

/// A key that was sent with an explicit `null`.
impl<T: FieldValue> FieldValue for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, |v| v.is_blank())
    }
}

/// A named request field as received (`None` when the key was absent).
pub struct RequiredField<'a> {
    pub name: &'static str,
    pub value: Option<&'a dyn FieldValue>,
}

pub fn field<'a, T: FieldValue>(name: &'static str, value: &'a Option<T>) -> RequiredField<'a> {
    RequiredField { name, value: value.as_ref().map(|v| v as &dyn FieldValue) }
}

/// Names of the fields that fail `rule`, in the order given.
pub fn missing_fields(fields: &[RequiredField<'_>], rule: Requirement) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|f| match (f.value, rule) {
            (None, _) => true,
            (Some(_), Requirement::Present) => false,
            (Some(v), Requirement::NonEmpty) => v.is_blank(),
        })
        .map(|f| f.name)
        .collect()
}

/// Fail with a validation error built by `message` when any field fails `rule`.
pub fn require_fields<M>(fields: &[RequiredField<'_>], rule: Requirement, message: M) -> Result<(), ServiceError>
where
    M: FnOnce(&[&'static str]) -> String,
{
    let missing = missing_fields(fields, rule);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(message(&missing)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_rule_accepts_blank_values() {
        let name = Some(String::new());
        let amount = Some(Number::from(0));
        let fields = [field("name", &name), field("amount", &amount)];
        assert!(missing_fields(&fields, Requirement::Present).is_empty());
    }

    #[test]
    fn present_rule_accepts_explicit_null() {
        let restaurant_id: Option<Option<String>> = Some(None);
        let amount: Option<Option<Number>> = None;
        let fields = [field("restaurantId", &restaurant_id), field("amount", &amount)];
        assert_eq!(missing_fields(&fields, Requirement::Present), vec!["amount"]);
        assert_eq!(missing_fields(&fields, Requirement::NonEmpty), vec!["restaurantId", "amount"]);
    }

    #[test]
    fn non_empty_rule_flags_blank_and_absent() {
        let name = Some("   ".to_string());
        let location: Option<String> = None;
        let mode = Some("dine-in".to_string());
        let fields = [field("name", &name), field("location", &location), field("mode", &mode)];
        assert_eq!(missing_fields(&fields, Requirement::NonEmpty), vec!["name", "location"]);
    }

    #[test]
    fn require_fields_builds_message_from_missing_names() {
        let a: Option<String> = None;
        let b = Some("x".to_string());
        let err = require_fields(&[field("a", &a), field("b", &b)], Requirement::Present, |m| m.join("+"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref msg) if msg == "a"));
    }
}
