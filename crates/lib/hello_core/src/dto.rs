//! Response DTOs.
//!
//! Plain value holders handed from the core to whatever layer renders them.
//! They carry no behavior beyond storage and retrieval.

use serde::{Deserialize, Serialize};

/// A name paired with an amount.
///
/// Both fields are fixed at construction. The accessors return exactly what
/// was passed in; nothing is trimmed, clamped or validated.
///
/// Serializes as `{"name": ..., "amount": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelloResponseDto {
    name: String,
    amount: i32,
}

impl HelloResponseDto {
    /// Build a DTO from a name and an amount.
    pub fn new(name: impl Into<String>, amount: i32) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Consume the DTO and return its fields.
    pub fn into_parts(self) -> (String, i32) {
        (self.name, self.amount)
    }
}

impl<S: Into<String>> From<(S, i32)> for HelloResponseDto {
    fn from((name, amount): (S, i32)) -> Self {
        Self::new(name, amount)
    }
}

impl std::fmt::Display for HelloResponseDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let name = "김보민";
        let amount = 0;

        let dto = HelloResponseDto::new(name, amount);

        assert_eq!(dto.name(), name);
        assert_eq!(dto.amount(), amount);
    }

    #[test]
    fn empty_name_and_negative_amount_are_kept() {
        let dto = HelloResponseDto::new("", -5);
        assert_eq!(dto.name(), "");
        assert_eq!(dto.amount(), -5);
    }

    #[test]
    fn extreme_amounts_are_not_truncated() {
        assert_eq!(HelloResponseDto::new("max", i32::MAX).amount(), i32::MAX);
        assert_eq!(HelloResponseDto::new("min", i32::MIN).amount(), i32::MIN);
    }

    #[test]
    fn name_is_not_trimmed() {
        let dto = HelloResponseDto::new("  padded\t", 1);
        assert_eq!(dto.name(), "  padded\t");
    }

    #[test]
    fn accessors_are_idempotent() {
        let dto = HelloResponseDto::new("repeat", 42);
        assert_eq!(dto.name(), dto.name());
        assert_eq!(dto.amount(), dto.amount());
        assert_eq!(dto.name(), "repeat");
        assert_eq!(dto.amount(), 42);
    }

    #[test]
    fn into_parts_returns_fields_unchanged() {
        let dto = HelloResponseDto::new(String::from("owned"), 7);
        assert_eq!(dto.into_parts(), (String::from("owned"), 7));
    }

    #[test]
    fn from_tuple_matches_new() {
        let dto: HelloResponseDto = ("tuple", -1).into();
        assert_eq!(dto, HelloResponseDto::new("tuple", -1));
    }

    #[test]
    fn display_shows_name_and_amount() {
        let dto = HelloResponseDto::new("kim", 3);
        assert_eq!(dto.to_string(), "kim (3)");
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HelloResponseDto>();
    }

    #[test]
    fn serializes_fields_by_name() {
        let dto = HelloResponseDto::new("김보민", 0);
        let json = serde_json::to_value(&dto).expect("serialize");

        assert_eq!(json, serde_json::json!({ "name": "김보민", "amount": 0 }));
    }

    #[test]
    fn deserializes_from_named_fields() {
        let dto: HelloResponseDto =
            serde_json::from_str(r#"{"name":"kim","amount":2147483647}"#).expect("deserialize");
        assert_eq!(dto.name(), "kim");
        assert_eq!(dto.amount(), i32::MAX);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result =
            serde_json::from_str::<HelloResponseDto>(r#"{"name":"kim","amount":1,"extra":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_amount() {
        let result =
            serde_json::from_str::<HelloResponseDto>(r#"{"name":"kim","amount":2147483648}"#);
        assert!(result.is_err());
    }
}
