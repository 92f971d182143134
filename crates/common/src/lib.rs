//! Shared building blocks for the restaurant expenses workspace.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_body_serializes_flat() {
        let body = serde_json::to_value(types::MessageBody::new("Deleted")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Deleted"}));
    }
}
