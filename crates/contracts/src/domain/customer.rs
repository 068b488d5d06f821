use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request body for `POST /customers/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}

/// Customer record as returned by `GET /customers/`.
///
/// `created_at` is a naive ISO-8601 timestamp (the backend stores local
/// time without an offset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_deserializes_from_backend_json() {
        let json = r#"{"id": 7, "name": "Ada", "email": "ada@example.com",
                       "created_at": "2024-03-15T14:02:26.123456"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, 7);
        assert_eq!(customer.name, "Ada");
        assert_eq!(customer.email, "ada@example.com");
    }

    #[test]
    fn customer_create_serializes_wire_names() {
        let request = CustomerCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Ada", "email": "ada@example.com"})
        );
    }
}
