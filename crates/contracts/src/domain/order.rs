use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;

/// One line of an order-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub item_name: String,
    pub unit_price: f64,
    pub quantity: i64,
}

/// Request body for `POST /orders/`. Item order is preserved by the
/// backend and drives line numbering in the order views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub items: Vec<OrderItemCreate>,
}

/// Persisted order line as returned inside an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub item_name: String,
    pub unit_price: f64,
    pub quantity: i64,
}

/// Order record as returned by `POST /orders/` and `GET /orders/`.
///
/// `total_cost` is computed by the backend and is authoritative; the
/// frontend only estimates it while the order is being composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub total_cost: f64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_create_serializes_wire_names() {
        let request = OrderCreate {
            customer_id: 3,
            items: vec![OrderItemCreate {
                item_name: "Widget".to_string(),
                unit_price: 9.99,
                quantity: 2,
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "customer_id": 3,
                "items": [{"item_name": "Widget", "unit_price": 9.99, "quantity": 2}]
            })
        );
    }

    #[test]
    fn order_deserializes_without_customer_or_items() {
        let json = r#"{"id": 42, "customer_id": 3, "total_cost": 19.98,
                       "created_at": "2024-03-15T14:02:26"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 42);
        assert!(order.customer.is_none());
        assert!(order.items.is_empty());
    }

    #[test]
    fn order_deserializes_nested_customer_and_items() {
        let json = r#"{
            "id": 1, "customer_id": 3, "total_cost": 15.0,
            "created_at": "2024-03-15T14:02:26",
            "customer": {"id": 3, "name": "Ada", "email": "ada@example.com",
                         "created_at": "2024-01-01T00:00:00"},
            "items": [{"id": 10, "order_id": 1, "item_name": "Widget",
                       "unit_price": 5.0, "quantity": 3}]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer.as_ref().unwrap().name, "Ada");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 3);
    }
}
