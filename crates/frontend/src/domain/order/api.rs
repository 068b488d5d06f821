use contracts::domain::order::{Order, OrderCreate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, detail_or};

/// Fetch all orders with nested customer and item data.
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/orders/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: HTTP {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create an order. On a non-success status the backend's `detail`
/// message is surfaced when present.
pub async fn create_order(request: &OrderCreate) -> Result<Order, String> {
    let response = Request::post(&api_url("/orders/"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(detail_or(&body, "Failed to create order"));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
