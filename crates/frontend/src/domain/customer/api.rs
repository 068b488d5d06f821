use contracts::domain::customer::{Customer, CustomerCreate};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, detail_or};

/// Fetch the full customer set.
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let response = Request::get(&api_url("/customers/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch customers: HTTP {}",
            response.status()
        ));
    }

    response
        .json::<Vec<Customer>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new customer. The backend rejects duplicate emails with a
/// `detail` message, which is surfaced as-is.
pub async fn create_customer(request: &CustomerCreate) -> Result<Customer, String> {
    let response = Request::post(&api_url("/customers/"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(detail_or(&body, "Failed to create customer"));
    }

    response
        .json::<Customer>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
