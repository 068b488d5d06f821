use crate::domain::customer;
use crate::domain::order::api;
use crate::domain::order::draft::OrderDraft;
use crate::shared::components::message::Message;
use crate::shared::format::format_amount;
use contracts::domain::customer::Customer;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the order composition form.
///
/// Submission is an explicit Idle -> Submitting -> Idle machine: the
/// `submitting` flag is checked at the command level, so a re-entrant
/// call is rejected even if the disabled button is bypassed.
#[derive(Clone)]
pub struct OrderFormViewModel {
    pub draft: RwSignal<OrderDraft>,
    pub customers: RwSignal<Vec<Customer>>,
    pub submitting: RwSignal<bool>,
    pub message: RwSignal<Option<Message>>,
}

impl OrderFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(OrderDraft::default()),
            customers: RwSignal::new(Vec::new()),
            submitting: RwSignal::new(false),
            message: RwSignal::new(None),
        }
    }

    /// Fetch the customer reference set once when the form mounts.
    ///
    /// A failure only leaves the select empty; the form itself stays
    /// usable (submission is disabled while the set is empty).
    pub fn load_customers(&self) {
        let customers = self.customers;
        wasm_bindgen_futures::spawn_local(async move {
            match customer::api::fetch_customers().await {
                Ok(list) => customers.set(list),
                Err(e) => log::error!("Failed to fetch customers: {}", e),
            }
        });
    }

    pub fn can_submit(&self) -> impl Fn() -> bool + '_ {
        move || !self.submitting.get() && !self.customers.get().is_empty()
    }

    pub fn submit_command(&self, on_success: Rc<dyn Fn(())>) {
        // At most one submission in flight.
        if self.submitting.get_untracked() {
            return;
        }

        // Validation failures never reach the network layer.
        let request = match self.draft.get_untracked().to_request() {
            Ok(request) => request,
            Err(e) => {
                self.message.set(Some(Message::error(e)));
                return;
            }
        };

        self.submitting.set(true);
        self.message.set(None);

        let draft = self.draft;
        let submitting = self.submitting;
        let message = self.message;
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_order(&request).await {
                Ok(created) => {
                    message.set(Some(Message::success(success_message(
                        created.id,
                        created.total_cost,
                    ))));
                    draft.set(OrderDraft::default());
                    (on_success)(());
                }
                // The draft is kept as typed so the user can correct it.
                Err(e) => message.set(Some(Message::error(e))),
            }
            submitting.set(false);
        });
    }
}

impl Default for OrderFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation text shown after creation. The embedded total is the
/// backend's `total_cost`, not the locally computed running total.
pub fn success_message(order_id: i64, total_cost: f64) -> String {
    format!(
        "Order #{} created successfully! Total: ${}",
        order_id,
        format_amount(total_cost)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_uses_server_total() {
        let text = success_message(42, 19.98);
        assert!(text.contains("Order #42"));
        assert!(text.contains("$19.98"));
    }

    #[test]
    fn success_message_pads_whole_totals() {
        assert!(success_message(7, 15.0).contains("$15.00"));
    }
}
