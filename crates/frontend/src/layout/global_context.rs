use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// The four top-level views of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Customers,
    AddCustomer,
    Orders,
    AddOrder,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Customers, Tab::AddCustomer, Tab::Orders, Tab::AddOrder];

    /// Stable key used in the query string.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Customers => "customers",
            Tab::AddCustomer => "add-customer",
            Tab::Orders => "orders",
            Tab::AddOrder => "add-order",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Customers => "Customers",
            Tab::AddCustomer => "Add Customer",
            Tab::Orders => "Orders",
            Tab::AddOrder => "Create Order",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// App-global UI state shared via Leptos context.
///
/// `refresh` is a version counter bumped after every successful create;
/// the list views subscribe to it and refetch when it changes.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Tab>,
    pub refresh: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Tab::Customers),
            refresh: RwSignal::new(0),
        }
    }

    /// Invalidate fetched reference data across the app.
    pub fn trigger_refresh(&self) {
        self.refresh.update(|version| *version += 1);
    }

    /// Restore the active tab from `?tab=` and mirror tab switches back
    /// into the URL without adding history entries.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("tab").and_then(|key| Tab::from_key(key)) {
            self.active.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_keys_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn unknown_tab_key_is_rejected() {
        assert_eq!(Tab::from_key("settings"), None);
        assert_eq!(Tab::from_key(""), None);
    }
}
