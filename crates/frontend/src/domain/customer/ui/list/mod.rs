use crate::domain::customer::api::fetch_customers;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::spinner::Spinner;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use contracts::domain::customer::Customer;
use leptos::prelude::*;

fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let (items, set_items) = signal::<Vec<Customer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_customers().await {
                Ok(customers) => {
                    set_items.set(customers);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // Initial fetch, then refetch whenever the refresh counter is bumped.
    Effect::new(move |_| {
        ctx.refresh.get();
        fetch();
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">{"Customers"}</h2>
                    <p class="header__description">
                        {"A list of all customers in the system including their name, email, and registration date."}
                    </p>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="message message--error">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let customers = items.get();
                if customers.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>{"No customers"}</h3>
                            <p>{"Get started by creating a new customer."}</p>
                        </div>
                    }
                    .into_any();
                }

                let count = customers.len();
                view! {
                    <div>
                    <ul class="card-list">
                        {customers.into_iter().map(|customer| view! {
                            <li class="card-list__row">
                                <div class="card-list__summary">
                                    <div class="card-list__main">
                                        <span class="card-list__avatar">
                                            {avatar_initial(&customer.name)}
                                        </span>
                                        <div>
                                            <p class="card-list__primary">{customer.name}</p>
                                            <p class="card-list__secondary">{customer.email}</p>
                                        </div>
                                    </div>
                                    <div class="card-list__aside">
                                        <p>{format!("ID: {}", customer.id)}</p>
                                        <p class="card-list__secondary">
                                            {format_timestamp(customer.created_at)}
                                        </p>
                                    </div>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>

                    <div class="list-footer">
                        <span>
                            {format!("Showing {} customer{}", count, if count == 1 { "" } else { "s" })}
                        </span>
                    </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_uses_uppercased_first_char() {
        assert_eq!(avatar_initial("ada"), "A");
        assert_eq!(avatar_initial("Bob"), "B");
        assert_eq!(avatar_initial(""), "");
    }
}
