use crate::domain::order::api::fetch_orders;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::spinner::Spinner;
use crate::shared::date_utils::format_timestamp;
use crate::shared::format::format_usd;
use crate::shared::icons::icon;
use contracts::domain::order::Order;
use leptos::prelude::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let (items, set_items) = signal::<Vec<Order>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (expanded, set_expanded) = signal::<Option<i64>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_orders().await {
                Ok(orders) => {
                    set_items.set(orders);
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

    let toggle = move |order_id: i64| {
        set_expanded.update(|current| {
            *current = if *current == Some(order_id) {
                None
            } else {
                Some(order_id)
            };
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">{"Orders"}</h2>
                    <p class="header__description">
                        {"A list of all orders with customer information, items, and totals."}
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
                let orders = items.get();
                if orders.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h3>{"No orders"}</h3>
                            <p>{"Get started by creating a new order."}</p>
                        </div>
                    }
                    .into_any();
                }

                let count = orders.len();
                let total_value: f64 = orders.iter().map(|o| o.total_cost).sum();
                view! {
                    <div>
                    <ul class="card-list">
                        {orders.into_iter().map(|order| {
                            let order_id = order.id;
                            let is_expanded = expanded.get() == Some(order_id);
                            let customer_badge = order
                                .customer
                                .as_ref()
                                .map(|c| view! { <span class="badge">{c.name.clone()}</span> });
                            view! {
                                <li class="card-list__row">
                                    <div class="card-list__summary" on:click=move |_| toggle(order_id)>
                                        <div class="card-list__main">
                                            <span class="card-list__avatar card-list__avatar--order">
                                                {format!("#{}", order_id)}
                                            </span>
                                            <div>
                                                <p class="card-list__primary">
                                                    {format!("Order #{}", order_id)}
                                                    {customer_badge}
                                                </p>
                                                <p class="card-list__secondary">
                                                    {format_timestamp(order.created_at)}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="card-list__aside">
                                            <span class="card-list__total">{format_usd(order.total_cost)}</span>
                                            {icon(if is_expanded { "chevron-down" } else { "chevron-right" })}
                                        </div>
                                    </div>

                                    {is_expanded.then(|| view! {
                                        <div class="card-list__details">
                                            {order.customer.as_ref().map(|customer| view! {
                                                <div class="card-list__customer">
                                                    <h4>{"Customer Information"}</h4>
                                                    <p>{format!("Name: {}", customer.name)}</p>
                                                    <p>{format!("Email: {}", customer.email)}</p>
                                                </div>
                                            })}

                                            <h4>{"Order Items"}</h4>
                                            {if order.items.is_empty() {
                                                view! {
                                                    <p class="card-list__secondary">
                                                        {"No items found for this order"}
                                                    </p>
                                                }
                                                .into_any()
                                            } else {
                                                view! {
                                                    <div class="item-breakdown">
                                                        {order.items.iter().map(|item| view! {
                                                            <div class="item-breakdown__row">
                                                                <div>
                                                                    <p class="item-breakdown__name">{item.item_name.clone()}</p>
                                                                    <p class="item-breakdown__detail">
                                                                        {format!("{} x {}", format_usd(item.unit_price), item.quantity)}
                                                                    </p>
                                                                </div>
                                                                <span>{format_usd(item.unit_price * item.quantity as f64)}</span>
                                                            </div>
                                                        }).collect_view()}
                                                        <div class="item-breakdown__total">
                                                            <span>{"Total:"}</span>
                                                            <span>{format_usd(order.total_cost)}</span>
                                                        </div>
                                                    </div>
                                                }
                                                .into_any()
                                            }}
                                        </div>
                                    })}
                                </li>
                            }
                        }).collect_view()}
                    </ul>

                    <div class="list-footer">
                        <span>
                            {format!("Showing {} order{}", count, if count == 1 { "" } else { "s" })}
                        </span>
                        <span>
                            {"Total Value: "}
                            <strong>{format_usd(total_value)}</strong>
                        </span>
                    </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
