use super::global_context::{AppGlobalContext, Tab};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Customers => "customers",
        Tab::AddCustomer => "plus",
        Tab::Orders => "orders",
        Tab::AddOrder => "cart",
    }
}

/// Horizontal tab bar switching the main content area.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || ctx.active.get() == tab
                            on:click=move |_| ctx.active.set(tab)
                        >
                            {icon(tab_icon(tab))}
                            <span>{tab.title()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
