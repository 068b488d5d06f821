pub mod global_context;
pub mod tabs;

use crate::domain::customer::ui::form::CustomerForm;
use crate::domain::customer::ui::list::CustomerList;
use crate::domain::order::ui::form::OrderForm;
use crate::domain::order::ui::list::OrderList;
use crate::shared::components::demo_notice::{is_static_demo_host, DemoNotice};
use global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;
use tabs::TabBar;

fn on_demo_host() -> bool {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .map(|hostname| is_static_demo_host(&hostname))
        .unwrap_or(false)
}

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |         Header (title, status)           |
/// +------------------------------------------+
/// |                 TabBar                   |
/// +------------------------------------------+
/// |          Content (active tab)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="app-layout">
            <header class="header">
                <div class="header__content">
                    <h1 class="header__title">{"E-Commerce Portal"}</h1>
                    <span class="header__subtitle">{"Local Data Collection System"}</span>
                </div>
                <span class="header__status">{"Online"}</span>
            </header>

            <TabBar />

            <main class="app-main">
                {on_demo_host().then(|| view! { <DemoNotice /> })}
                {move || match ctx.active.get() {
                    Tab::Customers => view! { <CustomerList /> }.into_any(),
                    Tab::AddCustomer => view! { <CustomerForm /> }.into_any(),
                    Tab::Orders => view! { <OrderList /> }.into_any(),
                    Tab::AddOrder => view! { <OrderForm /> }.into_any(),
                }}
            </main>
        </div>
    }
}
