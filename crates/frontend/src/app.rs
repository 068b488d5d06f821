use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <Shell />
    }
}
