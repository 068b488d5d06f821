use crate::domain::customer::api::create_customer;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::message::{Message, MessageBanner};
use contracts::domain::customer::CustomerCreate;
use leptos::prelude::*;

#[component]
pub fn CustomerForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (message, set_message) = signal::<Option<Message>>(None);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let request = CustomerCreate {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
        };
        if request.name.is_empty() || request.email.is_empty() {
            set_message.set(Some(Message::error("Name and email are required")));
            return;
        }

        set_submitting.set(true);
        set_message.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match create_customer(&request).await {
                Ok(created) => {
                    set_message.set(Some(Message::success(format!(
                        "Customer \"{}\" created successfully!",
                        created.name
                    ))));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    ctx.trigger_refresh();
                }
                Err(e) => set_message.set(Some(Message::error(e))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="form-page customer-form">
            <h2 class="form-page__title">{"Add New Customer"}</h2>

            <MessageBanner message=Signal::derive(move || message.get()) />

            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <div class="form-group">
                    <label for="name">{"Name *"}</label>
                    <input
                        type="text"
                        id="name"
                        required
                        placeholder="Customer name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email *"}</label>
                    <input
                        type="email"
                        id="email"
                        required
                        placeholder="customer@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="button button--primary button--block"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Creating Customer..." } else { "Create Customer" }}
                </button>
            </form>
        </div>
    }
}
