use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Inline outcome message shown above a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

#[component]
pub fn MessageBanner(message: Signal<Option<Message>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            let class = match m.kind {
                MessageKind::Success => "message message--success",
                MessageKind::Error => "message message--error",
            };
            view! { <div class=class>{m.text}</div> }
        })
    }
}
