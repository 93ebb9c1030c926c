//! Chat page hosting the conversation panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

/// Chat page — a header plus the conversation panel.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"RxChat"</h1>
                <p class="chat-page__subtitle">"Ask questions about your prescription"</p>
            </header>
            <ChatPanel/>
        </div>
    }
}
