//! Conversation panel: message thread, loading indicator, and the input
//! bar with text entry, PDF attach, and send affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the turn dispatch: drafts are taken from the composer, the user
//! message is appended optimistically, and the ask call settles the turn
//! through shared chat state.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::chat::{ChatState, Sender};
use crate::state::composer::ComposerState;

/// Chat panel showing the conversation history and the composer.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let composer = RwSignal::new(ComposerState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the newest content visible whenever the thread grows or the
    // loading row appears.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.phase;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if chat.get().phase.is_pending() {
            return;
        }
        let Some(draft) = composer.try_update(ComposerState::take_draft).flatten() else {
            return;
        };

        let attachment_name = draft.staged.as_ref().map(|f| f.name.clone());
        chat.update(|c| c.begin_turn(draft.text.clone(), attachment_name));

        // Reset the picker so the same file can be staged again later.
        #[cfg(feature = "hydrate")]
        {
            if let Some(input_el) = file_ref.get_untracked() {
                input_el.set_value("");
            }
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::ask(&draft.text, draft.staged.as_ref()).await;
            if let Err(err) = &outcome {
                log::warn!("ask request failed: {err:?}");
            }
            chat.update(|c| c.settle_turn(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input_el) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input_el.files().and_then(|list| list.get(0)) else {
                return;
            };
            let accepted = composer
                .try_update(|c| {
                    c.stage(
                        &file.type_(),
                        crate::state::composer::StagedFile {
                            name: file.name(),
                            file: file.clone(),
                        },
                    )
                })
                .unwrap_or(false);
            if !accepted {
                // Non-PDF picks are dropped silently; a previously staged
                // file stays in place.
                log::debug!("ignoring non-pdf selection");
                input_el.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_clear_staged = move |_| {
        composer.update(|c| c.clear_staged());
        #[cfg(feature = "hydrate")]
        {
            if let Some(input_el) = file_ref.get_untracked() {
                input_el.set_value("");
            }
        }
    };

    let pending = move || chat.get().phase.is_pending();
    let can_send = move || !pending() && composer.get().has_content();
    let staged_name = move || composer.get().staged.map(|f| f.name);

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"Ask a question or attach a prescription PDF."</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let is_bot = msg.sender == Sender::Bot;
                            let is_user = msg.sender == Sender::User;
                            let text = msg.text.clone();
                            let attachment = msg.attachment_name.clone();
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--bot=is_bot
                                    class:chat-panel__message--user=is_user
                                >
                                    <div class="chat-panel__content">
                                        {if is_bot {
                                            let rendered = render_markdown_html(&text);
                                            view! {
                                                <div class="chat-panel__markdown" inner_html=rendered></div>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span>{text}</span> }.into_any()
                                        }}
                                    </div>
                                    {attachment
                                        .map(|name| {
                                            view! {
                                                <span class="chat-panel__attachment-name">{name}</span>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    pending().then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <Show when=move || staged_name().is_some()>
                <div class="chat-panel__staged">
                    <span class="chat-panel__staged-name">{move || staged_name().unwrap_or_default()}</span>
                    <button class="chat-panel__staged-clear" title="Remove attachment" on:click=on_clear_staged>
                        "\u{00d7}"
                    </button>
                </div>
            </Show>

            <div class="chat-panel__input-row">
                <label class="chat-panel__attach" title="Attach a PDF">
                    <svg class="chat-panel__attach-icon" viewBox="0 0 20 20" aria-hidden="true">
                        <line x1="10" y1="4" x2="10" y2="16"></line>
                        <line x1="4" y1="10" x2="16" y2="10"></line>
                    </svg>
                    <input
                        class="chat-panel__file"
                        type="file"
                        accept="application/pdf"
                        node_ref=file_ref
                        disabled=pending
                        on:change=on_file_change
                    />
                </label>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about your prescription..."
                    disabled=pending
                    prop:value=move || composer.get().text
                    on:input=move |ev| composer.update(|c| c.text = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from the reply before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
