use leptos::*;

use crate::merge_class;

#[component]
/// Base dialog root. Renders its children only while `open` is true and
/// reports close intent (Escape, overlay click) through `on_open_change`.
///
/// The open/closed boolean is owned entirely by the caller; this component
/// never flips it on its own.
pub fn Dialog(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    let content = store_value(children().into_view());
    let request_close = move || {
        if let Some(on_open_change) = on_open_change.as_ref() {
            on_open_change.call(false);
        }
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="widget-dialog"
                data-widget="dialog"
                tabindex=-1
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        request_close();
                    }
                }
            >
                <div
                    class="widget-dialog-overlay"
                    data-widget="dialog-overlay"
                    aria-hidden="true"
                    on:click=move |_| request_close()
                ></div>
                {content.get_value()}
            </div>
        </Show>
    }
}

#[component]
/// Base dialog panel carrying the `role="dialog"` semantics.
pub fn DialogContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("widget-dialog-content", class.as_deref())
            role="dialog"
            aria-modal="true"
            data-widget="dialog-content"
            {..attrs}
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}

#[component]
/// Base dialog header block.
pub fn DialogHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("widget-dialog-header", class.as_deref())
            data-widget="dialog-header"
        >
            {children()}
        </div>
    }
}

#[component]
/// Base dialog footer block for action buttons.
pub fn DialogFooter(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("widget-dialog-footer", class.as_deref())
            data-widget="dialog-footer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Base dialog title heading.
pub fn DialogTitle(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_class("widget-dialog-title", class.as_deref())
            data-widget="dialog-title"
        >
            {children()}
        </h2>
    }
}

#[component]
/// Base dialog description paragraph.
pub fn DialogDescription(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_class("widget-dialog-description", class.as_deref())
            data-widget="dialog-description"
        >
            {children()}
        </p>
    }
}
