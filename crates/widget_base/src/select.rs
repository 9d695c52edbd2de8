use leptos::*;

use crate::{bool_token, merge_class};

/// Shared state between the select root and its sub-elements.
#[derive(Clone)]
struct SelectContext {
    value: MaybeSignal<String>,
    open: RwSignal<bool>,
    disabled: MaybeSignal<bool>,
    on_value_change: Option<Callback<String>>,
}

/// Returns the surrounding select state.
///
/// Panics if a select sub-element is rendered outside a [`Select`] root; that
/// is a composition bug, not a runtime condition.
fn use_select() -> SelectContext {
    use_context::<SelectContext>().expect("select sub-element used outside `Select`")
}

#[component]
/// Base select root. Owns the popup open flag and shares the current value
/// with the trigger/value/content/item sub-elements through context.
pub fn Select(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let open = create_rw_signal(false);
    provide_context(SelectContext {
        value,
        open,
        disabled,
        on_value_change,
    });

    view! {
        <div
            class=merge_class("widget-select", class.as_deref())
            data-widget="select"
            data-widget-open=move || bool_token(open.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Base select trigger button. This is the focusable node of the family.
pub fn SelectTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    children: Children,
) -> impl IntoView {
    let SelectContext { open, disabled, .. } = use_select();

    view! {
        <button
            type="button"
            class=merge_class("widget-select-trigger", class.as_deref())
            role="combobox"
            aria-haspopup="listbox"
            aria-expanded=move || open.get().to_string()
            disabled=move || disabled.get()
            data-widget="select-trigger"
            data-widget-disabled=move || bool_token(disabled.get())
            {..attrs}
            node_ref=node_ref
            on:click=move |_| {
                if disabled.get_untracked() {
                    return;
                }
                open.update(|open| *open = !*open);
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Base select value slot: shows the current value or the placeholder.
pub fn SelectValue(#[prop(optional, into)] placeholder: Option<String>) -> impl IntoView {
    let ctx = use_select();
    let current = ctx.value.clone();
    let empty = {
        let current = ctx.value;
        move || current.get().is_empty()
    };

    view! {
        <span
            class="widget-select-value"
            data-widget="select-value"
            data-widget-placeholder=move || bool_token(empty())
        >
            {move || {
                let value = current.get();
                if value.is_empty() {
                    placeholder.clone().unwrap_or_default()
                } else {
                    value
                }
            }}
        </span>
    }
}

#[component]
/// Base select popup surface, rendered only while the trigger holds it open.
pub fn SelectContent(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let SelectContext { open, .. } = use_select();
    let entries = store_value(children().into_view());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=merge_class("widget-select-content", class.as_deref())
                role="listbox"
                data-widget="select-content"
            >
                {entries.get_value()}
            </div>
        </Show>
    }
}

#[component]
/// Base select option group.
pub fn SelectGroup(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("widget-select-group", class.as_deref())
            role="group"
            data-widget="select-group"
        >
            {children()}
        </div>
    }
}

#[component]
/// Base select option entry. Selecting it reports the new value through the
/// root `on_value_change` and closes the popup.
pub fn SelectItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let SelectContext {
        value: current,
        open,
        on_value_change,
        ..
    } = use_select();

    let selected = {
        let current = current.clone();
        let value = value.clone();
        move || current.get() == value
    };
    let selected_token = selected.clone();

    view! {
        <button
            type="button"
            class=merge_class("widget-select-item", class.as_deref())
            role="option"
            aria-selected=move || selected().to_string()
            disabled=move || disabled.get()
            data-widget="select-item"
            data-widget-selected=move || bool_token(selected_token())
            on:click=move |_| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_value_change) = on_value_change.as_ref() {
                    on_value_change.call(value.clone());
                }
                open.set(false);
            }
        >
            {children()}
        </button>
    }
}
