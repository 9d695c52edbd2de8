use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::*;

use crate::{bool_token, merge_class};

#[component]
/// Base single-line text input primitive.
pub fn Input(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=move || merge_class("widget-input", Some(class.get().as_str()))
            id=id
            type=input_type.unwrap_or("text")
            placeholder=placeholder.filter(|placeholder| !placeholder.is_empty())
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-widget="input"
            data-widget-disabled=move || bool_token(disabled.get())
            {..attrs}
            node_ref=node_ref
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        />
    }
}

#[component]
/// Base label primitive associated with a control through `html_for`.
pub fn Label(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] html_for: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_class("widget-label", class.as_deref())
            for=html_for.filter(|html_for| !html_for.is_empty())
            data-widget="label"
        >
            {children()}
        </label>
    }
}
