use leptos::*;

use crate::merge_class;

#[component]
/// Base alert surface carrying `role="alert"` semantics.
pub fn Alert(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("widget-alert", class.as_deref())
            role="alert"
            data-widget="alert"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Base alert title heading.
pub fn AlertTitle(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h5 class=merge_class("widget-alert-title", class.as_deref()) data-widget="alert-title">
            {children()}
        </h5>
    }
}

#[component]
/// Base alert description block.
pub fn AlertDescription(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("widget-alert-description", class.as_deref())
            data-widget="alert-description"
        >
            {children()}
        </div>
    }
}
