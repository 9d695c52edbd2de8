use leptos::*;
use widget_base::{
    Alert as AlertSurface, AlertDescription as AlertDescriptionSurface,
    AlertTitle as AlertTitleSurface,
};

use crate::compose::{compose_class, StyleComposer};
use crate::forward::AttrBag;
use crate::theme::AlertVariant;

#[component]
/// Stable alert wrapper. Maps the severity variant to the active theme's
/// tone descriptor; unknown severities have already collapsed to the default
/// tone by the time they reach here.
pub fn Alert(
    /// Severity tone.
    #[prop(default = AlertVariant::Default)]
    variant: AlertVariant,
    /// Caller class override, appended after the tone classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Unrecognized attributes forwarded to the alert surface.
    #[prop(optional)]
    attrs: AttrBag,
    /// Alert body, typically [`AlertTitle`] and [`AlertDescription`].
    children: Children,
) -> impl IntoView {
    let composer = StyleComposer::from_context();
    let tone = composer.tokens().alert_class(variant).to_string();
    let surface_class = compose_class(&["ui-alert"], &[tone.as_str()], class.as_deref());

    view! {
        <AlertSurface class=surface_class attrs=attrs.into_attributes()>
            {children()}
        </AlertSurface>
    }
}

#[component]
/// Stable alert title wrapper.
pub fn AlertTitle(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let title_class = compose_class(&["ui-alert-title"], &[], class.as_deref());

    view! { <AlertTitleSurface class=title_class>{children()}</AlertTitleSurface> }
}

#[component]
/// Stable alert description wrapper. Picks up the theme's muted description
/// descriptor on top of the structural class.
pub fn AlertDescription(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let composer = StyleComposer::from_context();
    let muted = composer.tokens().alert.description.clone();
    let description_class =
        compose_class(&["ui-alert-description"], &[muted.as_str()], class.as_deref());

    view! {
        <AlertDescriptionSurface class=description_class>{children()}</AlertDescriptionSurface>
    }
}
