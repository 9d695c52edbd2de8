use leptos::ev::MouseEvent;
use leptos::*;
use widget_base::{Button, ButtonVariant};

use crate::compose::{compose_class, StyleComposer};
use crate::forward::AttrBag;
use crate::theme::IconButtonColor;

/// Attribute names the wrapper computes itself.
const COMPUTED_ATTRS: [&str; 1] = ["aria-label"];

#[component]
/// Stable icon-only button wrapper.
///
/// An accessible name is mandatory because the glyph child is hidden from
/// assistive technology. A color whose descriptor is empty (the inherit
/// default) renders through the base ghost variant so the glyph picks up the
/// surrounding text color.
pub fn IconButton(
    /// Accessible name for the button.
    #[prop(into)]
    aria_label: String,
    /// Glyph color.
    #[prop(default = IconButtonColor::Inherit)]
    color: IconButtonColor,
    /// Disabled state forwarded to the button.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Caller class override, appended after the color classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Unrecognized attributes forwarded to the button element.
    #[prop(optional)]
    attrs: AttrBag,
    /// Reference handle attached to the button element.
    #[prop(optional)]
    node_ref: NodeRef<html::Button>,
    /// Click callback.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Glyph content, hidden from assistive technology.
    children: Children,
) -> impl IntoView {
    let composer = StyleComposer::from_context();
    let color_class = composer.tokens().icon_button_class(color).to_string();
    let variant = if color_class.is_empty() {
        ButtonVariant::Ghost
    } else {
        ButtonVariant::Standard
    };
    let button_class =
        compose_class(&["ui-icon-button"], &[color_class.as_str()], class.as_deref());

    let attributes = attrs
        .without(&COMPUTED_ATTRS)
        .merge_computed(AttrBag::new().with("aria-label", aria_label))
        .into_attributes();

    view! {
        <Button
            variant=variant
            class=button_class
            disabled=disabled
            attrs=attributes
            node_ref=node_ref
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            <span class="ui-icon-button-glyph" aria-hidden="true">
                {children()}
            </span>
        </Button>
    }
}
