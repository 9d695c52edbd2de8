use leptos::ev::MouseEvent;
use leptos::*;

use crate::{bool_token, merge_class};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic button variants understood by the base [`Button`].
pub enum ButtonVariant {
    /// Standard action button.
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button.
    Quiet,
    /// Danger/destructive button.
    Danger,
    /// Unstyled button carrying no tone of its own.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl ButtonVariant {
    /// Returns the stable token rendered into the `data-widget-variant` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
            Self::Ghost => "ghost",
        }
    }
}

#[component]
/// Base button primitive with standardized variant and disabled tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_class("widget-button", class.as_deref())
            id=id
            disabled=move || disabled.get()
            data-widget="button"
            data-widget-variant=variant.token()
            data-widget-disabled=move || bool_token(disabled.get())
            {..attrs}
            node_ref=node_ref
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
