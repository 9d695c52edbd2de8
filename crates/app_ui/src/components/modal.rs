use leptos::*;
use widget_base::{
    Dialog, DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogTitle,
};

use crate::compose::compose_class;
use crate::forward::AttrBag;

/// True exactly when a transition from `was_open` to `next_open` is a close.
///
/// Re-asserting an already-closed dialog (`false -> false`) and opening
/// (`* -> true`) are not close events.
pub(crate) fn close_requested(was_open: bool, next_open: bool) -> bool {
    was_open && !next_open
}

#[component]
/// Stable modal dialog wrapper.
///
/// Visibility is fully caller-owned through `open`; the wrapper reports close
/// intent through `on_close` and never mutates the flag itself. `on_close`
/// fires only on an actual open-to-closed transition.
pub fn Modal(
    /// Controlled visibility flag.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Close-intent callback (Escape, overlay click).
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Heading text. Omitting both title and description omits the header.
    #[prop(optional, into)]
    title: Option<String>,
    /// Supporting copy under the title.
    #[prop(optional, into)]
    description: Option<String>,
    /// Footer slot, usually action buttons. Omitted when absent.
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    /// Caller class override on the dialog panel.
    #[prop(optional, into)]
    class: Option<String>,
    /// Unrecognized attributes forwarded to the dialog panel.
    #[prop(optional)]
    attrs: AttrBag,
    /// Reference handle attached to the dialog panel.
    #[prop(optional)]
    node_ref: NodeRef<html::Div>,
    /// Modal body.
    children: Children,
) -> impl IntoView {
    let content_class = compose_class(&["ui-modal"], &[], class.as_deref());
    let attributes = attrs.into_attributes();

    let handle_open_change = Callback::new(move |next_open: bool| {
        if close_requested(open.get_untracked(), next_open) {
            if let Some(on_close) = on_close.as_ref() {
                on_close.call(());
            }
        }
    });

    let has_header = title.is_some() || description.is_some();
    let header = has_header.then(|| {
        view! {
            <DialogHeader class="ui-modal-header">
                {title.map(|title| view! { <DialogTitle class="ui-modal-title">{title}</DialogTitle> })}
                {description
                    .map(|description| {
                        view! {
                            <DialogDescription class="ui-modal-description">
                                {description}
                            </DialogDescription>
                        }
                    })}
            </DialogHeader>
        }
    });

    let footer = actions.map(|actions| {
        view! { <DialogFooter class="ui-modal-footer">{actions.run()}</DialogFooter> }
    });

    view! {
        <Dialog open=open on_open_change=handle_open_change>
            <DialogContent class=content_class attrs=attributes node_ref=node_ref>
                {header}
                {children()}
                {footer}
            </DialogContent>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::close_requested;

    #[test]
    fn close_fires_only_on_open_to_closed_edge() {
        assert_eq!(close_requested(true, false), true);
        assert_eq!(close_requested(true, true), false);
        assert_eq!(close_requested(false, false), false);
        assert_eq!(close_requested(false, true), false);
    }
}
