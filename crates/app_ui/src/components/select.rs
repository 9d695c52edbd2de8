use leptos::*;
use widget_base::{
    Select as SelectRoot, SelectContent, SelectGroup, SelectTrigger, SelectValue,
};

use crate::compose::{compose_class, StyleComposer};
use crate::forward::AttrBag;
use crate::identity::resolve_control_id;

pub use widget_base::SelectItem;

/// Attribute names the wrapper computes on the trigger itself.
const COMPUTED_ATTRS: [&str; 2] = ["id", "aria-label"];

#[component]
/// Stable select wrapper.
///
/// Children are the option entries ([`SelectItem`]), grouped under a single
/// listbox group. The open/closed popup state stays internal to the base
/// family; callers only see value changes.
pub fn Select(
    /// Accessible name for the trigger. Also the slug source when no `id`
    /// is supplied.
    #[prop(optional, into)]
    label: Option<String>,
    /// Explicit trigger id; wins over the derived slug.
    #[prop(optional, into)]
    id: Option<String>,
    /// Placeholder shown while no value is selected.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Controlled selected value.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Disabled state forwarded to the trigger.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Caller class override on the select root.
    #[prop(optional, into)]
    class: Option<String>,
    /// Unrecognized attributes forwarded to the trigger button.
    #[prop(optional)]
    attrs: AttrBag,
    /// Reference handle attached to the trigger button.
    #[prop(optional)]
    node_ref: NodeRef<html::Button>,
    /// Called with the newly selected value.
    #[prop(optional)]
    on_value_change: Option<Callback<String>>,
    /// Option entries.
    children: Children,
) -> impl IntoView {
    let composer = StyleComposer::from_context();
    let resolved_id = resolve_control_id(id, label.as_deref());

    let root_class = compose_class(&["ui-select"], &[], class.as_deref());
    let trigger_class = compose_class(
        &["ui-select-trigger"],
        &[composer.tokens().field.outlined.as_str()],
        None,
    );

    let mut computed = AttrBag::new();
    if let Some(resolved_id) = resolved_id {
        computed.set("id", resolved_id);
    }
    if let Some(label) = label {
        computed.set("aria-label", label);
    }
    let attributes = attrs
        .without(&COMPUTED_ATTRS)
        .merge_computed(computed)
        .into_attributes();

    let forward_change = Callback::new(move |value: String| {
        if let Some(on_value_change) = on_value_change.as_ref() {
            on_value_change.call(value);
        }
    });

    view! {
        <SelectRoot
            value=value
            on_value_change=forward_change
            disabled=disabled
            class=root_class
        >
            <SelectTrigger class=trigger_class attrs=attributes node_ref=node_ref>
                <SelectValue placeholder=placeholder.unwrap_or_default()/>
            </SelectTrigger>
            <SelectContent class="ui-select-content">
                <SelectGroup>{children()}</SelectGroup>
            </SelectContent>
        </SelectRoot>
    }
}
