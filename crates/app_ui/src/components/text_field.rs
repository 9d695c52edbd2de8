use leptos::ev::FocusEvent;
use leptos::*;
use widget_base::{Input, Label};

use crate::compose::{compose_class, StyleComposer};
use crate::forward::{toggle_attr, AttrBag};
use crate::identity::resolve_control_id;
use crate::theme::{FieldMargin, FieldVariant};

/// Attribute names this wrapper computes itself. Stale caller values for
/// these are dropped from the pass-through set so the computed ones win.
const COMPUTED_ATTRS: [&str; 4] = ["id", "aria-invalid", "aria-required", "aria-describedby"];

#[component]
/// Stable text input wrapper.
///
/// The label (when present) is associated with the input through the
/// identity resolver; helper text renders below the control and is announced
/// through `aria-describedby` when an association id exists. Absent optional
/// fields produce no markup at all, not empty placeholders.
pub fn TextField(
    /// Visible label text. Also the slug source when no `id` is supplied.
    #[prop(optional, into)]
    label: Option<String>,
    /// Explicit control id; wins over the derived slug.
    #[prop(optional, into)]
    id: Option<String>,
    /// Marks the field required and injects `aria-required`.
    #[prop(optional)]
    required: bool,
    /// Helper copy rendered below the control.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Invalid state; drives the invalid descriptor and `aria-invalid`.
    #[prop(optional, into)]
    error: MaybeSignal<bool>,
    /// Stretches the field across its container.
    #[prop(optional)]
    full_width: bool,
    /// Vertical margin step.
    #[prop(default = FieldMargin::None)]
    margin: FieldMargin,
    /// Rendering variant.
    #[prop(default = FieldVariant::Outlined)]
    variant: FieldVariant,
    /// Decorative slot rendered before the input.
    #[prop(optional, into)]
    start_adornment: Option<ViewFn>,
    /// Decorative slot rendered after the input.
    #[prop(optional, into)]
    end_adornment: Option<ViewFn>,
    /// Input placeholder text.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Controlled input value.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Disabled state forwarded to the input.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Caller class override, appended after base and state classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Unrecognized attributes forwarded to the input element.
    #[prop(optional)]
    attrs: AttrBag,
    /// Reference handle attached to the real input element.
    #[prop(optional)]
    node_ref: NodeRef<html::Input>,
    /// Input event callback.
    #[prop(optional)]
    on_input: Option<Callback<web_sys::Event>>,
    /// Blur event callback.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let composer = StyleComposer::from_context();
    let resolved_id = resolve_control_id(id, label.as_deref());
    let helper_id = helper_text
        .as_ref()
        .and(resolved_id.as_ref())
        .map(|resolved_id| format!("{resolved_id}-helper"));

    let root_class = {
        let width = if full_width {
            composer.tokens().field.full_width.clone()
        } else {
            String::new()
        };
        compose_class(&["ui-text-field"], &[width.as_str()], None)
    };

    let has_start = start_adornment.is_some();
    let has_end = end_adornment.is_some();
    let input_class = {
        let composer = composer.clone();
        Signal::derive(move || {
            let tokens = composer.tokens();
            let mut state_classes = vec![
                tokens.field_variant_class(variant),
                tokens.field_margin_class(margin),
            ];
            if full_width {
                state_classes.push(tokens.field.full_width.as_str());
            }
            if has_start {
                state_classes.push(tokens.field.pad_start.as_str());
            }
            if has_end {
                state_classes.push(tokens.field.pad_end.as_str());
            }
            if error.get() {
                state_classes.push(tokens.field.invalid.as_str());
            }
            compose_class(&["ui-field"], &state_classes, class.as_deref())
        })
    };

    let mut computed = AttrBag::new();
    if let Some(resolved_id) = resolved_id.clone() {
        computed.set("id", resolved_id);
    }
    if required {
        computed.set("aria-required", "true");
    }
    if let Some(helper_id) = helper_id.clone() {
        computed.set("aria-describedby", helper_id);
    }
    let mut attributes = attrs
        .without(&COMPUTED_ATTRS)
        .merge_computed(computed)
        .into_attributes();
    attributes.push(("aria-invalid", toggle_attr(move || error.get(), "true")));

    let label_view = label.map(|label| {
        let html_for = resolved_id.clone().unwrap_or_default();
        view! {
            <Label class="ui-field-label" html_for=html_for>
                {label}
                {required
                    .then(|| view! { <span class="ui-field-required" aria-hidden="true">"*"</span> })}
            </Label>
        }
    });

    let start_view = start_adornment.map(|adornment| {
        view! {
            <span class="ui-field-adornment ui-field-adornment--start" aria-hidden="true">
                {adornment.run()}
            </span>
        }
    });
    let end_view = end_adornment.map(|adornment| {
        view! {
            <span class="ui-field-adornment ui-field-adornment--end" aria-hidden="true">
                {adornment.run()}
            </span>
        }
    });

    let helper_view = helper_text.map(|helper_text| {
        let composer = composer.clone();
        let helper_class = Signal::derive(move || {
            let tokens = composer.tokens();
            let tone = if error.get() {
                tokens.field.helper_invalid.as_str()
            } else {
                tokens.field.helper.as_str()
            };
            compose_class(&[], &[tone], None)
        });
        view! {
            <p class=move || helper_class.get() id=helper_id>
                {helper_text}
            </p>
        }
    });

    view! {
        <div class=root_class>
            {label_view}
            <div class="ui-field-control">
                {start_view}
                <Input
                    class=input_class
                    placeholder=placeholder.unwrap_or_default()
                    value=value
                    disabled=disabled
                    attrs=attributes
                    node_ref=node_ref
                    on_input=Callback::new(move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    })
                    on_blur=Callback::new(move |ev| {
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.call(ev);
                        }
                    })
                />
                {end_view}
            </div>
            {helper_view}
        </div>
    }
}
