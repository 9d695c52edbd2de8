//! Showcase surface for the stable UI facade.
//!
//! Renders every wrapper family through `app_ui` so contract changes and
//! theme preset refinements can be reviewed on one production-shaped screen.
//! The showcase never imports the base widget library directly; that boundary
//! is the point.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use app_ui::prelude::*;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShowcaseState {
    email: String,
    region: String,
    email_invalid: bool,
    modal_open: bool,
    dismissed_alerts: u32,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            email: String::new(),
            region: "eu-west".to_string(),
            email_invalid: false,
            modal_open: false,
            dismissed_alerts: 0,
        }
    }
}

/// Builds the composer for the requested theme preset, falling back to the
/// default preset when the id is unknown.
fn composer_for(preset: &str) -> StyleComposer {
    match ThemeTokens::preset(preset) {
        Ok(tokens) => StyleComposer::new(tokens),
        Err(err) => {
            logging::warn!("showcase theme fallback: {err}");
            StyleComposer::default()
        }
    }
}

#[component]
/// Showcase screen contents.
pub fn ShowcaseApp(
    /// Theme preset id, usually from the host configuration.
    #[prop(optional, into)]
    theme: Option<String>,
    /// Host-restored state payload.
    #[prop(optional)]
    restored_state: Option<Value>,
) -> impl IntoView {
    composer_for(theme.as_deref().unwrap_or("portal")).provide();

    let state = create_rw_signal(ShowcaseState::default());
    if let Some(restored_state) = restored_state {
        match serde_json::from_value::<ShowcaseState>(restored_state) {
            Ok(restored) => state.set(restored),
            Err(err) => logging::warn!("showcase state restore failed: {err}"),
        }
    }

    let email_attrs = AttrBag::new()
        .with("autocomplete", "email")
        .with("data-testid", "email-field");
    let quota_attrs = AttrBag::new().with("data-testid", "quota-alert");

    let email_invalid = Signal::derive(move || state.get().email_invalid);
    let validate_email = move || {
        state.update(|value| {
            value.email_invalid = !value.email.is_empty() && !value.email.contains('@');
        });
    };

    view! {
        <main class="showcase">
            <section class="showcase-section">
                <h2>"Fields"</h2>
                <TextField
                    label="Email"
                    required=true
                    helper_text="Work address preferred."
                    error=email_invalid
                    full_width=true
                    variant=FieldVariant::Outlined
                    margin=FieldMargin::Normal
                    placeholder="you@example.com"
                    value=Signal::derive(move || state.get().email)
                    attrs=email_attrs
                    start_adornment=|| view! { <span>"@"</span> }
                    on_input=Callback::new(move |ev| {
                        state.update(|value| value.email = event_target_value(&ev));
                    })
                    on_blur=Callback::new(move |_| validate_email())
                />
                <TextField
                    label="Display name"
                    id="profile-name"
                    variant=FieldVariant::Filled
                    margin=FieldMargin::Dense
                    placeholder="Shown on shared dashboards"
                />
            </section>

            <section class="showcase-section">
                <h2>"Select"</h2>
                <Select
                    label="Region"
                    placeholder="Pick a region"
                    value=Signal::derive(move || state.get().region)
                    on_value_change=Callback::new(move |next: String| {
                        state.update(|value| value.region = next);
                    })
                >
                    <SelectItem value="eu-west">"Europe West"</SelectItem>
                    <SelectItem value="us-east">"US East"</SelectItem>
                    <SelectItem value="ap-south" disabled=true>
                        "Asia Pacific South (at capacity)"
                    </SelectItem>
                </Select>
            </section>

            <section class="showcase-section">
                <h2>"Alerts"</h2>
                <Alert variant=AlertVariant::Success>
                    <AlertTitle>"Profile saved"</AlertTitle>
                    <AlertDescription>"Changes propagate within a minute."</AlertDescription>
                </Alert>
                <Alert variant=AlertVariant::Destructive attrs=quota_attrs>
                    <AlertTitle>"Quota exceeded"</AlertTitle>
                    <AlertDescription>
                        "Uploads pause until usage drops below the plan limit."
                        <IconButton
                            aria_label="Dismiss quota alert"
                            color=IconButtonColor::Error
                            on_click=Callback::new(move |_| {
                                state.update(|value| value.dismissed_alerts += 1);
                            })
                        >
                            "x"
                        </IconButton>
                    </AlertDescription>
                </Alert>
                <p>{move || format!("Dismissed alerts: {}", state.get().dismissed_alerts)}</p>
            </section>

            <section class="showcase-section">
                <h2>"Table"</h2>
                <Table aria_label="Region latency">
                    <TableCaption>"Round-trip latency by region"</TableCaption>
                    <TableHeader>
                        <TableRow>
                            <TableHead>"Region"</TableHead>
                            <TableHead>"p50"</TableHead>
                            <TableHead>"p99"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <TableRow>
                            <TableCell>"Europe West"</TableCell>
                            <TableCell>"18 ms"</TableCell>
                            <TableCell>"41 ms"</TableCell>
                        </TableRow>
                        <TableRow>
                            <TableCell>"US East"</TableCell>
                            <TableCell>"26 ms"</TableCell>
                            <TableCell>"63 ms"</TableCell>
                        </TableRow>
                    </TableBody>
                    <TableFooter>
                        <TableRow>
                            <TableCell>"Fleet median"</TableCell>
                            <TableCell>"22 ms"</TableCell>
                            <TableCell>"52 ms"</TableCell>
                        </TableRow>
                    </TableFooter>
                </Table>
            </section>

            <section class="showcase-section">
                <h2>"Modal"</h2>
                <IconButton
                    aria_label="Open region details"
                    color=IconButtonColor::Primary
                    on_click=Callback::new(move |_| {
                        state.update(|value| value.modal_open = true);
                    })
                >
                    "i"
                </IconButton>
                <Modal
                    open=Signal::derive(move || state.get().modal_open)
                    title="Region details"
                    description="Capacity and failover posture for the selected region."
                    on_close=Callback::new(move |_| {
                        state.update(|value| value.modal_open = false);
                    })
                    actions=move || {
                        view! {
                            <IconButton
                                aria_label="Close region details"
                                on_click=Callback::new(move |_| {
                                    state.update(|value| value.modal_open = false);
                                })
                            >
                                "x"
                            </IconButton>
                        }
                    }
                >
                    <p>{move || format!("Selected region: {}", state.get().region)}</p>
                </Modal>
            </section>
        </main>
    }
}
