//! Immutable design-token configuration consumed by the style composer.
//!
//! The token tables are plain data constructed once at process start and
//! never mutated. Two independently evolved application palettes survive as
//! two named presets over one shared schema; see [`ThemeTokens::preset`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while resolving theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The requested preset id is not one of the named presets.
    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text-field rendering variants of the external contract.
pub enum FieldVariant {
    /// Bordered input, the default.
    Outlined,
    /// Solid-surface input.
    Filled,
    /// Underline-only input.
    Standard,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Outlined
    }
}

impl FieldVariant {
    /// Returns the stable token string for this variant.
    pub fn token(self) -> &'static str {
        match self {
            Self::Outlined => "outlined",
            Self::Filled => "filled",
            Self::Standard => "standard",
        }
    }

    /// Parses a token string, falling back to the default for unknown input.
    pub fn from_token(token: &str) -> Self {
        match token {
            "filled" => Self::Filled,
            "standard" => Self::Standard,
            _ => Self::Outlined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Vertical-margin steps of the text-field external contract.
pub enum FieldMargin {
    /// No extra margin.
    None,
    /// Compact margin.
    Dense,
    /// Default form margin.
    Normal,
}

impl Default for FieldMargin {
    fn default() -> Self {
        Self::None
    }
}

impl FieldMargin {
    /// Returns the stable token string for this margin step.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dense => "dense",
            Self::Normal => "normal",
        }
    }

    /// Parses a token string, falling back to the default for unknown input.
    pub fn from_token(token: &str) -> Self {
        match token {
            "dense" => Self::Dense,
            "normal" => Self::Normal,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Closed alert tone set of the external contract.
pub enum AlertVariant {
    /// Neutral informational alert, the fallback for unknown tones.
    Default,
    /// Destructive/error alert.
    Destructive,
    /// Success alert.
    Success,
    /// Warning alert.
    Warning,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl AlertVariant {
    /// Returns the stable token string for this tone.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    /// Parses a token string, falling back to [`AlertVariant::Default`] for
    /// unknown input.
    pub fn from_token(token: &str) -> Self {
        match token {
            "destructive" => Self::Destructive,
            "success" => Self::Success,
            "warning" => Self::Warning,
            _ => Self::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Closed icon-button color set of the external contract.
pub enum IconButtonColor {
    /// Inherit the surrounding tone; carries no descriptor of its own and
    /// renders the unstyled ghost variant.
    Inherit,
    /// Primary tone.
    Primary,
    /// Secondary tone.
    Secondary,
    /// Success tone.
    Success,
    /// Error tone.
    Error,
}

impl Default for IconButtonColor {
    fn default() -> Self {
        Self::Inherit
    }
}

impl IconButtonColor {
    /// Returns the stable token string for this color.
    pub fn token(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Parses a token string, falling back to [`IconButtonColor::Inherit`]
    /// for unknown input.
    pub fn from_token(token: &str) -> Self {
        match token {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Inherit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Class descriptors for the text-field family.
pub struct FieldTokens {
    /// Outlined variant class.
    pub outlined: String,
    /// Filled variant class.
    pub filled: String,
    /// Standard (underline) variant class.
    pub standard: String,
    /// Dense margin class.
    pub margin_dense: String,
    /// Normal margin class.
    pub margin_normal: String,
    /// Full-width modifier class.
    pub full_width: String,
    /// Invalid-state modifier class.
    pub invalid: String,
    /// Extra start padding injected when a start adornment is present.
    pub pad_start: String,
    /// Extra end padding injected when an end adornment is present.
    pub pad_end: String,
    /// Helper-text typographic class.
    pub helper: String,
    /// Helper-text class while the field is invalid.
    pub helper_invalid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Class descriptors for the alert family.
pub struct AlertTokens {
    /// Neutral tone class.
    pub default_tone: String,
    /// Destructive tone class.
    pub destructive: String,
    /// Success tone class.
    pub success: String,
    /// Warning tone class.
    pub warning: String,
    /// Fixed typographic class applied to the description sub-element.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Class descriptors for the icon-button color set. An empty descriptor means
/// "no tone": the wrapper renders the unstyled ghost variant instead.
pub struct IconButtonTokens {
    /// Inherit descriptor; empty by policy.
    pub inherit: String,
    /// Primary tone class.
    pub primary: String,
    /// Secondary tone class.
    pub secondary: String,
    /// Success tone class.
    pub success: String,
    /// Error tone class.
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Immutable design-token tables for one named preset.
pub struct ThemeTokens {
    /// Stable preset id (`portal` or `console`).
    pub preset_id: String,
    /// Text-field descriptors.
    pub field: FieldTokens,
    /// Alert descriptors.
    pub alert: AlertTokens,
    /// Icon-button descriptors.
    pub icon_button: IconButtonTokens,
}

impl ThemeTokens {
    /// Ids of the named presets, in lookup order.
    pub const PRESET_IDS: [&'static str; 2] = ["portal", "console"];

    /// Token tables of the member-facing portal application.
    pub fn portal() -> Self {
        Self {
            preset_id: "portal".to_string(),
            field: FieldTokens {
                outlined: "ui-field--outlined".to_string(),
                filled: "ui-field--filled".to_string(),
                standard: "ui-field--standard".to_string(),
                margin_dense: "ui-field--margin-dense".to_string(),
                margin_normal: "ui-field--margin-normal".to_string(),
                full_width: "ui-field--full".to_string(),
                invalid: "ui-field--invalid".to_string(),
                pad_start: "ui-field--pad-start".to_string(),
                pad_end: "ui-field--pad-end".to_string(),
                helper: "ui-field-helper".to_string(),
                helper_invalid: "ui-field-helper--invalid".to_string(),
            },
            alert: AlertTokens {
                default_tone: "ui-alert--default".to_string(),
                destructive: "ui-alert--destructive".to_string(),
                success: "ui-alert--success".to_string(),
                warning: "ui-alert--warning".to_string(),
                description: "ui-alert-copy".to_string(),
            },
            icon_button: IconButtonTokens {
                inherit: String::new(),
                primary: "ui-icon-button--primary".to_string(),
                secondary: "ui-icon-button--secondary".to_string(),
                success: "ui-icon-button--success".to_string(),
                error: "ui-icon-button--error".to_string(),
            },
        }
    }

    /// Token tables of the staff-facing console application. Same schema as
    /// [`ThemeTokens::portal`], independently evolved values.
    pub fn console() -> Self {
        Self {
            preset_id: "console".to_string(),
            field: FieldTokens {
                outlined: "console-field--outlined".to_string(),
                filled: "console-field--filled".to_string(),
                standard: "console-field--plain".to_string(),
                margin_dense: "console-field--tight".to_string(),
                margin_normal: "console-field--spaced".to_string(),
                full_width: "console-field--stretch".to_string(),
                invalid: "console-field--error".to_string(),
                pad_start: "console-field--inset-start".to_string(),
                pad_end: "console-field--inset-end".to_string(),
                helper: "console-field-hint".to_string(),
                helper_invalid: "console-field-hint--error".to_string(),
            },
            alert: AlertTokens {
                default_tone: "console-alert--neutral".to_string(),
                destructive: "console-alert--critical".to_string(),
                success: "console-alert--ok".to_string(),
                warning: "console-alert--caution".to_string(),
                description: "console-alert-body".to_string(),
            },
            icon_button: IconButtonTokens {
                inherit: String::new(),
                primary: "console-icon-button--accent".to_string(),
                secondary: "console-icon-button--muted".to_string(),
                success: "console-icon-button--ok".to_string(),
                error: "console-icon-button--critical".to_string(),
            },
        }
    }

    /// Resolves a named preset by id.
    pub fn preset(id: &str) -> Result<Self, ThemeError> {
        match id {
            "portal" => Ok(Self::portal()),
            "console" => Ok(Self::console()),
            other => Err(ThemeError::UnknownPreset(other.to_string())),
        }
    }

    /// Returns the class descriptor for a text-field variant. Total over the
    /// closed variant set.
    pub fn field_variant_class(&self, variant: FieldVariant) -> &str {
        match variant {
            FieldVariant::Outlined => &self.field.outlined,
            FieldVariant::Filled => &self.field.filled,
            FieldVariant::Standard => &self.field.standard,
        }
    }

    /// Returns the class descriptor for a margin step; `None` contributes no
    /// class at all.
    pub fn field_margin_class(&self, margin: FieldMargin) -> &str {
        match margin {
            FieldMargin::None => "",
            FieldMargin::Dense => &self.field.margin_dense,
            FieldMargin::Normal => &self.field.margin_normal,
        }
    }

    /// Returns the class descriptor for an alert tone. Total over the closed
    /// tone set.
    pub fn alert_class(&self, variant: AlertVariant) -> &str {
        match variant {
            AlertVariant::Default => &self.alert.default_tone,
            AlertVariant::Destructive => &self.alert.destructive,
            AlertVariant::Success => &self.alert.success,
            AlertVariant::Warning => &self.alert.warning,
        }
    }

    /// Returns the class descriptor for an icon-button color. An empty
    /// descriptor instructs the wrapper to render the ghost variant.
    pub fn icon_button_class(&self, color: IconButtonColor) -> &str {
        match color {
            IconButtonColor::Inherit => &self.icon_button.inherit,
            IconButtonColor::Primary => &self.icon_button.primary,
            IconButtonColor::Secondary => &self.icon_button.secondary,
            IconButtonColor::Success => &self.icon_button.success,
            IconButtonColor::Error => &self.icon_button.error,
        }
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::portal()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn named_presets_resolve_and_unknown_ids_error() {
        for id in ThemeTokens::PRESET_IDS {
            let tokens = ThemeTokens::preset(id).expect("named preset");
            assert_eq!(tokens.preset_id, id);
        }
        assert_eq!(
            ThemeTokens::preset("midnight"),
            Err(ThemeError::UnknownPreset("midnight".to_string()))
        );
    }

    #[test]
    fn alert_descriptors_are_total_and_non_empty() {
        let variants = [
            AlertVariant::Default,
            AlertVariant::Destructive,
            AlertVariant::Success,
            AlertVariant::Warning,
        ];
        for id in ThemeTokens::PRESET_IDS {
            let tokens = ThemeTokens::preset(id).expect("named preset");
            for variant in variants {
                assert!(
                    !tokens.alert_class(variant).is_empty(),
                    "{id}: {} must map to a descriptor",
                    variant.token()
                );
            }
        }
    }

    #[test]
    fn icon_button_inherit_is_the_only_empty_descriptor() {
        for id in ThemeTokens::PRESET_IDS {
            let tokens = ThemeTokens::preset(id).expect("named preset");
            assert_eq!(tokens.icon_button_class(IconButtonColor::Inherit), "");
            for color in [
                IconButtonColor::Primary,
                IconButtonColor::Secondary,
                IconButtonColor::Success,
                IconButtonColor::Error,
            ] {
                assert!(!tokens.icon_button_class(color).is_empty());
            }
        }
    }

    #[test]
    fn unknown_tokens_fall_back_to_defaults() {
        assert_eq!(AlertVariant::from_token("sparkly"), AlertVariant::Default);
        assert_eq!(AlertVariant::from_token("warning"), AlertVariant::Warning);
        assert_eq!(IconButtonColor::from_token("mauve"), IconButtonColor::Inherit);
        assert_eq!(IconButtonColor::from_token("error"), IconButtonColor::Error);
        assert_eq!(FieldVariant::from_token("bezeled"), FieldVariant::Outlined);
        assert_eq!(FieldMargin::from_token("roomy"), FieldMargin::None);
    }

    #[test]
    fn presets_share_a_schema_but_not_values() {
        let portal = ThemeTokens::portal();
        let console = ThemeTokens::console();
        assert_ne!(portal.field.outlined, console.field.outlined);
        assert_ne!(portal.alert.destructive, console.alert.destructive);
    }
}
