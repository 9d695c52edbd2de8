//! Deterministic style composition.
//!
//! Class strings are assembled in one fixed cascade: component base classes,
//! then variant/state descriptors from the token tables, then the caller's
//! free-form override, which always lands last so later entries win on
//! conflicting utility keys without removing earlier ones.

use std::rc::Rc;

use leptos::{provide_context, use_context};

use crate::theme::ThemeTokens;

/// Joins class segments in cascade order: `base` < `variant` < `overrides`.
///
/// Empty segments are skipped; nothing is deduplicated or reordered, so the
/// output is byte-identical for identical inputs.
pub fn compose_class(base: &[&str], variant: &[&str], overrides: Option<&str>) -> String {
    let mut out = String::new();
    for class in base
        .iter()
        .chain(variant.iter())
        .copied()
        .chain(overrides)
        .map(str::trim)
    {
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Immutable handle over one preset's token tables, shared with every wrapper
/// through the reactive context.
///
/// Install it once near the application root with [`StyleComposer::provide`];
/// wrappers retrieve it with [`StyleComposer::from_context`], which falls back
/// to the default preset so style composition can never block rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleComposer {
    tokens: Rc<ThemeTokens>,
}

impl StyleComposer {
    /// Wraps an explicitly constructed token configuration.
    pub fn new(tokens: ThemeTokens) -> Self {
        Self {
            tokens: Rc::new(tokens),
        }
    }

    /// Installs this composer in the reactive context for descendant wrappers.
    pub fn provide(self) {
        provide_context(self);
    }

    /// Returns the composer from context, or the default-preset composer when
    /// none was provided.
    pub fn from_context() -> Self {
        use_context::<Self>().unwrap_or_default()
    }

    /// Returns the token tables backing this composer.
    pub fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }
}

impl Default for StyleComposer {
    fn default() -> Self {
        Self::new(ThemeTokens::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::AlertVariant;

    #[test]
    fn cascade_order_is_base_then_variant_then_override() {
        let composed = compose_class(
            &["ui-alert"],
            &["ui-alert--success"],
            Some("mt-2 ui-alert--compact"),
        );
        assert_eq!(composed, "ui-alert ui-alert--success mt-2 ui-alert--compact");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(compose_class(&["ui-field"], &["", "  "], None), "ui-field");
        assert_eq!(compose_class(&[], &[], None), "");
        assert_eq!(compose_class(&[], &[], Some("  ")), "");
    }

    #[test]
    fn output_is_byte_identical_across_calls() {
        let first = compose_class(&["a", "b"], &["c"], Some("d"));
        let second = compose_class(&["a", "b"], &["c"], Some("d"));
        assert_eq!(first, second);
    }

    #[test]
    fn caller_override_never_removes_earlier_classes() {
        let composed = compose_class(&["ui-field"], &["ui-field--outlined"], Some("ui-field"));
        assert!(composed.starts_with("ui-field ui-field--outlined"));
        assert!(composed.ends_with("ui-field"));
        assert_eq!(composed.split(' ').count(), 3);
    }

    #[test]
    fn composer_resolves_descriptors_from_its_tokens() {
        let composer = StyleComposer::default();
        let descriptor = composer.tokens().alert_class(AlertVariant::Warning);
        assert_eq!(descriptor, "ui-alert--warning");
    }
}
