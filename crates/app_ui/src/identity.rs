//! Deterministic label/control association identifiers.

const CONTROL_SUFFIX: &str = "-input";

/// Resolves the association id linking a label to its control.
///
/// A caller-supplied id always wins unchanged. Otherwise the label text is
/// slugged: lowercased, whitespace runs collapsed to single hyphens, with the
/// `-input` suffix namespacing it apart from the label's own identity. With
/// neither input (or a whitespace-only label) the control renders without an
/// explicit association, a degraded-accessibility mode rather than an error.
pub fn resolve_control_id(explicit: Option<String>, label: Option<&str>) -> Option<String> {
    if let Some(explicit) = explicit {
        return Some(explicit);
    }
    let slug = label?
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        return None;
    }
    Some(format!("{slug}{CONTROL_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn explicit_id_wins_regardless_of_label() {
        assert_eq!(
            resolve_control_id(Some("billing-email".to_string()), Some("Email")),
            Some("billing-email".to_string())
        );
        assert_eq!(
            resolve_control_id(Some("billing-email".to_string()), None),
            Some("billing-email".to_string())
        );
    }

    #[test]
    fn label_slug_is_deterministic() {
        assert_eq!(
            resolve_control_id(None, Some("Email")),
            Some("email-input".to_string())
        );
        assert_eq!(
            resolve_control_id(None, Some("Email")),
            resolve_control_id(None, Some("Email"))
        );
    }

    #[test]
    fn whitespace_runs_collapse_to_single_hyphens() {
        assert_eq!(
            resolve_control_id(None, Some("  Contact \t Email  ")),
            Some("contact-email-input".to_string())
        );
        assert_eq!(
            resolve_control_id(None, Some("Contact Email")),
            resolve_control_id(None, Some("Contact   Email")),
        );
    }

    #[test]
    fn absent_or_blank_label_yields_no_association() {
        assert_eq!(resolve_control_id(None, None), None);
        assert_eq!(resolve_control_id(None, Some("   ")), None);
    }
}
