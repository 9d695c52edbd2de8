//! Pass-through attribute forwarding.
//!
//! Unrecognized caller attributes travel through the wrappers as an explicit
//! ordered record instead of an opaque spread, so the precedence rule is
//! enforceable: pass-through entries land on the interactive element first,
//! layer-computed accessibility attributes land after them and replace any
//! same-name pass-through value.

use std::rc::Rc;

use leptos::Attribute;

/// Ordered record of caller-supplied pass-through attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrBag {
    entries: Vec<(&'static str, String)>,
}

impl AttrBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AttrBag::set`].
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an attribute, replacing an existing entry of the same name in
    /// place so insertion order stays stable.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value.into(),
            None => self.entries.push((name, value.into())),
        }
    }

    /// Returns the current value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of attributes in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry whose name appears in `names`. Wrappers call this
    /// for attribute names they compute reactively, so a stale caller value
    /// can never shadow the layer's own.
    pub fn without(mut self, names: &[&str]) -> Self {
        self.entries
            .retain(|(existing, _)| !names.contains(existing));
        self
    }

    /// Appends layer-computed attributes after the pass-through entries,
    /// dropping any same-name pass-through value first. Computed attributes
    /// therefore always win, per the documented precedence.
    pub fn merge_computed(mut self, computed: AttrBag) -> AttrBag {
        for (name, value) in computed.entries {
            self.entries.retain(|(existing, _)| *existing != name);
            self.entries.push((name, value));
        }
        self
    }

    /// Iterates over `(name, value)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Converts the bag into the attribute vector applied to the single
    /// interactive element of a wrapper.
    pub fn into_attributes(self) -> Vec<(&'static str, Attribute)> {
        self.entries
            .into_iter()
            .map(|(name, value)| (name, Attribute::String(value.into())))
            .collect()
    }
}

/// Builds a reactive attribute that renders `value` while `active` returns
/// true and is absent otherwise. Used for computed accessibility attributes
/// such as `aria-invalid` that must track a signal.
pub(crate) fn toggle_attr(
    active: impl Fn() -> bool + 'static,
    value: &'static str,
) -> Attribute {
    Attribute::Fn(Rc::new(move || {
        if active() {
            Attribute::String(value.into())
        } else {
            Attribute::Option(None)
        }
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(bag: &AttrBag) -> Vec<&'static str> {
        bag.iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn set_replaces_in_place_and_keeps_order() {
        let mut bag = AttrBag::new()
            .with("data-testid", "email")
            .with("autocomplete", "email");
        bag.set("data-testid", "email-field");
        assert_eq!(names(&bag), vec!["data-testid", "autocomplete"]);
        assert_eq!(bag.get("data-testid"), Some("email-field"));
    }

    #[test]
    fn computed_attributes_win_over_pass_through() {
        let pass_through = AttrBag::new()
            .with("aria-label", "stale label")
            .with("data-testid", "save");
        let merged = pass_through.merge_computed(AttrBag::new().with("aria-label", "Save record"));
        assert_eq!(merged.get("aria-label"), Some("Save record"));
        assert_eq!(merged.get("data-testid"), Some("save"));
        // Computed entries land after the surviving pass-through entries.
        assert_eq!(names(&merged), vec!["data-testid", "aria-label"]);
    }

    #[test]
    fn merge_is_deterministic() {
        let build = || {
            AttrBag::new()
                .with("a", "1")
                .with("b", "2")
                .merge_computed(AttrBag::new().with("c", "3").with("a", "4"))
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn without_strips_reserved_names_only() {
        let bag = AttrBag::new()
            .with("aria-invalid", "false")
            .with("data-testid", "field")
            .without(&["aria-invalid", "aria-required"]);
        assert_eq!(names(&bag), vec!["data-testid"]);
    }

    #[test]
    fn empty_bag_produces_no_attributes() {
        let bag = AttrBag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
        assert!(bag.into_attributes().is_empty());
    }
}
