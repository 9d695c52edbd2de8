//! Base widget library backing the stable `app_ui` facade.
//!
//! The crate owns the concrete interactive primitives (input, label, button,
//! dialog, select, table, and alert families) addressed by stable import
//! paths, together with the `data-widget` DOM contract consumed by the CSS
//! layers. Application crates never import these directly; they consume the
//! `app_ui` wrappers, which keep the external prop contract stable while this
//! crate remains swappable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod alert;
mod button;
mod dialog;
mod fields;
mod select;
mod table;

pub use alert::{Alert, AlertDescription, AlertTitle};
pub use button::{Button, ButtonVariant};
pub use dialog::{
    Dialog, DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogTitle,
};
pub use fields::{Input, Label};
pub use select::{Select, SelectContent, SelectGroup, SelectItem, SelectTrigger, SelectValue};
pub use table::{
    Table, TableBody, TableCaption, TableCell, TableFooter, TableHead, TableHeader, TableRow,
};

pub(crate) fn merge_class(base: &'static str, class: Option<&str>) -> String {
    match class {
        Some(class) if !class.is_empty() => format!("{base} {class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
