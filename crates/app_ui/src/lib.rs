//! Stable UI facade over the base widget library.
//!
//! Application crates import everything UI-shaped from here and never from
//! `widget_base` directly. The crate owns three seams and six wrappers:
//!
//! - [`compose`]: deterministic class composition over the active
//!   [`theme::ThemeTokens`] preset, with caller overrides appended last.
//! - [`identity`]: explicit-wins control id resolution, deriving a slug from
//!   the label when the caller supplies none.
//! - [`forward`]: the [`forward::AttrBag`] pass-through channel and the
//!   layer-computed-wins merge every wrapper applies before spreading
//!   attributes onto the underlying element.
//!
//! The wrappers ([`TextField`], [`Select`], [`Modal`], [`Table`], [`Alert`],
//! [`IconButton`]) keep their prop contract fixed while the base library
//! underneath stays swappable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod compose;
mod components;
pub mod forward;
pub mod identity;
pub mod theme;

pub use components::{
    Alert, AlertDescription, AlertTitle, IconButton, Modal, Select, SelectItem, Table, TableBody,
    TableCaption, TableCell, TableFooter, TableHead, TableHeader, TableRow, TextField,
};

/// Everything an application crate typically needs in one import.
pub mod prelude {
    pub use crate::compose::StyleComposer;
    pub use crate::forward::AttrBag;
    pub use crate::theme::{
        AlertVariant, FieldMargin, FieldVariant, IconButtonColor, ThemeError, ThemeTokens,
    };
    pub use crate::{
        Alert, AlertDescription, AlertTitle, IconButton, Modal, Select, SelectItem, Table,
        TableBody, TableCaption, TableCell, TableFooter, TableHead, TableHeader, TableRow,
        TextField,
    };
}
