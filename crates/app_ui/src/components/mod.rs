//! The six stable wrapper components of the facade.
//!
//! Each wrapper maps its documented external contract onto the prop surface
//! the base widget library actually requires, composing the style composer,
//! the identity resolver, and the pass-through forwarder. Application code
//! consumes these and never imports `widget_base` directly.

mod alert;
mod icon_button;
mod modal;
mod select;
mod table;
mod text_field;

pub use alert::{Alert, AlertDescription, AlertTitle};
pub use icon_button::IconButton;
pub use modal::Modal;
pub use select::{Select, SelectItem};
pub use table::{
    Table, TableBody, TableCaption, TableCell, TableFooter, TableHead, TableHeader, TableRow,
};
pub use text_field::TextField;
