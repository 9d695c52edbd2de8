//! Stable table surface.
//!
//! The base table family already matches the contract this layer promises,
//! so the wrapper is a straight re-export rather than a prop-mapping shim.
//! If the base library's table surface drifts, this module becomes the seam
//! where the mapping lives.

pub use widget_base::{
    Table, TableBody, TableCaption, TableCell, TableFooter, TableHead, TableHeader, TableRow,
};
