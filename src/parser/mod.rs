//! Codespace construction for Aheui
//!
//! Turns source text into the immutable two-dimensional instruction grid.

mod builder;
mod codespace;

pub use builder::{CodespaceBuilder, CodespaceOptions, ColumnAddressing};
pub use codespace::Codespace;
