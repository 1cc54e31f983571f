//! # Aheui - a Hangul-encoded, two-dimensional stack language
//!
//! An interpreter for Aheui, where every precomposed Hangul syllable is one
//! instruction laid out on a grid, and a cursor walks the grid executing
//! them against a bank of integer storages.
//!
//! ## Quick Start
//!
//! ```rust
//! use aheui::{Machine, Value};
//!
//! # fn main() -> aheui::Result<()> {
//! // push 2, push 3, add, print as a number, terminate
//! let mut machine = Machine::from_source("반받다망희", &b""[..], Vec::new());
//! let exit: Value = machine.run()?;
//!
//! let (_, output) = machine.into_io();
//! assert_eq!(output, b"5");
//! assert_eq!(exit, 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! A syllable splits into three phonemes:
//!
//! - **Lead** (초성) picks the operation: `ㅂ` push, `ㅁ` pop and print,
//!   `ㄷ ㄸ ㅌ ㄴ ㄹ` add/multiply/subtract/divide/modulo, `ㅈ` compare,
//!   `ㅃ` duplicate, `ㅍ` swap, `ㅅ` select storage, `ㅆ` move a value,
//!   `ㅊ` branch on zero, `ㅎ` terminate, `ㅇ` nothing.
//! - **Vowel** (중성) steers the cursor before the operation runs:
//!   `ㅏ ㅓ ㅜ ㅗ` one cell, `ㅑ ㅕ ㅠ ㅛ` two cells, `ㅡ ㅣ ㅢ` bounce.
//! - **Tail** (종성) picks a storage, an I/O mode (`ㅇ` numeric, `ㅎ`
//!   character) or the immediate value for `ㅂ` (the jamo's stroke count).
//!
//! When an operation needs more values than the active storage holds,
//! nothing is consumed and the cursor reverses.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → CodespaceBuilder → Codespace → Machine (StorageBank + Cursor) → exit value
//! ```
//!
//! - [`decode`] - Splits a codepoint into a [`Cell`]
//! - [`CodespaceBuilder`] - Builds the immutable [`Codespace`] grid
//! - [`StorageBank`] - 26 stacks, a queue and a pipe
//! - [`Cursor`] - Position, velocity and toroidal wraparound
//! - [`Machine`] - The step loop

/// Version of the Aheui interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{decode, Cell, Heading, Lead, Syllable, Tail, Value, Vowel};
pub use parser::{Codespace, CodespaceBuilder, CodespaceOptions, ColumnAddressing};
pub use runtime::{Cursor, Machine, Storage, StorageBank, StorageId, StorageKind};
