//! Runtime execution for Aheui programs

mod cursor;
pub mod io;
mod machine;
mod storage;

pub use cursor::Cursor;
pub use machine::Machine;
pub use storage::{Storage, StorageBank, StorageId, StorageKind, STACK_COUNT, STORAGE_COUNT};
