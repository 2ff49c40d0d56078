//! Clipboard snapshot domain module

mod representation;
mod slot;

pub use representation::{ClipboardSnapshot, Representation};
pub use slot::SnapshotSlot;
