//! Menu host infrastructure module

mod terminal;

pub use terminal::TerminalMenuHost;
