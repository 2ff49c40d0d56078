//! Menu domain module

mod action;

pub use action::{MenuAction, MENU_ORDER};
