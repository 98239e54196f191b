//! Text menu over the roster and the battle engine.
//!
//! `command` holds the pure parsing/dispatch helpers; `shell` does the line
//! reading and text rendering on top of them.

pub mod command;
pub mod shell;

pub use command::*;
pub use shell::{describe_event, Console};
