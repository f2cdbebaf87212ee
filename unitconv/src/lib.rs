//! Unitconv - interactive read-convert-repeat shell
//!
//! The shell owns prompting, parsing user text into a `Number`, and
//! rendering results and history. All conversion logic lives in
//! `unitconv-units`.

pub mod cli;
pub mod shell;

pub use cli::Cli;
pub use shell::{Shell, ShellOptions};
