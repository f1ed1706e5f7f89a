// file: src/ui/mod.rs
// description: terminal surface module exports
// reference: internal module structure

pub mod render;
pub mod repl;
pub mod spinner;

pub use render::Operation;
pub use repl::{Repl, ReplCommand, Step, parse_command};
pub use spinner::Spinner;
