//! Interactive chat module
//!
//! Provides a line-editor based interactive interface to the council.

mod repl;

pub use repl::ChatRepl;
