//! Domain types for polyrun: programs and the tools that make them runnable.

pub mod program;
pub mod tool;

pub use program::Program;
pub use tool::Tool;
