//! polyrun - transitive executability of programs across languages
//!
//! A program written in language L can run if, through a chain of
//! interpreters and translators, L reaches the designated local language.
//! The [`engine::Engine`] maintains that reachability incrementally as
//! definitions arrive; nothing is actually executed or translated.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod error;
pub mod graph;
pub mod pending;
pub mod registry;

pub use engine::{Engine, LOCAL_LANGUAGE};
pub use error::{PolyrunError, Result};
