//! Rendering: rule tables and the generator that applies them.
//!
//! A format is a [`RuleTable`] holding one [`TagRule`] per node kind. The
//! [`Generator`] walks a tree and applies the rule of each node it visits.
//! Built-in tables are registered in the [`FormatRegistry`].

mod generator;
pub mod html;
pub mod markdown;
mod registry;
mod rules;
pub mod text;

pub use generator::{render, Generator};
pub use registry::FormatRegistry;
pub use rules::{CountHook, FileHook, LinkHook, RuleTable, TagRule, TextHook};
