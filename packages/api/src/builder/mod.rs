//! Translator builder API modules
//!
//! Fluent configuration of a [`PathTranslator`] and the translator itself.

pub mod fluent;
pub mod translator;

pub use self::fluent::*;
pub use self::translator::*;
