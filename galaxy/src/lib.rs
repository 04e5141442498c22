//! # Galaxy Engine
//!
//! **A merchant's guide to alien numerals**
//!
//! Galaxy learns what alien symbols and metals are worth from plain
//! statements, then answers questions about them.
//!
//! ## Quick Start
//!
//! ```rust
//! use galaxy::{Engine, GalaxyResult};
//!
//! fn main() -> GalaxyResult<()> {
//!     let mut engine = Engine::new();
//!
//!     let answers = engine.process(&[
//!         "glob is I",
//!         "prok is V",
//!         "glob prok Silver is 68 Credits",
//!         "how much is prok glob glob ?",
//!         "how many Credits is glob prok Silver ?",
//!     ])?;
//!
//!     assert_eq!(answers, ["prok glob glob is 7", "glob prok Silver is 68 Credits"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Definitions
//! `<symbol> is <digit>` assigns a single roman digit to an alien symbol.
//!
//! ### Declarations
//! `<symbols> <metal> is <amount> Credits` prices a metal. The symbols are
//! read as a roman numeral, and the metal's unit value is the amount divided
//! by that numeral's value.
//!
//! ### Questions
//! Every other line is a question. Questions that cannot be answered get the
//! fixed reply "I have no idea what you are talking about"; they never fail
//! the batch.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod numeral;
pub mod question;
pub mod resource_limits;
pub mod response;
pub mod tokenizer;
pub mod translator;

pub use classifier::{Classified, Classifier, Line, Statement};
pub use config::{EngineConfig, DEFAULT_METALS, FALLBACK_ANSWER};
pub use engine::Engine;
pub use error::GalaxyError;
pub use lexicon::Lexicon;
pub use numeral::{decode, encode};
pub use question::{Question, Template};
pub use resource_limits::ResourceLimits;
pub use response::{Answer, Response};
pub use tokenizer::{tokenize, Span, Token};
pub use translator::{translate, SymbolTable};

/// Result type for galaxy operations
pub type GalaxyResult<T> = Result<T, GalaxyError>;

#[cfg(test)]
mod tests;
