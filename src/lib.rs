#![deny(missing_docs)]

//! Rust bindings for the MilkCat Chinese word segmenter and part-of-speech
//! tagger.
//!
//! The engine is loaded at runtime from its C dynamic library. A [`Model`]
//! holds the loaded dictionaries and can be shared; each [`Analyzer`] built
//! from it owns one segmentation + tagging pipeline and hands out a lazy
//! [`Cursor`] per analyzed text.
//!
//! ## Quick Start
//! ```no_run
//! use milkcat_rs::{Analyzer, AnalyzerType, Model};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = Model::new(None)?;
//!     let mut analyzer = Analyzer::new(&model, AnalyzerType::Default)?;
//!     for item in analyzer.analyze("他来到了网易杭研大厦")? {
//!         println!("{}/{}", item.word, item.pos_tag);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Choosing Fields
//! [`Analyzer::analyze_with`] exposes any subset of word, tag and word type.
//! One field gives bare values, two or three give tuples in
//! `(word, pos_tag, word_type)` order, none gives [`Projection::Void`]
//! without running the engine.
//!
//! ```no_run
//! use milkcat_rs::{Fields, MilkCat};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut milkcat = MilkCat::new()?;
//!     let tags = milkcat.analyze("今天天气不错", Fields::none().with_pos_tag(true))?;
//!     println!("{tags:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//! - `MILKCAT_LIBRARY_PATH`: explicit dynamic library path.
//! - `MILKCAT_MODEL_PATH`: explicit model directory path.

mod config;
mod constants;
mod discovery;
mod error;
mod model;
mod native;
mod pipeline;
mod projection;
mod runtime;
mod types;

pub use constants::*;
pub use error::{MilkcatError, Result};
pub use model::Item;
pub use pipeline::{AnalyzerType, Pipeline, SegmenterType, TaggerType};
pub use projection::{Field, Fields, Projection, Row, Shape, Value};
pub use runtime::{pos_tag, seg, Analyzer, Cursor, MilkCat, MilkcatLibrary, Model, Projected};
pub use types::{MilkCatConfig, ModelConfig};

#[cfg(test)]
mod test_support;
