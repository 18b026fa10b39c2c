//! # warodai-edict - Warodai to EDICT Dictionary Converter
//!
//! This crate converts the Warodai Japanese-Russian dictionary export from its
//! multi-line record format into the single-line EDICT format read by Japanese
//! lookup tools.
//!
//! ## Features
//!
//! - **Record transformation**: kana/kanji alignment over nested alternatives,
//!   affix markers and inline-markup cleanup
//! - **Source loading**: UTF-16LE (or any `encoding_rs` label) decoding and record splitting
//! - **EDICT writing**: dated banner line and one line per headword/reading pair
//! - **Source fetching**: download (feature `download`) and zip extraction
//!
//! ## Quick Start
//!
//! ```
//! use warodai_edict::builder::RecordTransformer;
//!
//! # fn main() -> warodai_edict::Result<()> {
//! let transformer = RecordTransformer::default();
//! let entries = transformer.transform("ねこ【猫】(нэко)\n1. кошка.\n2. <i>уст.</i> гейша.")?;
//! assert_eq!(entries[0].to_string(), "猫 [ねこ] /(нэко){1} кошка/{2} (уст.) гейша/");
//! # Ok(())
//! # }
//! ```
//!
//! ### Converting a whole file
//!
//! ```no_run
//! use warodai_edict::builder::{ConverterConfig, EdictBuilder};
//!
//! # fn main() -> warodai_edict::Result<()> {
//! let config = ConverterConfig::default();
//! let stats = EdictBuilder::build_with_config(&config, chrono::Local::now().date_naive(), None)?;
//! println!("{} entries written", stats.entries);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `download` (default): fetch the source archive over HTTP with `reqwest`
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are represented by
//! [`ConvertError`]. The crate uses the `snafu` library for error handling with
//! context and backtraces. Every error aborts the conversion.

pub mod builder;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use builder::{ConverterConfig, EdictBuilder, EdictEntry, RecordTransformer};

// Re-export error types for convenience
pub use error::{ConvertError, Result, snafu};
