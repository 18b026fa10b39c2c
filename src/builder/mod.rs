//! Builder module for Warodai to EDICT conversion
//!
//! This module contains the record-to-entry transformer and the pieces around
//! it: loading the source records and writing the EDICT file.

pub mod alignment;
pub mod edict_builder;
pub mod edict_entry;
pub mod line_normalizer;
pub mod record_transformer;
pub mod warodai_source_loader;
pub mod word_processor;

// Re-export commonly used types for convenience
pub use edict_builder::{ConverterConfig, ConversionStats, EdictBuilder, DEFAULT_SOURCE_URL};
pub use edict_entry::{DefinitionTail, EdictEntry};
pub use record_transformer::{HeaderParts, RecordTransformer};
pub use warodai_source_loader::{WarodaiRecord, WarodaiSourceLoader};
pub use word_processor::{AffixLabels, AffixMarker};
