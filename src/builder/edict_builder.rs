//! EDICT builder: drives a whole Warodai to EDICT conversion.
//!
//! The builder writes a dated banner line followed by the entries of every
//! record, in source order. The creation date is passed in by the caller so the
//! output of a run depends on its inputs only.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use warodai_edict::builder::{ConverterConfig, EdictBuilder, WarodaiSourceLoader};
//!
//! # fn main() -> warodai_edict::Result<()> {
//! let records = WarodaiSourceLoader::split_records("preamble\n\nねこ【猫】(нэко)\n1. кошка.\n");
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let builder = EdictBuilder::new(&ConverterConfig::default(), date);
//!
//! let mut output = Vec::new();
//! let stats = builder.build(&mut output, &records, None)?;
//! assert_eq!(stats.entries, 1);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "　？？？ /EDICT, WARODAI Japanese-Russian Electronic Dictionary/Created: 2024.03.01/\n\
//!      猫 [ねこ] /(нэко){1} кошка/\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## JSON Configuration
//!
//! ```no_run
//! use warodai_edict::builder::{ConverterConfig, EdictBuilder};
//!
//! # fn main() -> warodai_edict::Result<()> {
//! let config = ConverterConfig::from_json_file("warodai2edict.json")?;
//! EdictBuilder::build_with_config(&config, chrono::Local::now().date_naive(), None)?;
//! # Ok(())
//! # }
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::*;
use serde::{Deserialize, Serialize};

use crate::builder::record_transformer::RecordTransformer;
use crate::builder::warodai_source_loader::{WarodaiRecord, WarodaiSourceLoader};
use crate::builder::word_processor::AffixLabels;
use crate::utils::progress_report::{ProgressReportFn, ProgressState};
use crate::{ConvertError, Result};

/// Where the Warodai project publishes its text export.
pub const DEFAULT_SOURCE_URL: &str = "https://www.warodai.ru/download/warodai_txt.zip";

/// Configuration for a conversion run.
///
/// Missing fields take their default values when loading from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Download location of the zipped source
    pub source_url: String,
    /// Directory the archive is downloaded to and extracted in
    pub work_dir: String,
    /// Name of the extracted source file, relative to `work_dir`
    pub input_file: String,
    /// Path of the EDICT file to write
    pub output_file: String,
    /// Encoding label of the source file
    pub input_encoding: String,
    /// Dictionary name shown in the banner line
    pub dictionary_title: String,
    /// Text inserted into definitions of affixes
    pub affix_labels: AffixLabels,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            work_dir: ".".to_string(),
            input_file: "warodai.txt".to_string(),
            output_file: "output.txt".to_string(),
            input_encoding: "utf-16le".to_string(),
            dictionary_title: "EDICT, WARODAI Japanese-Russian Electronic Dictionary".to_string(),
            affix_labels: AffixLabels::default(),
        }
    }
}

impl ConverterConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json_content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json_content)?)
    }

    pub fn input_path(&self) -> PathBuf {
        Path::new(&self.work_dir).join(&self.input_file)
    }
}

/// Counters of a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records read from the source
    pub records: usize,
    /// EDICT lines written, the banner not included
    pub entries: usize,
}

/// Converts Warodai records and writes them as EDICT.
#[derive(Debug, Clone)]
pub struct EdictBuilder {
    pub config: ConverterConfig,
    /// Date stamped into the banner line
    pub creation_date: NaiveDate,
    transformer: RecordTransformer,
}

impl EdictBuilder {
    pub fn new(config: &ConverterConfig, creation_date: NaiveDate) -> Self {
        Self {
            config: config.clone(),
            creation_date,
            transformer: RecordTransformer::new(config.affix_labels.clone()),
        }
    }

    /// The first output line, without the newline.
    pub fn banner_line(&self) -> String {
        format!(
            "　？？？ /{}/Created: {}/",
            self.config.dictionary_title,
            self.creation_date.format("%Y.%m.%d")
        )
    }

    /// Writes the banner and the entries of all `records` to `writer`.
    ///
    /// Stops at the first record that fails to convert. Lines of earlier
    /// records have been written by then.
    pub fn build<W: Write>(&self, writer: &mut W, records: &[WarodaiRecord], prog_rpt: Option<ProgressReportFn>) -> Result<ConversionStats> {
        let mut progress_state = ProgressState::new("EdictBuilder::build", records.len() as u64, 10, prog_rpt);
        let mut stats = ConversionStats::default();

        writeln!(writer, "{}", self.banner_line())?;
        for (i, record) in records.iter().enumerate() {
            let entries = self.transformer.transform(&record.text).inspect_err(|e| {
                error!("Conversion failed at source line {}: {}", record.line_no, e);
            })?;
            for entry in &entries {
                writeln!(writer, "{}", entry)?;
            }
            stats.records += 1;
            stats.entries += entries.len();

            if progress_state.report(i as u64) {
                info!("Conversion cancelled by user");
                return Err(ConvertError::user_interrupted());
            }
        }
        writer.flush()?;
        Ok(stats)
    }

    /// Reads the configured source file and writes the configured output file.
    pub fn build_with_config(config: &ConverterConfig, creation_date: NaiveDate, prog_rpt: Option<ProgressReportFn>) -> Result<ConversionStats> {
        let builder = EdictBuilder::new(config, creation_date);
        let input_path = config.input_path();

        info!("Loading source: {}...", input_path.display());
        let records = WarodaiSourceLoader::new(&input_path, &config.input_encoding)?;
        info!("Loaded {} records", records.len());

        info!("Converting, please wait...");
        let mut writer = BufWriter::new(File::create(&config.output_file)?);
        let stats = builder.build(&mut writer, &records, prog_rpt)?;
        info!("-> {} ({} entries)", config.output_file, stats.entries);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 5).unwrap()
    }

    fn build_to_string(config: &ConverterConfig, source: &str) -> Result<(ConversionStats, String)> {
        let records = WarodaiSourceLoader::split_records(source);
        let mut output = Vec::new();
        let stats = EdictBuilder::new(config, test_date()).build(&mut output, &records, None)?;
        Ok((stats, String::from_utf8(output).unwrap()))
    }

    #[test]
    fn test_banner_line() {
        let builder = EdictBuilder::new(&ConverterConfig::default(), test_date());
        assert_eq!(
            builder.banner_line(),
            "　？？？ /EDICT, WARODAI Japanese-Russian Electronic Dictionary/Created: 2023.11.05/"
        );
    }

    #[test]
    fn test_build_fans_out_records() -> Result<()> {
        let source = "preamble\n\nあ, い【亜】(а)\nкот.\n\nお…【御…】(о)\n";
        let (stats, output) = build_to_string(&ConverterConfig::default(), source)?;
        assert_eq!(stats, ConversionStats { records: 2, entries: 3 });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[1..],
            ["亜 [あ] /(а)кот/", "亜 [い] /(а)кот/", "御 [お] /(о)<префикс>"]
        );
        assert!(output.ends_with('\n'));
        Ok(())
    }

    #[test]
    fn test_build_uses_configured_labels() -> Result<()> {
        let mut config = ConverterConfig::default();
        config.affix_labels.suffix = "<suffix>".to_string();
        config.dictionary_title = "EDICT, test".to_string();
        let (_, output) = build_to_string(&config, "preamble\n\n…する【…為る】(гл.)\nделать")?;
        assert_eq!(output, "　？？？ /EDICT, test/Created: 2023.11.05/\n為る [する] /(гл.)<suffix>делать/\n");
        Ok(())
    }

    #[test]
    fn test_build_stops_at_first_bad_record() {
        let source = "preamble\n\nねこ【猫】(нэко)\nкошка\n\nあ, い, う【亜, 意】(а)\n\nいぬ【犬】(ину)\n";
        let records = WarodaiSourceLoader::split_records(source);
        let mut output = Vec::new();
        let result = EdictBuilder::new(&ConverterConfig::default(), test_date()).build(&mut output, &records, None);
        assert!(matches!(result, Err(ConvertError::NestingMismatch { .. })));

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("猫 [ねこ] /(нэко)кошка/"));
        assert!(!output.contains("犬"));
    }

    #[test]
    fn test_build_rejects_empty_block_between_records() {
        let source = "preamble\n\nねこ (нэко)\n\n\n\nいぬ (ину)\n";
        let records = WarodaiSourceLoader::split_records(source);
        let mut output = Vec::new();
        let result = EdictBuilder::new(&ConverterConfig::default(), test_date()).build(&mut output, &records, None);
        match result {
            Err(ConvertError::MalformedHeader { reason, line, .. }) => {
                assert_eq!(reason, "no kanakanji part");
                assert_eq!(line, "");
            }
            other => panic!("Expected MalformedHeader, got {:?}", other),
        }

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("ねこ /(нэко)"));
        assert!(!output.contains("いぬ"));
    }

    #[test]
    fn test_build_can_be_cancelled() {
        fn cancel(_state: &mut ProgressState) -> bool {
            true
        }
        let records = WarodaiSourceLoader::split_records("preamble\n\nねこ (нэко)\n");
        let result = EdictBuilder::new(&ConverterConfig::default(), test_date()).build(&mut Vec::<u8>::new(), &records, Some(cancel));
        assert!(matches!(result, Err(ConvertError::UserInterrupted { .. })));
    }

    #[test]
    fn test_config_from_partial_json() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"work_dir": "/data/warodai", "affix_labels": {"infix": "<infix>"}}"#)?;

        let config = ConverterConfig::from_json_file(&path)?;
        assert_eq!(config.work_dir, "/data/warodai");
        assert_eq!(config.input_path(), Path::new("/data/warodai/warodai.txt"));
        assert_eq!(config.affix_labels.infix, "<infix>");
        assert_eq!(config.affix_labels.prefix, "<префикс>");
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        Ok(())
    }

    #[test]
    fn test_config_rejects_malformed_json() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, "{ work_dir")?;
        assert!(matches!(ConverterConfig::from_json_file(&path), Err(ConvertError::ParserError { .. })));
        Ok(())
    }
}
