use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use log::debug;

use crate::{ConvertError, Result};

/// One record of the Warodai source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarodaiRecord {
    /// Header line followed by the definition lines, separated by `\n`
    pub text: String,
    /// Line number of the header line in the source file (1-based)
    pub line_no: u64,
}

impl WarodaiRecord {
    pub fn header(&self) -> &str {
        self.text.split('\n').next().unwrap_or_default()
    }
}

pub struct WarodaiSourceLoader;

/// Gets an encoding object by its label string ("utf-16" is taken as little endian).
pub fn get_encoding_object_by_label(label: &str) -> Result<&'static Encoding> {
    let encoding = label.to_lowercase();
    let label = match encoding.as_str() {
        "utf-16" => "utf-16le",
        _ => encoding.as_str(),
    };
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ConvertError::invalid_parameter(format!("Invalid encoding: {}", encoding)))
}

impl WarodaiSourceLoader {
    /// Reads and decodes the source file, then splits it into records.
    ///
    /// # Arguments
    ///
    /// * `source_file` - Path of the extracted Warodai text file
    /// * `encoding_label` - WHATWG label of its encoding, `"utf-16"` meaning little endian
    ///
    /// # Returns
    ///
    /// The records in source order, without the preamble block.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for an unknown label, `Io` when the file cannot be
    /// read and `Decode` when it holds byte sequences invalid in that encoding.
    pub fn new<P: AsRef<Path>>(source_file: P, encoding_label: &str) -> Result<Vec<WarodaiRecord>> {
        let encoding = get_encoding_object_by_label(encoding_label)?;
        let data = fs::read(source_file.as_ref())?;
        debug!("Read {} bytes from {}", data.len(), source_file.as_ref().display());

        // decode() sniffs and drops a BOM, which Warodai files start with
        let (text, _, had_errors) = encoding.decode(&data);
        if had_errors {
            return Err(ConvertError::decode_failed(
                encoding.name(),
                source_file.as_ref().display().to_string(),
            ));
        }
        Ok(Self::split_records(&text))
    }

    /// Splits decoded source text into records.
    ///
    /// Records are separated by a blank line. The first block is the source's
    /// own preamble and is not returned. Empty blocks at the end of the text
    /// are dropped; an empty block between two records is kept, so converting
    /// it fails on its header.
    pub fn split_records(text: &str) -> Vec<WarodaiRecord> {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text).replace("\r\n", "\n");
        let mut records = Vec::new();
        let mut line_no = 1u64;
        for (n, block) in text.split("\n\n").enumerate() {
            let block_line_no = line_no;
            line_no += block.matches('\n').count() as u64 + 2;
            if n == 0 {
                continue;
            }
            records.push(WarodaiRecord {
                text: block.trim_end_matches('\n').to_string(),
                line_no: block_line_no,
            });
        }
        while records.last().is_some_and(|record| record.text.is_empty()) {
            records.pop();
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "Warodai preamble\nversion line\n\nねこ【猫】(нэко)\n1. кошка.\n2. гейша.\n\nいぬ【犬】(ину)\nсобака.\n";

    #[test]
    fn test_split_records_skips_preamble() {
        let records = WarodaiSourceLoader::split_records(SOURCE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "ねこ【猫】(нэко)");
        assert_eq!(records[0].text, "ねこ【猫】(нэко)\n1. кошка.\n2. гейша.");
        assert_eq!(records[0].line_no, 4);
        assert_eq!(records[1].text, "いぬ【犬】(ину)\nсобака.");
        assert_eq!(records[1].line_no, 8);
    }

    #[test]
    fn test_split_records_normalizes_line_breaks() {
        let crlf = SOURCE.replace('\n', "\r\n");
        let records = WarodaiSourceLoader::split_records(&format!("\u{FEFF}{}\r\n", crlf));
        assert_eq!(records, WarodaiSourceLoader::split_records(SOURCE));
    }

    #[test]
    fn test_trailing_blank_block_is_skipped() {
        let records = WarodaiSourceLoader::split_records("preamble\n\nねこ (нэко)\n\n\n\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "ねこ (нэко)");
    }

    #[test]
    fn test_empty_block_between_records_is_kept() {
        let records = WarodaiSourceLoader::split_records("preamble\n\nねこ (нэко)\n\n\n\nいぬ (ину)\n");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text, "ねこ (нэко)");
        assert_eq!(records[1].text, "");
        assert_eq!(records[1].line_no, 5);
        assert_eq!(records[2].text, "いぬ (ину)");
        assert_eq!(records[2].line_no, 7);
    }

    #[test]
    fn test_encoding_labels() -> Result<()> {
        assert_eq!(get_encoding_object_by_label("UTF-16")?, encoding_rs::UTF_16LE);
        assert_eq!(get_encoding_object_by_label("utf-8")?, encoding_rs::UTF_8);
        assert!(get_encoding_object_by_label("no-such-encoding").is_err());
        Ok(())
    }

    #[test]
    fn test_load_utf16le_file_with_bom() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("warodai.txt");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in SOURCE.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, bytes)?;

        let records = WarodaiSourceLoader::new(&path, "utf-16le")?;
        assert_eq!(records, WarodaiSourceLoader::split_records(SOURCE));
        Ok(())
    }

    #[test]
    fn test_invalid_utf16_is_a_decode_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("warodai.txt");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "ねこ (нэко)\nкот".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        // lone high surrogate, then an odd trailing byte
        bytes.extend_from_slice(&[0x00, 0xD8, 0x41]);
        fs::write(&path, bytes)?;

        let error = WarodaiSourceLoader::new(&path, "utf-16").unwrap_err();
        assert!(matches!(error, ConvertError::Decode { .. }), "unexpected error: {}", error);
        assert!(error.to_string().contains("UTF-16LE"));
        assert!(!error.is_structural());
        Ok(())
    }
}
