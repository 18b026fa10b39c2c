//! Transformation of one Warodai record into EDICT entries.
//!
//! A record is a header line followed by definition lines:
//!
//! ```text
//! ねこ【猫】(нэко)〔1-017-1-02〕
//! 1. кошка; кот.
//! 2) <i>уст.</i> гейша.
//! ```
//!
//! The header supplies kana, optional kanji and an annotation; the definition
//! lines are normalized and appended to the annotation. Kana and kanji are then
//! expanded over their alternatives, which may produce several entries.

use crate::builder::alignment::{expand, AlternativeLevel};
use crate::builder::edict_entry::{DefinitionTail, EdictEntry};
use crate::builder::line_normalizer::normalize_line;
use crate::builder::word_processor::{process_word, AffixLabels};
use crate::{ConvertError, Result};

const KANJI_OPEN: char = '【';
const KANJI_CLOSE: char = '】';

/// Parts of a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderParts<'a> {
    /// Text before the first `(`
    pub kanakanji: &'a str,
    /// Text from the first `(` onward
    pub tail: &'a str,
    /// Interior of `【…】`, empty if the header has no kanji
    pub kanji: &'a str,
    /// Text before `【`, or `kanakanji` if the header has no kanji
    pub kana: &'a str,
}

impl<'a> HeaderParts<'a> {
    /// Splits a header line into its parts.
    ///
    /// # Errors
    ///
    /// Returns `MalformedHeader` if the line has no text before a `(`, or if it
    /// has a kanji bracket with nothing in front of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use warodai_edict::builder::record_transformer::HeaderParts;
    ///
    /// # fn main() -> warodai_edict::Result<()> {
    /// let parts = HeaderParts::parse("ねこ【猫】(нэко)〔1-017-1-02〕")?;
    /// assert_eq!(parts.kana, "ねこ");
    /// assert_eq!(parts.kanji, "猫");
    /// assert_eq!(parts.tail, "(нэко)〔1-017-1-02〕");
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(line: &'a str) -> Result<Self> {
        let kanakanji_end = match line.find('(') {
            Some(pos) if pos > 0 => pos,
            _ => return Err(ConvertError::malformed_header("no kanakanji part", line)),
        };
        let kanakanji = &line[..kanakanji_end];
        let tail = &line[kanakanji_end..];

        match kanji_bracket(line) {
            Some((open, kanji)) => {
                if open == 0 {
                    return Err(ConvertError::malformed_header("no kana part", line));
                }
                Ok(Self { kanakanji, tail, kanji, kana: &line[..open] })
            }
            None => Ok(Self { kanakanji, tail, kanji: "", kana: kanakanji }),
        }
    }
}

/// Finds the first `【` and the last `】` after it; returns the position of `【`
/// and the non-empty text between them.
fn kanji_bracket(line: &str) -> Option<(usize, &str)> {
    let open = line.find(KANJI_OPEN)?;
    let interior_start = open + KANJI_OPEN.len_utf8();
    let close = interior_start + line[interior_start..].rfind(KANJI_CLOSE)?;
    if close == interior_start {
        return None;
    }
    Some((open, &line[interior_start..close]))
}

/// Converts records into EDICT entries.
#[derive(Debug, Clone, Default)]
pub struct RecordTransformer {
    pub labels: AffixLabels,
}

impl RecordTransformer {
    pub fn new(labels: AffixLabels) -> Self {
        Self { labels }
    }

    /// Transforms one raw record, already split on the blank-line delimiter.
    ///
    /// # Arguments
    ///
    /// * `record` - Header line followed by definition lines, joined by `\n`
    ///
    /// # Returns
    ///
    /// One entry per aligned kana/kanji pair, in alternative order. Every entry
    /// shares the definition lines of the record.
    ///
    /// # Errors
    ///
    /// `MalformedHeader`, `NestingMismatch` or `EmptyReading`, each naming the
    /// header line.
    ///
    /// # Examples
    ///
    /// ```
    /// use warodai_edict::builder::record_transformer::RecordTransformer;
    ///
    /// # fn main() -> warodai_edict::Result<()> {
    /// let entries = RecordTransformer::default().transform("あ, い【亜】(а)\n1. кот.")?;
    /// let lines: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
    /// assert_eq!(lines, ["亜 [あ] /(а){1} кот/", "亜 [い] /(а){1} кот/"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn transform(&self, record: &str) -> Result<Vec<EdictEntry>> {
        let mut lines = record.split('\n');
        let header = lines.next().unwrap_or_default();
        let parts = HeaderParts::parse(header)?;

        let mut tail = DefinitionTail::new(parts.tail);
        for line in lines {
            tail.push_definition(&normalize_line(line));
        }

        let mut entries = Vec::new();
        for (kana, kanji) in expand(AlternativeLevel::Nesting, parts.kana, parts.kanji, header)? {
            for (kana, kanji) in expand(AlternativeLevel::Reading, kana, kanji, header)? {
                entries.push(process_word(kana, kanji, &tail, &self.labels, header)?);
            }
        }
        Ok(entries)
    }
}
