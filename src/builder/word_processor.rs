//! Cleanup and affix classification of one aligned (kana, kanji) pair.
//!
//! Warodai spells affixes with an ellipsis on the side where the other word
//! attaches: `…する` is a suffix, `お…` a prefix, `…が…` an infix. Homonyms are
//! told apart by a trailing run of Latin capital `I` (`かみI`, `かみII`), which
//! only makes sense in the source and is dropped from Japanese forms.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::builder::edict_entry::{DefinitionTail, EdictEntry};
use crate::{ConvertError, Result};

/// Character marking the attachment side of an affix.
pub const ELLIPSIS: char = '…';

static JAPANESE_SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{Hiragana}\p{Katakana}\p{Han}]").unwrap());
static HOMONYM_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"I+$").unwrap());

/// Position of a word fragment relative to the word it attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AffixMarker {
    #[default]
    None,
    Prefix,
    Suffix,
    Infix,
}

impl AffixMarker {
    /// Classifies a pair by the ellipses at the ends of its forms.
    ///
    /// A trailing ellipsis on either form means prefix, a leading one means
    /// suffix, and both (on the same or different forms) mean infix.
    ///
    /// # Examples
    ///
    /// ```
    /// use warodai_edict::builder::word_processor::AffixMarker;
    ///
    /// assert_eq!(AffixMarker::classify("…する", "…為る"), AffixMarker::Suffix);
    /// assert_eq!(AffixMarker::classify("お…", ""), AffixMarker::Prefix);
    /// assert_eq!(AffixMarker::classify("…が", "…が…"), AffixMarker::Infix);
    /// ```
    pub fn classify(kana: &str, kanji: &str) -> Self {
        let prefix = kana.ends_with(ELLIPSIS) || kanji.ends_with(ELLIPSIS);
        let suffix = kana.starts_with(ELLIPSIS) || kanji.starts_with(ELLIPSIS);
        match (prefix, suffix) {
            (true, true) => AffixMarker::Infix,
            (true, false) => AffixMarker::Prefix,
            (false, true) => AffixMarker::Suffix,
            (false, false) => AffixMarker::None,
        }
    }
}

/// Display text inserted into the definition for each affix marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffixLabels {
    pub prefix: String,
    pub suffix: String,
    pub infix: String,
}

impl Default for AffixLabels {
    fn default() -> Self {
        Self {
            prefix: "<префикс>".to_string(),
            suffix: "<суффикс>".to_string(),
            infix: "<инфикс>".to_string(),
        }
    }
}

impl AffixLabels {
    pub fn label(&self, marker: AffixMarker) -> &str {
        match marker {
            AffixMarker::None => "",
            AffixMarker::Prefix => &self.prefix,
            AffixMarker::Suffix => &self.suffix,
            AffixMarker::Infix => &self.infix,
        }
    }
}

/// Returns true if `word` contains any Hiragana, Katakana or Han character.
pub fn is_japanese(word: &str) -> bool {
    JAPANESE_SCRIPT.is_match(word)
}

/// Drops the trailing homonym index (`I`, `II`, ...) from a word.
pub fn strip_homonym_index(word: &str) -> &str {
    match HOMONYM_INDEX.find(word) {
        Some(m) => &word[..m.start()],
        None => word,
    }
}

fn remove_ellipsis(word: &str) -> String {
    word.replace(ELLIPSIS, "")
}

fn clean_form(word: &str) -> &str {
    let word = word.trim();
    if is_japanese(word) {
        strip_homonym_index(word)
    } else {
        word
    }
}

/// Turns one aligned pair into an EDICT entry.
///
/// # Arguments
///
/// * `kana` - Reading alternative, possibly with `…` affix markers and a homonym index
/// * `kanji` - Matching kanji alternative, empty for kana-only words
/// * `tail` - Annotation and definitions shared by the whole record
/// * `labels` - Tags rendered for prefix, suffix and infix words
/// * `line` - Source header line, quoted in the error
///
/// # Returns
///
/// The entry with markers and homonym index removed. It has no headword when
/// the cleaned kanji is empty.
///
/// # Errors
///
/// `EmptyReading` when nothing is left of the kana once the markers are removed.
pub fn process_word(kana: &str, kanji: &str, tail: &DefinitionTail, labels: &AffixLabels, line: &str) -> Result<EdictEntry> {
    let kana = clean_form(kana);
    let kanji = clean_form(kanji);

    let marker = AffixMarker::classify(kana, kanji);
    let definition = tail.render(labels.label(marker));

    let kana = remove_ellipsis(kana);
    let kanji = remove_ellipsis(kanji);
    if kana.is_empty() {
        return Err(ConvertError::empty_reading(kanji, line));
    }

    Ok(EdictEntry {
        headword: if kanji.is_empty() { None } else { Some(kanji) },
        reading: kana,
        definition,
    })
}
