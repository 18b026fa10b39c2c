//! Broadcast alignment of alternative kana and kanji spellings.
//!
//! Warodai headers list readings and spellings as parallel alternatives at two
//! levels: the outer level separated by `", "` and the inner level separated by
//! `"･"`. Both levels share one rule: pair by index, and when one side has a single
//! (or last) entry it applies to every remaining entry of the other side.

use std::fmt;

use crate::{ConvertError, Result};

/// Nesting level of an alternative group in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternativeLevel {
    /// Outer alternatives, separated by `", "`
    Nesting,
    /// Inner alternatives, separated by `"･"`
    Reading,
}

impl AlternativeLevel {
    pub fn delimiter(self) -> &'static str {
        match self {
            AlternativeLevel::Nesting => ", ",
            AlternativeLevel::Reading => "･",
        }
    }
}

impl fmt::Display for AlternativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlternativeLevel::Nesting => write!(f, "nesting"),
            AlternativeLevel::Reading => write!(f, "reading"),
        }
    }
}

/// Pairs two alternative lists by index, repeating the last element of the shorter one.
///
/// Returns `None` when both lists have more than one element and their lengths
/// differ. An empty list on either side yields no pairs.
///
/// # Examples
///
/// ```
/// use warodai_edict::builder::alignment::align_pairs;
///
/// let pairs = align_pairs(&["あ", "い"], &["亜"]).unwrap();
/// assert_eq!(pairs, vec![("あ", "亜"), ("い", "亜")]);
/// assert!(align_pairs(&["あ", "い", "う"], &["亜", "意"]).is_none());
/// ```
pub fn align_pairs<'a>(a: &[&'a str], b: &[&'a str]) -> Option<Vec<(&'a str, &'a str)>> {
    let (la, lb) = (a.len(), b.len());
    if la > 1 && lb > 1 && la != lb {
        return None;
    }
    if la == 0 || lb == 0 {
        return Some(Vec::new());
    }
    let pairs = (0..la.max(lb))
        .map(|i| (a[i.min(la - 1)], b[i.min(lb - 1)]))
        .collect();
    Some(pairs)
}

/// Splits `kana` and `kanji` on the level's delimiter and aligns the pieces.
///
/// # Arguments
///
/// * `level` - Which delimiter to split on
/// * `kana` - Kana alternatives at this level
/// * `kanji` - Kanji alternatives at this level, empty for kana-only headers
/// * `line` - Source header line, quoted in the error
///
/// # Returns
///
/// The aligned pairs. A side with a single piece is repeated against every
/// piece of the other side.
///
/// # Errors
///
/// `NestingMismatch` when both sides have several pieces of different counts.
pub fn expand<'a>(level: AlternativeLevel, kana: &'a str, kanji: &'a str, line: &str) -> Result<Vec<(&'a str, &'a str)>> {
    let delimiter = level.delimiter();
    let kana_list: Vec<&str> = kana.split(delimiter).collect();
    let kanji_list: Vec<&str> = kanji.split(delimiter).collect();
    align_pairs(&kana_list, &kanji_list).ok_or_else(|| {
        ConvertError::nesting_mismatch(level, kana_list.len(), kanji_list.len(), line)
    })
}
