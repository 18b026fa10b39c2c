//! Output-side value types: the shared definition tail and one EDICT line.

use std::fmt;

/// Composed definition text of one record.
///
/// The header annotation and the normalized definition body are kept apart so
/// the affix label can be placed between them per emitted line, without ever
/// modifying the tail shared by all expansions of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionTail {
    /// Header text from the first `(` onward, e.g. `(нэко)〔1-017-1-02〕`
    pub annotation: String,
    /// Normalized definition lines, each followed by `/`
    pub body: String,
}

impl DefinitionTail {
    pub fn new<S: Into<String>>(annotation: S) -> Self {
        Self {
            annotation: annotation.into(),
            body: String::new(),
        }
    }

    /// Appends one already-normalized definition line and its separator.
    pub fn push_definition(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('/');
    }

    /// Renders the tail with `affix_label` in the marker slot.
    pub fn render(&self, affix_label: &str) -> String {
        let mut text = String::with_capacity(self.annotation.len() + affix_label.len() + self.body.len());
        text.push_str(&self.annotation);
        text.push_str(affix_label);
        text.push_str(&self.body);
        text
    }
}

/// One line of the EDICT output.
///
/// `Display` yields `kanji [kana] /definition` or `kana /definition`, without
/// the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdictEntry {
    /// Kanji spelling, `None` for kana-only words
    pub headword: Option<String>,
    /// Kana reading
    pub reading: String,
    /// Rendered definition text
    pub definition: String,
}

impl fmt::Display for EdictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.headword {
            Some(kanji) => write!(f, "{} [{}] /{}", kanji, self.reading, self.definition),
            None => write!(f, "{} /{}", self.reading, self.definition),
        }
    }
}
