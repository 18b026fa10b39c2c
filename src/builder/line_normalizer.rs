//! Normalization of Warodai definition lines into EDICT-compatible text.

use once_cell::sync::Lazy;
use regex::Regex;

static MAIN_SENSE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.").unwrap());
static SUB_SENSE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\)").unwrap());

/// Rewrites one definition line.
///
/// The steps run in a fixed order:
/// 1. `1.` at the start becomes `{1}` (main sense number)
/// 2. `1)` at the start becomes `(1)` (sub-sense number)
/// 3. `<i>` / `</i>` become `(` / `)`
/// 4. `<a href="target">text</a>` becomes `〔target text〕`
/// 5. one trailing `.` is dropped
/// 6. `【` / `】` become `[` / `]`, since those brackets belong to the header syntax
///
/// # Examples
///
/// ```
/// use warodai_edict::builder::line_normalizer::normalize_line;
///
/// assert_eq!(normalize_line("1. <i>разг.</i> кот."), "{1} (разг.) кот");
/// assert_eq!(normalize_line("2) см. <a href=\"#1-001\">ねこ</a>"), "(2) см. 〔#1-001 ねこ〕");
/// ```
pub fn normalize_line(line: &str) -> String {
    let line = MAIN_SENSE_NUMBER.replace(line, "{${1}}");
    let line = SUB_SENSE_NUMBER.replace(&line, "(${1})");
    let line = line
        .replace("<i>", "(")
        .replace("</i>", ")")
        .replace("<a href=\"", "〔")
        .replace("\">", " ")
        .replace("</a>", "〕");
    let line = line.strip_suffix('.').unwrap_or(&line);
    line.replace('【', "[").replace('】', "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line() {
        let test_cases = [
            ("1. кот", "{1} кот"),
            ("12. сущ.", "{12} сущ"),
            ("3) кошка", "(3) кошка"),
            ("кот.", "кот"),
            ("кот...", "кот.."),
            ("<i>ирон.</i> котик", "(ирон.) котик"),
            ("ср. <a href=\"#1-017-1-03\">猫舌</a>.", "ср. 〔#1-017-1-03 猫舌〕"),
            ("【猫】 кот", "[猫] кот"),
            // numbering is only recognised at the start of the line
            ("см. 1. и 2)", "см. 1. и 2)"),
            ("1.5 кг", "{1}5 кг"),
            ("", ""),
        ];

        for (input, expected) in test_cases {
            assert_eq!(normalize_line(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_sub_sense_after_main_sense_is_untouched() {
        // After step 1 the line starts with "{", so step 2 can no longer match.
        assert_eq!(normalize_line("1.2) кот"), "{1}2) кот");
    }

    #[test]
    fn test_normalize_line_is_idempotent_on_normalized_text() {
        let inputs = [
            "1. <i>разг.</i> кот.",
            "2) см. <a href=\"#1-001\">ねこ</a>",
            "【猫】 кот",
            "(3) кошка",
        ];
        for input in inputs {
            let once = normalize_line(input);
            assert_eq!(normalize_line(&once), once, "Not idempotent for: {}", input);
        }
    }
}
