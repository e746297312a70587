//! Splits a chunk of text into the unique candidate words worth asking the
//! engine about.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;

// Character ranges that count as part of a word, one per script family.
// Adding a script is a new constant plus an entry in `WORD_CHARS`.
const ASCII_WORD: &str = "0-9A-Za-z_";
const LATIN_ACCENTED: &str = r"\x{00C0}-\x{024F}";
const HEBREW: &str = r"\x{0591}-\x{05F4}";
const ARABIC: &str = r"\x{0621}-\x{064A}";
const THAI: &str = r"\x{0E00}-\x{0E7F}";
const GREEK: &str = r"\x{0370}-\x{03FF}";
const GREEK_EXTENDED: &str = r"\x{1F00}-\x{1FFF}";

const WORD_CHARS: &[&str] = &[
    ASCII_WORD,
    LATIN_ACCENTED,
    HEBREW,
    ARABIC,
    THAI,
    GREEK,
    GREEK_EXTENDED,
];

lazy_static! {
    static ref ALLOWED: String = WORD_CHARS.concat();

    // Leading run of anything not allowed (dots included), the interior, then
    // a trailing run of anything neither allowed nor a dot.
    static ref TRIM: Regex =
        Regex::new(&format!(r"^[^{a}]*(.*?)[^{a}.]*$", a = ALLOWED.as_str())).unwrap();

    // Interior separators: slashes, hyphens, apostrophes and the like.
    static ref SEPARATOR: Regex = Regex::new(&format!(r"[^{}.]+", ALLOWED.as_str())).unwrap();

    // "e.g.", "i.e.", "U.S.A." and friends keep their dots and digits.
    static ref ABBREVIATION: Regex =
        Regex::new(r"(?:^|[^0-9A-Za-z_])[0-9A-Za-z_]\.[0-9A-Za-z_]\.").unwrap();

    static ref DIGITS_OR_TRAILING_DOTS: Regex = Regex::new(r"[0-9]+|\.+$").unwrap();
}

/// Unique candidate words of `text`, in first-seen order.
///
/// Candidates are compared case-sensitively and are always longer than one
/// character.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for piece in text.split_whitespace() {
        let trimmed = strip_digits_and_dots(trim_piece(piece));

        for word in SEPARATOR.split(&trimmed).map(clean_part) {
            if word.chars().count() > 1 && !seen.contains(word) {
                seen.insert(word.to_string());
                candidates.push(word.to_string());
            }
        }
    }

    candidates
}

/// Drop leading and trailing characters outside the allow-list. Trailing
/// dots survive this step.
fn trim_piece(piece: &str) -> &str {
    TRIM.captures(piece)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// A piece cut out by a separator gets the same edge trimming as a whole
/// token, so `x/.foo` and `foo./bar` don't leave stray dots behind.
fn clean_part(part: &str) -> &str {
    let part = trim_piece(part);
    if ABBREVIATION.is_match(part) {
        part
    } else {
        part.trim_end_matches('.')
    }
}

/// Outside abbreviations, remove the first digit run or the trailing dots,
/// whichever comes first.
fn strip_digits_and_dots(word: &str) -> Cow<'_, str> {
    if ABBREVIATION.is_match(word) {
        Cow::Borrowed(word)
    } else {
        DIGITS_OR_TRAILING_DOTS.replace(word, "")
    }
}
