use crate::{AnnotatedResult, CheckResult, OccurrencePosition};
use regex::Regex;
use tracing::warn;

/// Characters that do NOT act as a boundary around a word. Anything else,
/// accented letters included, does.
const WORD_CLASS: &str = "0-9A-Za-z_";

/// Attach the occurrences of every flagged word to its result, dropping the
/// words that were found correct. Input order is kept.
pub fn populate_positions<I>(text: &str, results: I) -> Vec<AnnotatedResult>
where
    I: IntoIterator<Item = Option<CheckResult>>,
{
    results
        .into_iter()
        .flatten()
        .map(|result| {
            let positions = find_positions(text, result.word());
            AnnotatedResult { result, positions }
        })
        .collect()
}

/// Left-to-right, non-overlapping occurrences of `word` in `text` that sit
/// between boundary characters (or the ends of the text).
///
/// The boundary after a match is consumed, so two occurrences separated by a
/// single character only report the first. `to` counts one boundary
/// character past the word unless the match began at offset 0.
pub fn find_positions(text: &str, word: &str) -> Vec<OccurrencePosition> {
    let pattern = format!(
        "(?:[^{w}]|^){word}(?:[^{w}]|$)",
        w = WORD_CLASS,
        word = regex::escape(word)
    );
    let matcher = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            warn!(word, error = %e, "cannot build occurrence matcher");
            return Vec::new();
        }
    };

    let length = word.chars().count();
    let mut offsets = CharOffsets::new(text);
    let mut positions = Vec::new();

    for m in matcher.find_iter(text) {
        let start = offsets.char_index(m.start());
        let lead = m
            .as_str()
            .find(word)
            .map_or(0, |byte| m.as_str()[..byte].chars().count());
        let adjustment = if m.start() == 0 { 0 } else { 1 };

        positions.push(OccurrencePosition {
            from: start + lead,
            to: start + length + adjustment,
            length,
        });
    }

    positions
}

/// Converts increasing byte offsets into char offsets without rescanning
/// the text from the start each time.
struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn char_index(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(text: &str, pos: &OccurrencePosition) -> String {
        text.chars().skip(pos.from).take(pos.to - pos.from).collect()
    }

    #[test]
    fn test_word_at_start() {
        let positions = find_positions("Helo wrld, this is fyne.", "Helo");
        assert_eq!(
            positions,
            vec![OccurrencePosition {
                from: 0,
                to: 4,
                length: 4
            }]
        );
    }

    #[test]
    fn test_word_inside_text() {
        let text = "Helo wrld, this is fyne.";

        let wrld = find_positions(text, "wrld");
        assert_eq!(wrld.len(), 1);
        assert_eq!((wrld[0].from, wrld[0].to), (5, 9));
        assert_eq!(slice(text, &wrld[0]), "wrld");

        let fyne = find_positions(text, "fyne");
        assert_eq!((fyne[0].from, fyne[0].to), (19, 23));
    }

    #[test]
    fn test_multiple_occurrences_in_order() {
        let text = "teh cat, teh dog; and teh end";
        let positions = find_positions(text, "teh");

        let froms: Vec<_> = positions.iter().map(|p| p.from).collect();
        assert_eq!(froms, vec![0, 9, 22]);
        assert!(positions.iter().all(|p| p.length == 3));
    }

    #[test]
    fn test_respects_word_boundaries() {
        assert!(find_positions("other brother", "the").is_empty());
        assert!(find_positions("the_end", "the").is_empty());
        assert_eq!(find_positions("(the)", "the").len(), 1);
    }

    #[test]
    fn test_consumed_boundary_hides_adjacent_match() {
        let positions = find_positions("abc abc", "abc");
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn test_leading_guard_at_offset_zero() {
        let positions = find_positions("(Helo there", "Helo");
        assert_eq!(
            positions,
            vec![OccurrencePosition {
                from: 1,
                to: 4,
                length: 4
            }]
        );
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        let text = "déjà vu, recieve";
        let positions = find_positions(text, "recieve");
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].from, 9);
        assert_eq!(positions[0].length, 7);
        assert_eq!(slice(text, &positions[0]), "recieve");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let positions = find_positions("see e.g. this, not eXgY", "e.g.");
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].from, 4);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(find_positions("Receive it", "receive").is_empty());
    }

    #[test]
    fn test_populate_skips_correct_words() {
        let text = "Helo there";
        let results = vec![
            None,
            Some(CheckResult::Suggestions {
                word: "Helo".to_string(),
                suggestions: vec!["Hello".to_string()],
            }),
            None,
        ];

        let annotated = populate_positions(text, results);
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].word(), "Helo");
        assert_eq!(annotated[0].positions.len(), 1);
    }

    #[test]
    fn test_unmatched_word_has_no_positions() {
        let results = vec![Some(CheckResult::Correctness {
            word: "receive".to_string(),
            correct: false,
        })];

        let annotated = populate_positions("I recieve mail", results);
        assert_eq!(annotated.len(), 1);
        assert!(annotated[0].positions.is_empty());
    }
}
