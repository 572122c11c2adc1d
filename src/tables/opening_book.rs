//! Flat-text opening book lookup.
//!
//! The book is an unordered text file, one full game line per line, written
//! as numbered move pairs (`1.e4 e5 2.Nf3 Nc6 ...`). Lookup reformats the
//! played notation into the same numbered-pair prefix, collects every line
//! containing it as a literal substring, picks one at random, and returns
//! the next move token from that line.

use std::fs;

use rand::prelude::IndexedRandom;
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    lines: Vec<String>,
}

impl OpeningBook {
    /// Load the book shipped with the repository when present, otherwise the
    /// embedded default table.
    pub fn load_default() -> Self {
        if let Ok(book) = Self::from_path("tables/opening_book.txt") {
            return book;
        }
        Self::from_text(include_str!("data/opening_book_default.txt"))
    }

    pub fn from_path(path: &str) -> Result<Self, String> {
        let text = fs::read_to_string(path).map_err(|e| format!("failed reading {path}: {e}"))?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { lines }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Next book move after the `played` notation sequence, as a bare move
    /// token. `None` means no line continues this game; callers treat that
    /// as leaving the book for good.
    pub fn continuation<R: Rng + ?Sized>(&self, played: &[String], rng: &mut R) -> Option<String> {
        let prefix = numbered_prefix(played);

        let matching: Vec<&String> =
            self.lines.iter().filter(|line| line.contains(&prefix)).collect();
        let line = matching.choose(rng)?;

        let remainder = if prefix.is_empty() {
            line.as_str()
        } else {
            line.splitn(2, &prefix).nth(1)?
        };

        let token = remainder.split_whitespace().next()?;
        Some(strip_move_number(token).to_owned())
    }
}

/// Reformat played moves into the book's line format: `"1.e4 e5 2.Nf3 "`,
/// with a trailing space after every completed pair.
fn numbered_prefix(played: &[String]) -> String {
    let mut text = String::new();
    for (index, pair) in played.chunks(2).enumerate() {
        text.push_str(&(index + 1).to_string());
        text.push('.');
        text.push_str(&pair[0]);
        text.push(' ');
        if let Some(black_move) = pair.get(1) {
            text.push_str(black_move);
            text.push(' ');
        }
    }
    text
}

/// Drop a leading `<digits>.` move-number prefix, leaving castling tokens
/// (`0-0`) untouched.
fn strip_move_number(token: &str) -> &str {
    match token.find('.') {
        Some(dot) if dot > 0 && token[..dot].bytes().all(|b| b.is_ascii_digit()) => {
            &token[dot + 1..]
        }
        _ => token,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{numbered_prefix, strip_move_number, OpeningBook};

    fn notated(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prefix_gets_a_trailing_space_per_completed_pair() {
        assert_eq!(numbered_prefix(&notated(&["e4"])), "1.e4 ");
        assert_eq!(numbered_prefix(&notated(&["e4", "e5"])), "1.e4 e5 ");
        assert_eq!(
            numbered_prefix(&notated(&["e4", "e5", "Nf3"])),
            "1.e4 e5 2.Nf3 "
        );
        assert_eq!(numbered_prefix(&[]), "");
    }

    #[test]
    fn move_number_prefixes_are_stripped() {
        assert_eq!(strip_move_number("1.e4"), "e4");
        assert_eq!(strip_move_number("12.Nf3"), "Nf3");
        assert_eq!(strip_move_number("e5"), "e5");
        assert_eq!(strip_move_number("0-0"), "0-0");
    }

    #[test]
    fn continuation_returns_the_reply_token() {
        let book = OpeningBook::from_text("1.e4 e5 2.Nf3 Nc6 \n1.d4 d5 2.c4 e6 \n");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            book.continuation(&notated(&["e4"]), &mut rng),
            Some("e5".to_owned())
        );
        assert_eq!(
            book.continuation(&notated(&["e4", "e5"]), &mut rng),
            Some("Nf3".to_owned())
        );
        assert_eq!(
            book.continuation(&notated(&["d4", "d5", "c4"]), &mut rng),
            Some("e6".to_owned())
        );
    }

    #[test]
    fn empty_history_draws_a_first_move_from_some_line() {
        let book = OpeningBook::from_text("1.e4 e5 2.Nf3 Nc6 \n1.d4 d5 2.c4 e6 \n");
        let mut rng = StdRng::seed_from_u64(3);
        let first = book
            .continuation(&[], &mut rng)
            .expect("some line should match an empty history");
        assert!(first == "e4" || first == "d4");
    }

    #[test]
    fn unknown_history_yields_none() {
        let book = OpeningBook::from_text("1.e4 e5 2.Nf3 Nc6 \n");
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(book.continuation(&notated(&["a4"]), &mut rng), None);
    }

    #[test]
    fn exhausted_line_yields_none() {
        let book = OpeningBook::from_text("1.e4 e5 \n");
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(book.continuation(&notated(&["e4", "e5"]), &mut rng), None);
    }

    #[test]
    fn default_book_is_not_empty() {
        assert!(!OpeningBook::load_default().is_empty());
    }
}
