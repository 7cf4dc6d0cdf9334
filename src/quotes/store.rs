use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::constants::QUOTE_RETRIES;
use crate::error::SourceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self { text: text.into(), author: author.into() }
    }

    /// Author line as shown under the quote.
    pub fn attribution(&self) -> String {
        format!("— {}", self.author)
    }
}

/// Built-in quotes used whenever the quote file cannot be used.
pub fn fallback_quotes() -> Vec<Quote> {
    vec![
        Quote::new("The only way to do great work is to love what you do.", "Steve Jobs"),
        Quote::new("Believe you can and you're halfway there.", "Theodore Roosevelt"),
        Quote::new("Success is not final, failure is not fatal.", "Winston Churchill"),
    ]
}

/// Parses `quote|author` lines. The first `|` splits; blank lines and lines
/// without a `|` are skipped.
pub fn parse(contents: &str) -> Vec<Quote> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once('|'))
        .map(|(text, author)| Quote::new(text.trim(), author.trim()))
        .collect()
}

pub fn read(path: &Path) -> Result<Vec<Quote>, SourceError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;
    let quotes = parse(&contents);
    if quotes.is_empty() {
        return Err(SourceError::Empty(path.to_path_buf()));
    }
    Ok(quotes)
}

/// Non-empty, shuffled set of quotes.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Loads and shuffles the quote file. Never fails: an unusable source
    /// yields the built-in quotes in their fixed order.
    pub fn load<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Self {
        match read(path) {
            Ok(mut quotes) => {
                quotes.shuffle(rng);
                tracing::debug!(count = quotes.len(), path = %path.display(), "loaded quotes");
                Self { quotes }
            }
            Err(e) => {
                tracing::warn!(error = %e, "using built-in quotes");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self { quotes: fallback_quotes() }
    }

    /// Wraps an already loaded list as-is; an empty list becomes the fallback.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        if quotes.is_empty() { Self::fallback() } else { Self { quotes } }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Draws a quote uniformly, re-drawing up to a few times to avoid showing
    /// `previous` again. After the retries run out the repeat is accepted.
    pub fn select_next<R: Rng + ?Sized>(&self, previous: Option<&Quote>, rng: &mut R) -> &Quote {
        if self.quotes.len() == 1 {
            return &self.quotes[0];
        }
        let mut pick = self.pick(rng);
        if let Some(previous) = previous {
            for _ in 0..QUOTE_RETRIES {
                if pick != previous {
                    break;
                }
                pick = self.pick(rng);
            }
        }
        pick
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        &self.quotes[rng.random_range(0..self.quotes.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_skips_blank_and_malformed_lines() {
        let quotes = parse("Hello|Bob\n\nno-pipe-line\nOnly|\n");
        assert_eq!(quotes, vec![Quote::new("Hello", "Bob"), Quote::new("Only", "")]);
    }

    #[test]
    fn parse_splits_on_first_pipe_and_trims() {
        let quotes = parse("  a | b | c  \r\n");
        assert_eq!(quotes, vec![Quote::new("a", "b | c")]);
    }

    #[test]
    fn empty_list_becomes_fallback() {
        assert_eq!(QuoteStore::from_quotes(Vec::new()).quotes(), fallback_quotes().as_slice());
    }

    #[test]
    fn single_quote_repeats() {
        let store = QuoteStore::from_quotes(vec![Quote::new("only", "one")]);
        let mut rng = StdRng::seed_from_u64(1);
        let first = store.select_next(None, &mut rng).clone();
        assert_eq!(store.select_next(Some(&first), &mut rng), &first);
    }

    #[test]
    fn attribution_prefix() {
        assert_eq!(Quote::new("x", "Ada").attribution(), "— Ada");
    }
}
