use std::collections::BTreeSet;
use std::io::BufRead;
use std::ops::Bound;

/// The set of words that count in a game.
///
/// Words are stored in lowercase, and all queries are case-insensitive.
/// Because the words are kept in sorted order, asking whether any word
/// starts with a given prefix is a single range lookup.
///
/// ```
/// # use boggle::Dictionary;
/// let dict = Dictionary::new(["Cat", "cats", "  at "]);
/// assert!(dict.contains("CAT"));
/// assert!(dict.has_prefix("ca"));
/// assert!(!dict.has_prefix("cx"));
/// assert_eq!(dict.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Creates a dictionary. Surrounding whitespace is trimmed and blank entries are skipped.
    pub fn new<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words
                .into_iter()
                .filter_map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    /// Reads a word list with one word per line.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut words = BTreeSet::new();
        for line in reader.lines() {
            if let Some(word) = normalize(&line?) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Is there a word that starts with `prefix`?
    ///
    /// Every word is a prefix of itself, and the empty string is a prefix of
    /// every word.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_lowercase();
        self.has_lowercase_prefix(&prefix)
    }

    /// Iterates over the words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    // Tile contents are already lowercase, so the search can skip normalization.
    pub(crate) fn has_lowercase_prefix(&self, prefix: &str) -> bool {
        // The first word that is not smaller than the prefix is the only candidate
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|word| word.starts_with(prefix))
    }

    pub(crate) fn contains_lowercase(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
