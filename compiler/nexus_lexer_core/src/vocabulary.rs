//! Language vocabulary: the word and character sets the classifier consults.
//!
//! The sets are data, not logic. A [`Vocabulary`] is built once at startup
//! (from the defaults below or from a user-supplied file) and then shared
//! read-only by every scan.

use rustc_hash::FxHashSet;

/// Default keyword set.
///
/// The visibility markers `+`, `-` and `#` are listed for completion even
/// though the scanner never produces them as identifier lexemes.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "sum",
    "class",
    "implement",
    "global",
    "Constructor",
    "Factory",
    "if",
    "else",
    "for",
    "while",
    "return",
    "match",
    "new",
    "self",
    "Sequential",
    "true",
    "false",
    "public",
    "private",
    "protected",
    "+",
    "-",
    "#",
];

/// Default built-in type set.
pub const DEFAULT_TYPES: &[&str] = &[
    "i32", "i64", "i16", "i8", "i4", "u32", "u64", "u16", "u8", "f32", "f64", "bool", "string",
    "void", "char",
];

/// Default built-in function set. Dotted names are matched whole.
pub const DEFAULT_BUILTIN_FUNCTIONS: &[&str] = &["printf", "warnf", "Math.Random"];

/// Default single-character operators.
pub const DEFAULT_OPERATORS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|'];

/// Default single-character punctuation.
pub const DEFAULT_PUNCTUATION: &[char] = &['(', ')', '{', '}', '[', ']', ',', '.', ';', ':'];

/// An ordered set of words.
///
/// Keeps insertion order for listing (completion items come out in the
/// order the vocabulary declares them) and a hash set for lookup.
/// Duplicates are dropped, first occurrence wins.
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl WordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = WordSet::default();
        for word in words {
            let word = word.into();
            if set.lookup.insert(word.clone()) {
                set.words.push(word);
            }
        }
        set
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Words in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A set of single characters.
#[derive(Clone, Debug, Default)]
pub struct CharSet {
    chars: FxHashSet<char>,
}

impl CharSet {
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        CharSet {
            chars: chars.into_iter().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Everything the classifier needs to know about the language's words and
/// symbols.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    keywords: WordSet,
    types: WordSet,
    builtin_functions: WordSet,
    operators: CharSet,
    punctuation: CharSet,
}

impl Vocabulary {
    pub fn new(
        keywords: WordSet,
        types: WordSet,
        builtin_functions: WordSet,
        operators: CharSet,
        punctuation: CharSet,
    ) -> Self {
        Vocabulary {
            keywords,
            types,
            builtin_functions,
            operators,
            punctuation,
        }
    }

    pub fn keywords(&self) -> &WordSet {
        &self.keywords
    }

    pub fn types(&self) -> &WordSet {
        &self.types
    }

    pub fn builtin_functions(&self) -> &WordSet {
        &self.builtin_functions
    }

    pub fn operators(&self) -> &CharSet {
        &self.operators
    }

    pub fn punctuation(&self) -> &CharSet {
        &self.punctuation
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::new(
            WordSet::new(DEFAULT_KEYWORDS.iter().copied()),
            WordSet::new(DEFAULT_TYPES.iter().copied()),
            WordSet::new(DEFAULT_BUILTIN_FUNCTIONS.iter().copied()),
            CharSet::new(DEFAULT_OPERATORS.iter().copied()),
            CharSet::new(DEFAULT_PUNCTUATION.iter().copied()),
        )
    }
}

#[cfg(test)]
mod tests;
