use super::*;
use pretty_assertions::assert_eq;

#[test]
fn word_set_keeps_declaration_order() {
    let set = WordSet::new(["while", "if", "else"]);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["while", "if", "else"]);
}

#[test]
fn word_set_drops_duplicates() {
    let set = WordSet::new(["if", "for", "if"]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["if", "for"]);
}

#[test]
fn word_set_lookup_is_exact() {
    let set = WordSet::new(["Math.Random"]);
    assert!(set.contains("Math.Random"));
    assert!(!set.contains("Math"));
    assert!(!set.contains("math.random"));
}

#[test]
fn empty_sets() {
    assert!(WordSet::new(Vec::<String>::new()).is_empty());
    assert!(CharSet::new(std::iter::empty()).is_empty());
}

#[test]
fn char_set_lookup() {
    let set = CharSet::new(['+', '-', '+']);
    assert_eq!(set.len(), 2);
    assert!(set.contains('+'));
    assert!(!set.contains('*'));
}

#[test]
fn default_vocabulary_matches_constants() {
    let vocab = Vocabulary::default();
    assert_eq!(vocab.keywords().len(), DEFAULT_KEYWORDS.len());
    assert_eq!(vocab.types().len(), DEFAULT_TYPES.len());
    assert_eq!(
        vocab.builtin_functions().iter().collect::<Vec<_>>(),
        DEFAULT_BUILTIN_FUNCTIONS.to_vec()
    );
    assert_eq!(vocab.operators().len(), DEFAULT_OPERATORS.len());
    assert_eq!(vocab.punctuation().len(), DEFAULT_PUNCTUATION.len());
}

#[test]
fn default_operator_and_punctuation_sets_are_disjoint() {
    for ch in DEFAULT_OPERATORS {
        assert!(
            !DEFAULT_PUNCTUATION.contains(ch),
            "{ch:?} is both an operator and punctuation"
        );
    }
}
