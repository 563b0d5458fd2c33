/// Turns table names into model file names.
pub trait Inflector {
    /// The singular form of `word`. Table names are plural by convention.
    fn singular(&self, word: &str) -> String;
}

/// English inflection rules from the `pluralizer` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct English();

impl Inflector for English {
    fn singular(&self, word: &str) -> String {
        pluralizer::pluralize(word, 1, false)
    }
}
