use std::{collections::BTreeMap, fs, path::Path};

use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng,
};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{Error, Result};

const BUILTIN: &str = include_str!("../../../words/chameleon.toml");

/// Secret words grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordListManager {
    word_lists: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct WordListFile {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordListManager {
    pub fn new(word_lists: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            word_lists: word_lists.into_iter().collect(),
        }
    }

    /// Parses a word list of the form
    ///
    /// ```toml
    /// [categories]
    /// animals = ["cat", "dog"]
    /// ```
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: WordListFile = toml::from_str(text)?;
        Ok(Self::new(file.categories))
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let words = Self::from_toml(&text)?;
        debug!(categories = words.len(), "loaded word list");
        Ok(words)
    }

    /// The word list bundled with the bot.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN)
    }

    /// Picks a random word from `category`.
    ///
    /// A missing or unknown category is swapped for a random known one.
    pub fn random_word(&self, category: Option<&str>) -> Result<(String, String)> {
        self.random_word_with(category, &mut rand::thread_rng())
    }

    pub fn random_word_with(
        &self,
        category: Option<&str>,
        rng: &mut impl Rng,
    ) -> Result<(String, String)> {
        let known = category.and_then(|name| self.word_lists.get_key_value(name));

        let (category, words) = match known {
            Some(entry) => entry,
            None => self.word_lists.iter().choose(rng).ok_or(Error::NoCategories)?,
        };

        let word = words.choose(rng).ok_or_else(|| Error::NoWordsAvailable {
            category: category.clone(),
        })?;

        Ok((word.clone(), category.clone()))
    }

    pub fn categories(&self) -> Vec<&str> {
        self.word_lists.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.word_lists.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.word_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::WordListManager;
    use crate::games::chameleon::Error;

    fn manager(lists: &[(&str, &[&str])]) -> WordListManager {
        WordListManager::new(lists.iter().map(|(category, words)| {
            (
                (*category).to_owned(),
                words.iter().map(|word| (*word).to_owned()).collect(),
            )
        }))
    }

    #[test]
    fn word_from_requested_category() {
        let words = manager(&[("animals", &["cat", "dog"]), ("food", &["pizza"])]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10 {
            let (word, category) = words
                .random_word_with(Some("food"), &mut rng)
                .expect("food has words");
            assert_eq!((word.as_str(), category.as_str()), ("pizza", "food"));
        }
    }

    #[test]
    fn unknown_category_falls_back() {
        let words = manager(&[("animals", &["cat", "dog"])]);

        let (word, category) = words.random_word(Some("birds")).expect("animals has words");

        assert_eq!(category, "animals");
        assert!(["cat", "dog"].contains(&word.as_str()));
    }

    #[test]
    fn no_category_picks_any() {
        let words = manager(&[("animals", &["cat"]), ("food", &["pizza"])]);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            let (word, category) = words.random_word_with(None, &mut rng).expect("has words");
            match category.as_str() {
                "animals" => assert_eq!(word, "cat"),
                "food" => assert_eq!(word, "pizza"),
                other => panic!("unexpected category {other}"),
            }
        }
    }

    #[test]
    fn empty_category_has_no_words() {
        let words = manager(&[("empty", &[])]);

        let err = words.random_word(Some("empty")).unwrap_err();
        assert!(matches!(err, Error::NoWordsAvailable { category } if category == "empty"));
    }

    #[test]
    fn empty_manager_has_no_categories() {
        let words = WordListManager::default();
        assert!(matches!(words.random_word(None), Err(Error::NoCategories)));
    }

    #[test]
    fn categories_are_listed() {
        let words = manager(&[("food", &["pizza"]), ("animals", &["cat"])]);
        assert_eq!(words.categories(), ["animals", "food"]);
        assert!(words.contains("food"));
        assert!(!words.contains("birds"));
    }

    #[test]
    fn parses_toml() {
        let words = WordListManager::from_toml(
            r#"
            [categories]
            animals = ["cat", "dog"]
            empty = []
            "#,
        )
        .expect("valid toml");

        assert_eq!(words, manager(&[("animals", &["cat", "dog"]), ("empty", &[])]));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = WordListManager::from_toml("categories = 4").unwrap_err();
        assert!(matches!(err, Error::ParseWords(_)));
    }

    #[test]
    fn builtin_list_is_usable() {
        let words = WordListManager::builtin().expect("bundled list should parse");

        assert!(!words.is_empty());
        for category in words.categories() {
            words
                .random_word(Some(category))
                .expect("bundled categories should not be empty");
        }
    }
}
