use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

use crate::utils::letters::normalize;

pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a JSON file holding an array of words
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&content)
            .with_context(|| format!("Dictionary {} is not a JSON array", path.display()))?;

        let total = entries.len();
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| match entry {
                serde_json::Value::String(word) => Some(word),
                _ => None,
            })
            .collect();
        if words.len() < total {
            tracing::warn!(
                "Skipped {} non-string entries in dictionary {}",
                total - words.len(),
                path.display()
            );
        }

        let dictionary = Self::from_words(words);
        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build a dictionary from raw words, normalizing each one
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref().trim()))
            .filter(|word| word.chars().count() >= 2)
            .collect();

        Self { words }
    }

    /// Create an empty dictionary (load failures fall back to this)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
