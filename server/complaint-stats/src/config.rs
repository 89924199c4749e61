//! Engine configuration with sane defaults.

use std::collections::HashSet;

/// Function words (articles, prepositions, conjunctions, common auxiliaries)
/// dropped from word-frequency analysis. Entries are already lowercase.
pub const DEFAULT_STOPWORDS: &[&str] = &[
  "de", "la", "el", "en", "y", "a", "los", "las", "del", "al", "con", "por", "un", "una", "unos",
  "unas", "para", "no", "si", "sí", "ya", "que", "se", "lo", "le", "les", "es", "son", "está",
  "están", "esta", "este", "esto", "estos", "estas", "ese", "esa", "eso", "muy", "pero", "o", "u",
  "e", "ni", "sin", "sobre", "mi", "mis", "su", "sus", "tu", "tus", "me", "te", "nos", "como",
  "más", "hay", "fue", "ha", "han", "porque", "cuando", "donde", "entre", "hasta", "desde",
  "también", "ante", "tras",
];

/// Tunables for complaint analytics.
#[derive(Debug, Clone)]
pub struct Config {
  /// Tokens with fewer characters than this are discarded.
  pub min_token_len: usize,
  /// Size of the word ranking included in a full report.
  pub default_top_n: usize,
  /// Always lowercase; only grows through `with_extra_stopwords`.
  stopwords: HashSet<String>,
}

impl Config {
  pub fn is_stopword(&self, token: &str) -> bool {
    self.stopwords.contains(token)
  }

  pub fn stopwords(&self) -> &HashSet<String> {
    &self.stopwords
  }

  pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
    self.min_token_len = min_token_len;
    self
  }

  pub fn with_default_top_n(mut self, default_top_n: usize) -> Self {
    self.default_top_n = default_top_n;
    self
  }

  /// Add extra stopwords on top of the current set (lowercased).
  pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self
      .stopwords
      .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      min_token_len: 3,
      default_top_n: 15,
      stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let config = Config::default();
    assert_eq!(config.min_token_len, 3);
    assert_eq!(config.default_top_n, 15);
    for w in ["de", "la", "el", "en", "y", "a", "los", "del", "con", "por", "un", "para"] {
      assert!(config.is_stopword(w), "{} should be a stopword", w);
    }
    assert!(!config.is_stopword("lámpara"));
  }

  #[test]
  fn extra_stopwords_are_lowercased() {
    let config = Config::default().with_extra_stopwords(["Favor", "AULA"]);
    assert!(config.is_stopword("favor"));
    assert!(config.is_stopword("aula"));
    assert!(config.is_stopword("de"));
    assert!(config.stopwords().iter().all(|w| *w == w.to_lowercase()));
  }

  #[test]
  fn builders_override_tunables() {
    let config = Config::default().with_min_token_len(5).with_default_top_n(2);
    assert_eq!(config.min_token_len, 5);
    assert_eq!(config.default_top_n, 2);
    assert_eq!(config.stopwords().len(), Config::default().stopwords().len());
  }
}
