//! Text normalization and tokenization for word-frequency analysis.

use unicode_normalization::UnicodeNormalization;

use crate::config::Config;

/// Compose to NFC, lowercase, and drop every character that is neither
/// alphanumeric nor whitespace. Accented letters and ñ are kept as-is, even
/// when the input spells them as a base letter plus a combining mark.
pub fn normalize_text(text: &str) -> String {
  text
    .nfc()
    .filter(|c| c.is_alphanumeric() || c.is_whitespace())
    .flat_map(char::to_lowercase)
    .collect()
}

/// Whether a normalized token carries meaning: long enough and not a stopword.
pub fn is_informative(token: &str, config: &Config) -> bool {
  token.chars().count() >= config.min_token_len && !config.is_stopword(token)
}

/// Informative tokens of `text`, in order of appearance.
pub fn tokenize(text: &str, config: &Config) -> Vec<String> {
  normalize_text(text)
    .split_whitespace()
    .filter(|t| is_informative(t, config))
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_strips_punctuation_and_lowercases() {
    assert_eq!(
      normalize_text("¡La lámpara está rota. Por favor, arreglala!"),
      "la lámpara está rota por favor arreglala"
    );
  }

  #[test]
  fn normalize_preserves_spanish_letters() {
    assert_eq!(normalize_text("SEÑALIZACIÓN Ágil"), "señalización ágil");
  }

  #[test]
  fn decomposed_accents_are_composed_not_dropped() {
    let config = Config::default();
    assert_eq!(
      tokenize("sen\u{0303}alizacio\u{0301}n", &config),
      vec!["señalización"]
    );
    assert_eq!(normalize_text("A\u{0301}GIL"), "ágil");
  }

  #[test]
  fn length_is_counted_in_chars() {
    let config = Config::default();
    // Three chars, four bytes.
    assert!(is_informative("año", &config));
    assert!(!is_informative("añ", &config));
  }

  #[test]
  fn tokenize_drops_stopwords_and_short_words() {
    let config = Config::default();
    assert_eq!(
      tokenize("La compañía es ágil y rápida", &config),
      vec!["compañía", "ágil", "rápida"]
    );
    assert!(tokenize("de la un a y el si no ya", &config).is_empty());
  }
}
