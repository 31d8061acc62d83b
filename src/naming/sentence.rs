//! Joining of words into a sentence.

/// Joins `words` into a single, space separated sentence.
///
/// The first word is kept as is. Every other word is converted to lowercase,
/// unless it's an exact member of `no_transform`.
///
/// ```
/// use xunit_viz::naming::sentence::to_sentence;
///
/// assert_eq!(to_sentence(&["A", "Collection", "Of", "Words"], &[]), "A collection of words");
/// ```
pub fn to_sentence<S: AsRef<str>>(words: &[S], no_transform: &[String]) -> String {
    let mut sentence = String::new();

    for (idx, word) in words.iter().enumerate() {
        let word = word.as_ref();

        if idx == 0 {
            sentence.push_str(word);
            continue;
        }

        sentence.push(' ');

        if no_transform.iter().any(|w| w == word) {
            sentence.push_str(word);
        } else {
            sentence.push_str(&word.to_lowercase());
        }
    }

    sentence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sentence_empty() {
        let words: [&str; 0] = [];
        assert_eq!(to_sentence(&words, &[]), "");
    }

    #[test]
    fn test_to_sentence_lowercase_words() {
        assert_eq!(
            to_sentence(&["A", "collection", "of", "words"], &[]),
            "A collection of words"
        );
    }

    #[test]
    fn test_to_sentence_uppercase_words() {
        assert_eq!(
            to_sentence(
                &[
                    "A",
                    "Collection",
                    "Of",
                    "Words",
                    "Starting",
                    "With",
                    "An",
                    "Uppercase",
                    "Character"
                ],
                &[]
            ),
            "A collection of words starting with an uppercase character"
        );
    }

    #[test]
    fn test_to_sentence_keeps_first_word() {
        assert_eq!(to_sentence(&["PDF", "Loader"], &[]), "PDF loader");
    }

    #[test]
    fn test_to_sentence_no_transform() {
        let no_transform = vec!["DbSynchronizer".to_string()];

        assert_eq!(
            to_sentence(&["The", "DbSynchronizer", "Runs"], &no_transform),
            "The DbSynchronizer runs"
        );
        // Membership is exact, not case-insensitive.
        assert_eq!(
            to_sentence(&["The", "DBSynchronizer"], &no_transform),
            "The dbsynchronizer"
        );
    }
}
