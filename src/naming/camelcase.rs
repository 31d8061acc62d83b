//! Splitting of "CamelCase" identifiers into words.
//!
//! A word starts at an uppercase character. Runs of uppercase characters
//! (acronyms like `PDF`) stay together, except for the last one when it is
//! followed by a lowercase character, since that one starts the next word:
//!
//! ```
//! use xunit_viz::naming::camelcase::split;
//!
//! assert_eq!(split("PDFLoader", &[]), vec!["PDF", "Loader"]);
//! assert_eq!(split("FullyQualifiedName", &[]), vec!["Fully", "Qualified", "Name"]);
//! ```
//!
//! Literals listed in the `no_split` set are never split, even when they
//! contain uppercase characters of their own:
//!
//! ```
//! use xunit_viz::naming::camelcase::split;
//!
//! let no_split = vec!["HostBuilder".to_string()];
//! assert_eq!(split("XHostBuilderY", &no_split), vec!["X", "HostBuilder", "Y"]);
//! ```

/// Reader over the characters of an identifier.
///
/// `pos` is a byte offset that always sits on a character boundary.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn read(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn unread(&mut self) {
        if let Some(c) = self.input[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
        }
    }

    /// Whether the text from `start` up to and including the next character
    /// is the beginning of a protected literal.
    fn is_no_split(&self, start: usize, no_split: &[String]) -> bool {
        if no_split.is_empty() {
            return false;
        }

        let end = self.peek().map_or(self.pos, |c| self.pos + c.len_utf8());
        let candidate = &self.input[start..end];

        no_split.iter().any(|word| word.starts_with(candidate))
    }

    /// Reads the word starting at the current position.
    fn read_word(&mut self, no_split: &[String]) -> &'a str {
        let start = self.pos;

        self.read();

        if self.peek().is_some_and(char::is_uppercase) {
            while self
                .peek()
                .is_some_and(|c| c.is_uppercase() || self.is_no_split(start, no_split))
            {
                self.read();
            }

            // The last uppercase character belongs to the next word.
            if !self.at_end() {
                self.unread();
            }

            return &self.input[start..self.pos];
        }

        while self
            .peek()
            .is_some_and(|c| !c.is_uppercase() || self.is_no_split(start, no_split))
        {
            self.read();
        }

        &self.input[start..self.pos]
    }
}

/// Splits `input` into its "CamelCase" words.
///
/// An empty input yields a single empty word. The returned words are never
/// empty otherwise, and concatenating them gives back `input`.
pub fn split<'a>(input: &'a str, no_split: &[String]) -> Vec<&'a str> {
    if input.is_empty() {
        return vec![input];
    }

    let mut cursor = Cursor::new(input);
    let mut words = Vec::new();

    while !cursor.at_end() {
        words.push(cursor.read_word(no_split));
    }

    words
}

/// Byte-oriented variant of [`split`].
///
/// Input that isn't valid UTF-8 is returned unchanged as a single word.
pub fn split_bytes<'a>(input: &'a [u8], no_split: &[String]) -> Vec<&'a [u8]> {
    match std::str::from_utf8(input) {
        Ok(text) => split(text, no_split)
            .into_iter()
            .map(str::as_bytes)
            .collect(),
        Err(_) => vec![input],
    }
}
