//! Proper-noun filtering over the raw word list.

/// A word list held in memory. Every call to [`WordList::words`] starts a
/// fresh pass over the lines in file order.
#[derive(Debug, Clone)]
pub struct WordList {
    content: String,
}

impl WordList {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        kept_words(&self.content)
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Yields every line whose first character is not uppercase, trimmed.
///
/// The uppercase test looks at the raw line, so `" Foo"` is kept as `"Foo"`.
/// Blank lines come through as `""`; grouping drops them.
pub fn kept_words(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| !starts_uppercase(line)).map(str::trim)
}

fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}
