use crate::constants::{DELETE_CHAR_MS, TYPE_CHAR_MS, TYPE_HOLD_EMPTY_MS, TYPE_HOLD_FULL_MS};

/// Text to show and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Types each word out, holds it, deletes it, then moves to the next word.
#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// `None` when no non-empty word is given.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    #[allow(dead_code)] // host tests
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn tick(&mut self) -> TypeStep {
        let word = &self.words[self.word_index];
        let word_len = word.chars().count();
        let mut delay_ms;
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            delay_ms = DELETE_CHAR_MS;
        } else {
            self.char_index = (self.char_index + 1).min(word_len);
            delay_ms = TYPE_CHAR_MS;
        }
        let text: String = word.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == word_len {
            delay_ms = TYPE_HOLD_FULL_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = TYPE_HOLD_EMPTY_MS;
        }
        TypeStep { text, delay_ms }
    }
}
