use std::collections::VecDeque;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "arrowup",
    "arrowup",
    "arrowdown",
    "arrowdown",
    "arrowleft",
    "arrowright",
    "arrowleft",
    "arrowright",
    "b",
    "a",
];

/// Sliding window over the last keys pressed.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    recent: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a `KeyboardEvent.key` value; true when the sequence completes.
    /// The window is cleared after a match.
    pub fn push(&mut self, key: &str) -> bool {
        self.recent.push_back(key.to_lowercase());
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().zip(KONAMI_SEQUENCE).all(|(k, want)| k == want);
        if matched {
            self.recent.clear();
        }
        matched
    }
}
