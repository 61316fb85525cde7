use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(70),
            delete_delay: Duration::from_millis(50),
            pause: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
    Done,
}

/// Types out a list of words one character at a time, then deletes them.
///
/// The caller drives it: each [`Typewriter::tick`] performs one step and
/// returns how long to wait before the next one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    timing: Timing,
    looping: bool,
    word: usize,
    // counted in chars, not bytes
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            timing: Timing::default(),
            looping: true,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done || self.words.is_empty()
    }

    /// The currently visible prefix of the active word.
    pub fn text(&self) -> &str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        let end = word
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(word.len());
        &word[..end]
    }

    /// Advances one step. Returns the delay before the next tick, or `None`
    /// once a non-looping run has typed its last word.
    pub fn tick(&mut self) -> Option<Duration> {
        if self.is_done() {
            return None;
        }
        let len = self.words[self.word].chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown < len {
                    return Some(self.timing.type_delay);
                }
                if !self.looping && self.word + 1 == self.words.len() {
                    self.phase = Phase::Done;
                    return None;
                }
                self.phase = Phase::Deleting;
                Some(self.timing.pause)
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown > 0 {
                    return Some(self.timing.delete_delay);
                }
                self.word = (self.word + 1) % self.words.len();
                self.phase = Phase::Typing;
                Some(self.timing.type_delay)
            }
            Phase::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Option<Duration> {
        Some(Duration::from_millis(n))
    }

    #[test]
    fn test_types_pauses_deletes_and_wraps() {
        let mut tw = Typewriter::new(["ab", "c"]);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), ms(70));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), ms(1000));
        assert_eq!(tw.text(), "ab");

        assert_eq!(tw.tick(), ms(50));
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), ms(70));
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), ms(1000));
        assert_eq!(tw.text(), "c");
        assert_eq!(tw.tick(), ms(70));
        assert_eq!(tw.text(), "");

        // back to the first word
        assert_eq!(tw.tick(), ms(70));
        assert_eq!(tw.text(), "a");
        assert!(!tw.is_done());
    }

    #[test]
    fn test_non_looping_stops_on_last_word() {
        let mut tw = Typewriter::new(["hi"]).looping(false);
        assert_eq!(tw.tick(), ms(70));
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.text(), "hi");
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.text(), "hi");
    }

    #[test]
    fn test_empty_word_list() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert!(tw.is_done());
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new(["né👋"]);
        tw.tick();
        assert_eq!(tw.text(), "n");
        tw.tick();
        assert_eq!(tw.text(), "né");
        assert_eq!(tw.tick(), ms(1000));
        assert_eq!(tw.text(), "né👋");
    }

    #[test]
    fn test_custom_timing() {
        let timing = Timing {
            type_delay: Duration::from_millis(1),
            delete_delay: Duration::from_millis(2),
            pause: Duration::from_millis(3),
        };
        let mut tw = Typewriter::new(["xy"]).with_timing(timing);
        assert_eq!(tw.timing(), timing);
        assert_eq!(tw.tick(), ms(1));
        assert_eq!(tw.tick(), ms(3));
        assert_eq!(tw.tick(), ms(2));
        assert_eq!(tw.tick(), ms(1));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_cycles_through_every_word() {
        let words = ["Full Stack Developer", "React Enthusiast", "Tech Learner"];
        let mut tw = Typewriter::new(words);
        let mut seen = Vec::new();
        // one full pass types and deletes every character once
        let ticks: usize = words.iter().map(|w| 2 * w.chars().count()).sum();
        for _ in 0..ticks {
            tw.tick();
            if words.contains(&tw.text()) && seen.last() != Some(&tw.text().to_string()) {
                seen.push(tw.text().to_string());
            }
        }
        assert_eq!(seen, ["Full Stack Developer", "React Enthusiast", "Tech Learner"]);
    }
}
