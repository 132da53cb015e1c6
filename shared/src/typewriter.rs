use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterSettings {
    pub text: String,
    /// Milliseconds before the first character appears.
    pub start_delay: u32,
    /// Milliseconds between characters.
    pub typing_delay: u32,
    /// Milliseconds the cursor keeps blinking after the last character.
    pub cursor_remove_delay: u32,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        TypewriterSettings {
            text: "Kuan-Hung Chen".to_string(),
            start_delay: 1000,
            typing_delay: 90,
            cursor_remove_delay: 2000,
        }
    }
}

/// One thing the typewriter does after waiting `delay` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Type { ch: char, delay: u32 },
    ClearCursor { delay: u32 },
}

impl Step {
    pub fn delay(&self) -> u32 {
        match self {
            Step::Type { delay, .. } | Step::ClearCursor { delay } => *delay,
        }
    }
}

/// Whether a document in `ready_state` has yet to fire `DOMContentLoaded`.
pub fn starts_after_load(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Reveals a text one character at a time, then clears the text cursor.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    settings: TypewriterSettings,
    finished: bool,
}

impl Typewriter {
    pub fn new(settings: TypewriterSettings) -> Typewriter {
        Typewriter {
            chars: settings.text.chars().collect(),
            index: 0,
            settings,
            finished: false,
        }
    }

    #[cfg(test)]
    fn typed(&self) -> String {
        self.chars[..self.index].iter().collect()
    }
}

impl Iterator for Typewriter {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }

        if let Some(&ch) = self.chars.get(self.index) {
            let delay = if self.index == 0 {
                self.settings.start_delay
            } else {
                self.settings.typing_delay
            };
            self.index += 1;

            return Some(Step::Type { ch, delay });
        }

        self.finished = true;

        // Nothing to type still waits for the start.
        let delay = if self.chars.is_empty() {
            self.settings.start_delay
        } else {
            self.settings.typing_delay
        };

        Some(Step::ClearCursor {
            delay: delay + self.settings.cursor_remove_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(text: &str) -> TypewriterSettings {
        TypewriterSettings {
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn types_each_character_then_clears_cursor() {
        let steps: Vec<Step> = Typewriter::new(settings("Hi!")).collect();

        assert_eq!(
            steps,
            vec![
                Step::Type {
                    ch: 'H',
                    delay: 1000
                },
                Step::Type { ch: 'i', delay: 90 },
                Step::Type { ch: '!', delay: 90 },
                Step::ClearCursor { delay: 2090 },
            ]
        );
    }

    #[test]
    fn default_text_takes_one_step_per_char() {
        let typewriter = Typewriter::new(TypewriterSettings::default());

        assert_eq!(typewriter.count(), "Kuan-Hung Chen".len() + 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typewriter = Typewriter::new(settings("陳冠宏"));

        assert_eq!(
            typewriter.next(),
            Some(Step::Type {
                ch: '陳',
                delay: 1000
            })
        );
        assert_eq!(typewriter.typed(), "陳");
        assert_eq!(typewriter.by_ref().count(), 3);
        assert_eq!(typewriter.typed(), "陳冠宏");
    }

    #[test]
    fn empty_text_only_clears_cursor() {
        let steps: Vec<Step> = Typewriter::new(settings("")).collect();

        assert_eq!(steps, vec![Step::ClearCursor { delay: 3000 }]);
        assert_eq!(steps[0].delay(), 3000);
    }

    #[test]
    fn waits_only_while_the_document_is_loading() {
        assert!(starts_after_load("loading"));
        assert!(!starts_after_load("interactive"));
        assert!(!starts_after_load("complete"));
    }

    #[test]
    fn stays_finished() {
        let mut typewriter = Typewriter::new(settings("a"));

        typewriter.by_ref().for_each(drop);

        assert_eq!(typewriter.next(), None);
    }
}
