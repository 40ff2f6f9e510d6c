//! Modal dialog abstraction.

/// Blocking modal prompts. Every call returns only once the user has
/// dismissed the dialog.
pub trait Dialogs {
    fn show_info(&mut self, title: &str, message: &str);

    fn show_error(&mut self, title: &str, message: &str);

    /// Returns `true` when the user picked OK.
    fn ask_ok_cancel(&mut self, title: &str, message: &str) -> bool;
}

/// One dialog shown by [`RecordingDialogs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Info { title: String, message: String },
    Error { title: String, message: String },
    Question { title: String, message: String },
}

/// Records dialogs instead of showing them; questions are answered from
/// a script, falling back to `default_answer` once it runs out.
#[derive(Debug, Default, Clone)]
pub struct RecordingDialogs {
    pub shown: Vec<Shown>,
    pub answers: Vec<bool>,
    pub default_answer: bool,
}

impl RecordingDialogs {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Error { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Dialogs for RecordingDialogs {
    fn show_info(&mut self, title: &str, message: &str) {
        self.shown.push(Shown::Info {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.shown.push(Shown::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn ask_ok_cancel(&mut self, title: &str, message: &str) -> bool {
        self.shown.push(Shown::Question {
            title: title.to_string(),
            message: message.to_string(),
        });
        if self.answers.is_empty() {
            self.default_answer
        } else {
            self.answers.remove(0)
        }
    }
}
