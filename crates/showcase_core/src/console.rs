//! Plain-text console output shared by both programs.

/// Sink for informational console lines.
///
/// Lines written here are for a human watching the terminal; nothing
/// parses them. Structured diagnostics go through `tracing` instead.
pub trait Console {
    fn line(&mut self, text: &str);
}

/// Writes each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Keeps every line in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingConsole {
    pub lines: Vec<String>,
}

impl Console for RecordingConsole {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
