//! Playable video variants and the dispatch that plays them.

use crate::console::Console;
use crate::dialogs::Dialogs;

/// Anything that can be played.
///
/// New kinds of video implement this trait; [`play_video`] needs no change.
pub trait Video {
    /// Writes the variant-specific playback message.
    fn play(&self, console: &mut dyn Console);

    /// Type name shown to the user in the playback confirmation.
    fn type_name(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial;

impl Video for Tutorial {
    fn play(&self, console: &mut dyn Console) {
        console.line("Playing tutorial video...");
    }

    fn type_name(&self) -> &'static str {
        "Tutorial"
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Movie;

impl Video for Movie {
    fn play(&self, console: &mut dyn Console) {
        console.line("Playing movie...");
    }

    fn type_name(&self) -> &'static str {
        "Movie"
    }
}

/// Requestable video kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    Tutorial,
    Movie,
}

impl VideoKind {
    pub fn build(self) -> Box<dyn Video> {
        match self {
            VideoKind::Tutorial => Box::new(Tutorial),
            VideoKind::Movie => Box::new(Movie),
        }
    }
}

/// Plays `video` and confirms it with a modal naming the variant.
pub fn play_video(video: &dyn Video, console: &mut dyn Console, dialogs: &mut dyn Dialogs) {
    video.play(console);
    tracing::info!(kind = video.type_name(), "video playing");
    dialogs.show_info(
        "Playing Video",
        &format!("{} is now playing!", video.type_name()),
    );
}
