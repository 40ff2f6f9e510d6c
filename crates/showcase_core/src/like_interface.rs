//! Window model for the video-liking interface, independent of any toolkit.

use crate::console::Console;
use crate::dialogs::Dialogs;
use crate::liked::{LikedVideos, User};
use crate::videos::{VideoKind, play_video};

pub const WINDOW_TITLE: &str = "YouTube Like Interface";
pub const WINDOW_SIZE: [f32; 2] = [400.0, 300.0];
pub const DEFAULT_USERNAME: &str = "JohnDoe";
/// Title liked by the "Like Video" button.
pub const SAMPLE_TITLE: &str = "Sample Video";

/// What a button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(VideoKind),
    Like,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub text: &'static str,
    pub action: Action,
}

/// Runs `build` between the "Creating buttons..." and "Buttons created."
/// console lines and returns what it built.
pub fn with_creation_log<T>(console: &mut dyn Console, build: impl FnOnce() -> T) -> T {
    console.line("Creating buttons...");
    let built = build();
    console.line("Buttons created.");
    built
}

/// State behind the like-interface window.
#[derive(Debug, Clone)]
pub struct LikeInterface {
    liked: LikedVideos,
    user: User,
    buttons: Vec<ButtonSpec>,
    user_label: String,
}

impl LikeInterface {
    pub fn new(console: &mut dyn Console) -> Self {
        Self::with_user(User::new(DEFAULT_USERNAME), console)
    }

    pub fn with_user(user: User, console: &mut dyn Console) -> Self {
        let buttons = with_creation_log(console, || {
            vec![
                ButtonSpec {
                    text: "Play Tutorial",
                    action: Action::Play(VideoKind::Tutorial),
                },
                ButtonSpec {
                    text: "Play Movie",
                    action: Action::Play(VideoKind::Movie),
                },
                ButtonSpec {
                    text: "Like Video",
                    action: Action::Like,
                },
            ]
        });
        let user_label = format!("Logged in as: {}", user.username());
        Self {
            liked: LikedVideos::new(),
            user,
            buttons,
            user_label,
        }
    }

    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }

    pub fn user_label(&self) -> &str {
        &self.user_label
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn liked(&self) -> &LikedVideos {
        &self.liked
    }

    /// Handles a button press.
    pub fn press(&mut self, action: Action, console: &mut dyn Console, dialogs: &mut dyn Dialogs) {
        match action {
            Action::Play(kind) => play_video(kind.build().as_ref(), console, dialogs),
            Action::Like => self.add_liked_video(SAMPLE_TITLE, console, dialogs),
        }
    }

    /// Records `title` as liked, then confirms it with a modal.
    pub fn add_liked_video(
        &mut self,
        title: &str,
        console: &mut dyn Console,
        dialogs: &mut dyn Dialogs,
    ) {
        self.liked.add(title, console);
        dialogs.show_info("Liked Video", &format!("{title} added to your liked videos!"));
    }
}
