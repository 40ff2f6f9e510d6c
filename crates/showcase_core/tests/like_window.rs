use rstest::rstest;
use showcase_core::like_interface::SAMPLE_TITLE;
use showcase_core::{
    Action, LikeInterface, RecordingConsole, RecordingDialogs, Shown, User, VideoKind,
};

fn fresh() -> (LikeInterface, RecordingConsole, RecordingDialogs) {
    let mut console = RecordingConsole::default();
    let ui = LikeInterface::new(&mut console);
    (ui, console, RecordingDialogs::default())
}

#[rstest]
#[case(Action::Play(VideoKind::Tutorial), "Playing tutorial video...", "Tutorial is now playing!")]
#[case(Action::Play(VideoKind::Movie), "Playing movie...", "Movie is now playing!")]
fn play_buttons_print_and_confirm(
    #[case] action: Action,
    #[case] line: &str,
    #[case] confirmation: &str,
) {
    let (mut ui, mut console, mut dialogs) = fresh();

    ui.press(action, &mut console, &mut dialogs);

    assert_eq!(console.lines.last().map(String::as_str), Some(line));
    assert_eq!(
        dialogs.shown,
        vec![Shown::Info {
            title: "Playing Video".into(),
            message: confirmation.into(),
        }]
    );
}

#[test]
fn liked_titles_accumulate_in_call_order() {
    let (mut ui, mut console, mut dialogs) = fresh();

    ui.add_liked_video("X", &mut console, &mut dialogs);
    ui.add_liked_video("Y", &mut console, &mut dialogs);
    ui.press(Action::Like, &mut console, &mut dialogs);

    assert_eq!(ui.liked().titles(), ["X", "Y", SAMPLE_TITLE]);
    let log_lines: Vec<_> = console
        .lines
        .iter()
        .filter(|l| l.starts_with("LOG: "))
        .collect();
    assert_eq!(
        log_lines,
        [
            "LOG: Added X to liked videos.",
            "LOG: Added Y to liked videos.",
            "LOG: Added Sample Video to liked videos.",
        ]
    );
    assert_eq!(dialogs.shown.len(), 3);
}

#[test]
fn user_label_reflects_constructed_username() {
    let mut console = RecordingConsole::default();
    let ui = LikeInterface::with_user(User::new("alice"), &mut console);

    assert_eq!(ui.user().username(), "alice");
    assert_eq!(ui.user_label(), "Logged in as: alice");
}
