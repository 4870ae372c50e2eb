use std::io::Cursor;

use felt_cli::commands::handle_play_command;

/// A stdin script that keeps calling; more lines than any single hand can
/// consume, so the hand limit ends the session rather than EOF.
fn calling_script() -> Cursor<Vec<u8>> {
    Cursor::new("call\n".repeat(200).into_bytes())
}

#[test]
fn one_hand_session_runs_to_completion() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = calling_script();

    let result = handle_play_command(
        Some(1),
        Some(42),
        Some(0),
        &mut out,
        &mut err,
        &mut stdin,
    );
    assert!(result.is_ok());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Hand 1"));
    assert!(text.contains("session profit:"));
}

#[test]
fn quit_at_first_prompt_exits_cleanly() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(b"q\n".to_vec());

    let result = handle_play_command(None, Some(7), Some(0), &mut out, &mut err, &mut stdin);
    assert!(result.is_ok());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("session profit:"));
}

#[test]
fn eof_is_treated_as_quit() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(Vec::new());

    let result = handle_play_command(None, Some(9), Some(0), &mut out, &mut err, &mut stdin);
    assert!(result.is_ok());
}

#[test]
fn invalid_input_is_reported_and_reprompted() {
    // One junk line, then enough calls to finish the hand.
    let mut script = b"jump\n".to_vec();
    script.extend_from_slice(&"call\n".repeat(200).into_bytes());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(script);

    let result = handle_play_command(
        Some(1),
        Some(42),
        Some(0),
        &mut out,
        &mut err,
        &mut stdin,
    );
    assert!(result.is_ok());

    let err_text = String::from_utf8(err).unwrap();
    assert!(err_text.contains("Unrecognized action"));
}
