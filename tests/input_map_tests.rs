use blockfall::input::{intent_for_key, FrameIntents};
use blockfall::types::Intent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_arrow_keys() {
    let cases = [
        (KeyCode::Left, Intent::MoveLeft),
        (KeyCode::Right, Intent::MoveRight),
        (KeyCode::Down, Intent::SoftDrop),
        (KeyCode::Up, Intent::Rotate),
    ];
    for (code, intent) in cases {
        assert_eq!(
            intent_for_key(KeyEvent::new(code, KeyModifiers::NONE)),
            Some(intent)
        );
    }
}

#[test]
fn test_frame_collects_mixed_events() {
    let mut frame = FrameIntents::new();
    frame.push_event(press(KeyCode::Char('x')));
    frame.push_event(press(KeyCode::Right));
    frame.push_event(Event::FocusLost);
    frame.push_event(press(KeyCode::Esc));

    assert_eq!(frame.intents(), &[Intent::MoveRight, Intent::Quit]);
    assert!(!frame.resized());
}
