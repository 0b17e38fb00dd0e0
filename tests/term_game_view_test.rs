use blockfall::core::{GameEngine, GameSnapshot};
use blockfall::term::{GameView, Rgb, Viewport};
use blockfall::types::{Intent, PieceColor, ShapeKind};

const WIDE: Viewport = Viewport {
    width: 80,
    height: 24,
};

#[test]
fn test_board_frame_corners() {
    let view = GameView::default();
    let canvas = view.render(&GameSnapshot::default(), WIDE);
    let (ox, oy) = view.board_origin(WIDE);
    let (w, h) = view.board_size();

    assert_eq!(canvas.get(ox, oy).unwrap().ch, '┌');
    assert_eq!(canvas.get(ox + w - 1, oy).unwrap().ch, '┐');
    assert_eq!(canvas.get(ox, oy + h - 1).unwrap().ch, '└');
    assert_eq!(canvas.get(ox + w - 1, oy + h - 1).unwrap().ch, '┘');
}

#[test]
fn test_panel_shows_score_and_level() {
    let mut snap = GameSnapshot::default();
    snap.score = 1230;
    snap.level = 13;
    let text = GameView::default().render(&snap, WIDE).to_text();

    assert!(text.contains("NEXT"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("1230"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("13"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn test_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    snap.game_over = true;
    let text = GameView::default().render(&snap, WIDE).to_text();

    assert!(text.contains("GAME OVER"));
    assert!(text.contains("SPACE to restart"));
}

#[test]
fn test_preview_uses_next_piece_color() {
    let mut snap = GameSnapshot::default();
    snap.next.kind = ShapeKind::O;
    snap.next.color = PieceColor::Green;
    let canvas = GameView::default().render(&snap, WIDE);

    let green = (0..canvas.height())
        .flat_map(|y| canvas.row(y).iter())
        .filter(|g| g.ch == '█' && g.style.fg == Rgb::from(PieceColor::Green))
        .count();
    // Four cells, two columns each.
    assert_eq!(green, 8);
}

#[test]
fn test_renders_live_engine() {
    let mut engine = GameEngine::new(8);
    engine.tick(0.0, &[Intent::MoveLeft]);
    let snap = engine.snapshot();
    let canvas = GameView::default().render(&snap, WIDE);

    let color = Rgb::from(engine.active().color);
    let painted = (0..canvas.height())
        .flat_map(|y| canvas.row(y).iter())
        .filter(|g| g.ch == '█' && g.style.fg == color)
        .count();
    // Active piece on the board plus, when the colors match, the preview.
    assert!(painted >= 8);
}
