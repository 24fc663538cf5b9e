use shardwalk::core::{QuestLog, Session, WorldSnapshot};
use shardwalk::term::{AnchorY, Rgb, Viewport, WorldView, AVATAR};
use shardwalk::types::{GameAction, RenderMode};

// Default view: 25x20 tiles, two columns each => 50x20, plus border => 52x22.
// The side panel adds 2 + 30 columns, the quest log 5 rows.

#[test]
fn world_view_renders_border_corners() {
    let snap = WorldSnapshot::default();
    let view = WorldView::default();
    let fb = view.render(&snap, &QuestLog::new(4), Viewport::new(52, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(51, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(51, 21).unwrap().ch, '┘');
}

#[test]
fn world_view_puts_avatar_on_center_tile() {
    let snap = WorldSnapshot::default();
    let view = WorldView::default();
    let fb = view.render(&snap, &QuestLog::new(4), Viewport::new(52, 22));

    // Tile (12, 10) => column 1 + 24, row 1 + 10.
    assert_eq!(fb.get(25, 11).unwrap().ch, AVATAR);
    assert!(fb.get(26, 11).unwrap().is_tail());
}

#[test]
fn world_view_draws_side_panel_when_wide_enough() {
    let mut session = Session::default();
    for _ in 0..10 {
        session.apply_action(GameAction::MoveRight);
    }
    let view = WorldView::default();
    let fb = view.render(&session.snapshot(), session.log(), Viewport::new(90, 30));
    let all = fb.text();

    assert!(all.contains("POSITION"));
    assert!(all.contains("10, 0"));
    assert!(all.contains("35 - Tokyo"));
    assert!(all.contains("1,575,000,000,000"));
    assert!(all.contains("DIII"));
    assert!(all.contains("2/71"));
    assert!(all.contains("Hyperbolic"));
}

#[test]
fn world_view_shows_discoveries_and_log() {
    let mut session = Session::default();
    session.apply_action(GameAction::MoveUp);
    let view = WorldView::default();
    let fb = view.render(&session.snapshot(), session.log(), Viewport::new(90, 30));

    // start = ((90 - 84) / 2, (30 - 27) / 2) = (3, 1); panel values at 3 + 54 + 10.
    // QUEST is the eleventh panel row (one blank row after GEOMETRY).
    assert!(fb.row_text(11).contains("QUEST"));
    assert_eq!(fb.get(67, 11).unwrap().ch, '🐯');
    assert_eq!(fb.get(70, 11).unwrap().ch, '·');

    // Log rows start under the frame at 1 + 22.
    assert!(fb.row_text(23).contains("[0] ⚡ Quest begun!"));
    assert!(fb.row_text(24).contains("[1] 🐯 FOUND: Giza Pyramids!"));
    assert!(fb.row_text(25).contains("[1] 📍 🐯 Giza Pyramids"));
}

#[test]
fn world_view_centers_by_default_on_tall_viewports() {
    let view = WorldView::default();
    let fb = view.render(&WorldSnapshot::default(), &QuestLog::new(4), Viewport::new(52, 37));

    // start_y = (37 - 27) / 2 = 5.
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}

#[test]
fn world_view_can_anchor_to_top() {
    let view = WorldView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&WorldSnapshot::default(), &QuestLog::new(4), Viewport::new(52, 37));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn hyperbolic_mode_shades_edge_tiles() {
    let view = WorldView::default();
    let log = QuestLog::new(1);

    let euclid = WorldSnapshot {
        render_mode: RenderMode::Euclidean,
        ..WorldSnapshot::default()
    };
    let hyper = WorldSnapshot::default();

    // Top-left tile shows world cell (-12, -10), a plain shard.
    let flat = view.render(&euclid, &log, Viewport::new(52, 22)).get(1, 1).unwrap();
    let shaded = view.render(&hyper, &log, Viewport::new(52, 22)).get(1, 1).unwrap();

    assert_eq!(flat.style.bg, Rgb::new(30, 30, 40));
    assert!(!flat.style.dim);
    assert_ne!(shaded.style.bg, flat.style.bg);
    assert!(shaded.style.dim);
}

#[test]
fn smaller_map_fits_smaller_frame() {
    let view = WorldView::new(5, 5);
    assert_eq!(view.frame_size(), (12, 7));
    let fb = view.render(&WorldSnapshot::default(), &QuestLog::new(1), Viewport::new(12, 7));
    assert_eq!(fb.get(11, 6).unwrap().ch, '┘');
    assert_eq!(fb.get(5, 3).unwrap().ch, AVATAR);
}
