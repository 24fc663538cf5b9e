//! Integration tests for the session: input actions through to events and log.

use crossterm::event::{KeyCode, KeyEvent};

use shardwalk::core::{teleport_position, PlayerState, QuestEvent, Session, SessionOptions};
use shardwalk::input::handle_key_event;
use shardwalk::types::{GameAction, Position, RenderMode, ShardId, SpecialTag};

#[test]
fn test_ten_steps_east_reach_tokyo() {
    let mut session = Session::default();
    for _ in 0..10 {
        session.apply_action(GameAction::MoveRight);
    }

    let snap = session.snapshot();
    assert_eq!(snap.position, Position::new(10, 0));
    assert_eq!(snap.shard.index(), 35);
    assert_eq!(snap.location_name, "Tokyo");
    assert_eq!(snap.steps, 10);
    assert_eq!(snap.visited_count, 2);
    assert_eq!(snap.topology, "🌊 DIII");

    // Opening line plus one announcement.
    let texts: Vec<_> = session.log().iter().map(|e| e.to_string()).collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[1], "[1] 📍 🗼 Tokyo");
}

#[test]
fn test_teleport_uses_circle_formula() {
    let shard = SpecialTag::Cusp.shard();
    let theta = 17.0 / 71.0 * std::f64::consts::TAU;
    let expected = Position::new(
        (27.0 * theta.cos()).floor() as i64,
        (27.0 * theta.sin()).floor() as i64,
    );
    assert_eq!(teleport_position(shard), expected);
    assert_eq!(expected, Position::new(1, 26));

    let mut session = Session::default();
    session.apply_action(GameAction::TeleportCusp);
    let snap = session.snapshot();
    assert_eq!(snap.position, expected);
    assert_eq!(snap.steps, 0);
    // The landing cell is not in the requested shard.
    assert_eq!(snap.shard.index(), 52);
    assert!(session.player().visited().contains(ShardId::new(52).unwrap()));
    assert!(snap.discovered.is_empty());
}

#[test]
fn test_all_specials_complete_the_quest() {
    let mut player = PlayerState::new();
    player.move_by(0, -1);
    player.move_by(5, -8);
    player.move_by(-10, 17);

    assert_eq!(player.position(), Position::new(-5, 8));
    let snap = player.snapshot();
    assert_eq!(snap.location_name, "Ramanujan Temple");
    assert!(snap.quest_complete());
    assert_eq!(snap.discovered.len(), 3);
}

#[test]
fn test_events_fire_at_most_once_over_long_walks() {
    let mut player = PlayerState::new();
    let mut discovered = Vec::new();
    let mut announced = Vec::new();

    // Square spiral around the origin, crossing every shard repeatedly.
    let dirs = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    let mut leg = 1;
    for turn in 0..80 {
        let (dx, dy) = dirs[turn % 4];
        for _ in 0..leg {
            for event in player.move_by(dx, dy) {
                match event {
                    QuestEvent::Discovered { tag, .. } => discovered.push(tag),
                    QuestEvent::Announced { shard } => announced.push(shard),
                    _ => {}
                }
            }
        }
        if turn % 2 == 1 {
            leg += 1;
        }
    }

    assert_eq!(discovered.len(), 3);
    let mut unique = announced.clone();
    unique.sort_by_key(|s| s.index());
    unique.dedup();
    assert_eq!(unique.len(), announced.len());
    // Every landmark except the pre-announced origin shard.
    assert_eq!(announced.len(), 9);
    assert_eq!(player.visited().len(), 71);
}

#[test]
fn test_keys_drive_the_session() {
    let mut session = Session::new(SessionOptions {
        render_mode: RenderMode::Euclidean,
        log_capacity: 16,
    });

    for code in [
        KeyCode::Char('w'),
        KeyCode::Char('h'),
        KeyCode::Char(' '),
        KeyCode::Char('x'),
    ] {
        if let Some(action) = handle_key_event(KeyEvent::from(code)) {
            session.apply_action(action);
        }
    }

    let snap = session.snapshot();
    assert_eq!(snap.position, Position::new(0, -1));
    assert_eq!(snap.render_mode, RenderMode::Hyperbolic);

    let last = session.log().last().map(|e| e.text.clone());
    assert_eq!(last.as_deref(), Some("🐯 Giza Pyramids: 765.0B nodes, 🔮 CII"));
}

#[test]
fn test_quest_log_is_bounded() {
    let mut session = Session::new(SessionOptions {
        render_mode: RenderMode::Hyperbolic,
        log_capacity: 3,
    });
    for _ in 0..10 {
        session.apply_action(GameAction::ToggleGeometry);
    }
    assert_eq!(session.log().len(), 3);
    assert!(session.log().iter().all(|e| e.text.starts_with("Geometry: ")));
}
