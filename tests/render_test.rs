//! Diff encoding of full rendered frames.

use shardwalk::core::Session;
use shardwalk::term::{encode_diff_into, encode_full_into, Viewport, WorldView};
use shardwalk::types::GameAction;

#[test]
fn identical_frames_encode_to_nothing() {
    let session = Session::default();
    let view = WorldView::default();
    let vp = Viewport::new(90, 30);
    let a = view.render(&session.snapshot(), session.log(), vp);
    let b = view.render(&session.snapshot(), session.log(), vp);

    let mut out = Vec::new();
    encode_diff_into(&a, &b, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn log_only_change_is_a_small_diff() {
    let mut session = Session::default();
    let view = WorldView::default();
    let vp = Viewport::new(90, 30);

    let before = view.render(&session.snapshot(), session.log(), vp);
    session.apply_action(GameAction::ShowInfo);
    let after = view.render(&session.snapshot(), session.log(), vp);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();

    assert!(!diff.is_empty());
    assert!(diff.len() * 4 < full.len());
}

#[test]
fn full_frame_never_prints_tail_markers() {
    let session = Session::default();
    let fb = WorldView::default().render(&session.snapshot(), session.log(), Viewport::new(90, 30));

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    assert!(!out.contains(&0u8));
    assert!(String::from_utf8(out).unwrap().contains('🧙'));
}
