use std::fs;

use shardwalk::core::Session;
use shardwalk::journal::Journal;
use shardwalk::types::GameAction;

#[test]
fn journal_appends_json_lines_to_file() {
    let path = std::env::temp_dir().join(format!("shardwalk-journal-{}.jsonl", std::process::id()));
    let _ = fs::remove_file(&path);

    let mut session = Session::default();
    {
        let mut journal = Journal::open(&path).unwrap();
        for action in [GameAction::MoveUp, GameAction::TeleportMemory] {
            let events = session.apply_action(action);
            journal.record(session.player().steps(), action, &events).unwrap();
        }
    }

    // Reopening appends.
    {
        let mut journal = Journal::open(&path).unwrap();
        let events = session.apply_action(GameAction::ShowInfo);
        journal
            .record(session.player().steps(), GameAction::ShowInfo, &events)
            .unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let _ = fs::remove_file(&path);

    // moveUp: discovered, announced, stateUpdated; teleport: teleported, stateUpdated; info.
    let kinds: Vec<_> = records.iter().map(|r| r["type"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        vec![
            "discovered",
            "announced",
            "stateUpdated",
            "teleported",
            "stateUpdated",
            "info"
        ]
    );
    assert_eq!(records[3]["shard"], 59);
    assert_eq!(records[3]["action"], "teleportMemory");
    assert!(records.iter().all(|r| r["step"] == 1));
    assert!(records.iter().all(|r| r["ts"].is_u64()));
}
