use std::fs;
use std::path::PathBuf;

use holdem_engine::betting::Street;
use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::logger::{ActionRecord, HandLogger, HandRecord, ShowdownInfo};
use holdem_engine::rules::ValidatedAction;

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample_record(hand_id: &str, ts: Option<String>) -> HandRecord {
    HandRecord {
        hand_id: hand_id.to_string(),
        seed: Some(1),
        actions: vec![
            ActionRecord {
                seat: 0,
                street: Street::Preflop,
                action: ValidatedAction::Raise(20),
            },
            ActionRecord {
                seat: 1,
                street: Street::Preflop,
                action: ValidatedAction::Fold,
            },
        ],
        board: vec![Card {
            suit: S::Clubs,
            rank: R::Ace,
        }],
        pot: 35,
        winners: vec![0],
        result: Some("seat 0 wins 35 uncontested".to_string()),
        ts,
        showdown: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("handlog");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger
        .write(&sample_record("20260829-000001", None))
        .expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("handlog_ts");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger
        .write(&sample_record("20260829-000001", None))
        .expect("write first");
    logger
        .write(&sample_record(
            "20260829-000002",
            Some("2026-01-01T00:00:00Z".to_string()),
        ))
        .expect("write second");
    let text = fs::read_to_string(&path).expect("read file");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: HandRecord = serde_json::from_str(lines[0]).expect("parse first");
    let second: HandRecord = serde_json::from_str(lines[1]).expect("parse second");
    assert!(first.ts.is_some());
    assert_eq!(second.ts.as_deref(), Some("2026-01-01T00:00:00Z"));
}

#[test]
fn one_line_per_hand_in_sequence() {
    let path = tmp_path("handlog_seq");
    let mut logger = HandLogger::create(&path).expect("create logger");
    let first_id = logger.next_id();
    let second_id = logger.next_id();
    logger.write(&sample_record(&first_id, None)).expect("write");
    logger.write(&sample_record(&second_id, None)).expect("write");
    let text = fs::read_to_string(&path).expect("read file");
    let ids: Vec<String> = text
        .lines()
        .map(|l| serde_json::from_str::<HandRecord>(l).expect("parse").hand_id)
        .collect();
    assert_eq!(ids, vec![first_id, second_id]);
    assert!(ids[0] < ids[1]);
}

#[test]
fn showdown_details_survive_the_round_trip() {
    let mut record = sample_record("20260829-000003", None);
    record.showdown = Some(ShowdownInfo {
        winners: vec![0, 2],
        notes: Some("split pot".to_string()),
    });
    let line = serde_json::to_string(&record).expect("serialize");
    let back: HandRecord = serde_json::from_str(&line).expect("deserialize");
    assert_eq!(back.showdown, record.showdown);
}
