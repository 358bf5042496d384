//! Integration tests for the record shell
//!
//! Drives a record file through the same steps the command line uses:
//! save, reload, edit and replay, with settings read from disk.

use chess_record::record::{load_record, save_record};
use chess_record::settings::{load_settings, save_settings};
use chess_record::{MoveRecord, RecordError, Settings};
use chess_rules::{is_in_check, Color, Layout, Move, PieceKind, PromotionPiece, RulesConfig, Square};

fn moves(texts: &[&str]) -> Vec<Move> {
    texts.iter().map(|text| text.parse().unwrap()).collect()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_record_survives_save_and_reload() {
    //! A record written to disk replays to the same position after reload.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    let settings = Settings::default();

    let mut record = MoveRecord::new();
    let played = record
        .extend_validated(&moves(&["e2e4", "e7e5", "d1e2", "d8e7"]), &settings)
        .unwrap();
    save_record(&path, &record).unwrap();

    let reloaded = load_record(&path, &settings).unwrap();
    assert_eq!(reloaded, record);
    assert_eq!(reloaded.replay(&settings).unwrap(), played);
    assert_eq!(played.king_square(Color::White), sq("e2"));
}

#[test]
fn test_settings_change_how_a_record_replays() {
    //! The same file is legal or not depending on the stored rule switches.
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.json");
    let path = dir.path().join("jump.txt");

    // b1c3 then c2c4 is legal; c2c4 jumping a piece on c3 needs relaxed rules.
    std::fs::write(&path, "b1c3\ng8f6\nc2c4\n").unwrap();
    let strict = load_settings(Some(&config));
    assert!(matches!(
        load_record(&path, &strict),
        Err(RecordError::Illegal { number: 3, .. })
    ));

    let relaxed = Settings {
        rules: RulesConfig {
            double_step_requires_clear_path: false,
        },
        ..Settings::default()
    };
    save_settings(&relaxed, Some(&config)).unwrap();
    let settings = load_settings(Some(&config));

    let record = load_record(&path, &settings).unwrap();
    let state = record.replay(&settings).unwrap();
    assert_eq!(
        state.board().get(sq("c4")).map(|piece| piece.kind),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn test_failed_edit_keeps_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    let settings = Settings::default();
    std::fs::write(&path, "e2e4\ne7e5\n").unwrap();

    let mut record = load_record(&path, &settings).unwrap();
    assert!(record.insert_after(1, &moves(&["d2d4"]), &settings).is_err());
    save_record(&path, &record).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "e2e4\ne7e5\n");
}

#[test]
fn test_replayed_check_is_reported() {
    //! Reduced layout: the black rook reaches the first rank.
    let settings = Settings {
        layout: Layout::Reduced,
        default_promotion: PromotionPiece::Queen,
        ..Settings::default()
    };
    let record = MoveRecord::from_moves(moves(&["d1e1", "a8a1"]));

    let state = record.replay(&settings).unwrap();
    assert_eq!(state.side_to_move(), Color::White);
    assert!(is_in_check(&state, Color::White));

    let earlier = record.replay_upto(1, &settings).unwrap();
    assert!(!is_in_check(&earlier, Color::White));
}
