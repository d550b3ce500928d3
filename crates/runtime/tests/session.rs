use std::fs;

use game_core::{Command, Direction, ErrorSeverity, GameConfig, PcgRng, Phase};
use runtime::{RuntimeError, Session};

#[test]
fn same_seed_builds_the_same_dungeon() {
    let a = Session::with_seed(2024).unwrap();
    let b = Session::with_seed(2024).unwrap();
    assert_eq!(a.state(), b.state());
    assert_eq!(a.seed(), Some(2024));
}

#[test]
fn seeded_sessions_replay_identically() {
    let commands = [
        Command::Move(Direction::Up),
        Command::Move(Direction::Left),
        Command::Attack,
        Command::Move(Direction::Down),
        Command::Move(Direction::Right),
        Command::Attack,
    ];
    let mut a = Session::with_seed(7).unwrap();
    let mut b = Session::with_seed(7).unwrap();
    for command in commands {
        let left = a.execute(command);
        let right = b.execute(command);
        assert_eq!(left.is_ok(), right.is_ok());
    }
    assert_eq!(a.state(), b.state());
}

#[test]
fn custom_rng_and_config_are_used() {
    let mut config = GameConfig::default();
    config.spawn.enemy_count = 2;
    config.spawn.heal_items = 0;

    let session = Session::builder()
        .config(config)
        .rng(PcgRng::new(5))
        .build()
        .unwrap();
    assert_eq!(session.state().entities.enemy_count(), 2);
    assert_eq!(session.state().entities.item_count(), 2);
    assert_eq!(session.seed(), None);
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    fs::write(&path, "[spawn]\nenemy_count = 1\n").unwrap();

    let session = Session::builder()
        .config_file(&path)
        .seed(1)
        .build()
        .unwrap();
    assert_eq!(session.config().spawn.enemy_count, 1);
    assert_eq!(session.state().entities.enemy_count(), 1);
}

#[test]
fn bad_config_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.toml");
    fs::write(&path, "[map]\nwidth = 0\n").unwrap();

    let err = Session::builder().config_file(&path).seed(1).build().err().unwrap();
    assert!(matches!(err, RuntimeError::Content(_)));
    assert_eq!(err.severity(), ErrorSeverity::Configuration);
}

#[test]
fn crowded_config_fails_before_any_state_exists() {
    let mut config = GameConfig::default();
    config.map.width = 4;
    config.map.height = 4;
    config.spawn.enemy_count = 40;

    let err = Session::builder().config(config).seed(3).build().err().unwrap();
    assert!(matches!(err, RuntimeError::Spawn(_)));
}

#[test]
fn snapshot_json_exposes_the_board() {
    let session = Session::with_seed(9).unwrap();
    let json = session.snapshot_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["turn"]["turn_number"], 1);
    assert_eq!(value["entities"]["player"]["hp"], 20);
    assert!(value["log"]["entries"].as_array().is_some_and(|entries| !entries.is_empty()));
}

#[test]
fn turn_number_tracks_acted_commands() {
    let mut session = Session::with_seed(21).unwrap();
    assert!(!session.is_game_over());

    let report = session.move_player(Direction::Up).unwrap();
    let expected = if report.acted { 2 } else { 1 };
    assert_eq!(session.state().turn_number(), expected);

    // attacking always consumes the turn
    let report = session.attack().unwrap();
    assert!(report.acted);
    if report.phase == Phase::AwaitingCommand {
        assert_eq!(report.turn_number, expected + 1);
    }
}
