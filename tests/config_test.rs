//! Tests for match configuration loading and validation.

use std::io::Write;
use strictly_mnk::{MatchConfig, Occupant, PlayerKind, Seat};

const FOUR_BY_FOUR: &str = r#"
width = 4
height = 4
win_length = 3
seed = 9

[[players]]
name = "Ada"
occupant = "triangle"
kind = "human"

[[players]]
name = "Deep Square"
occupant = "square"
kind = "minimax"

[[players]]
name = "Chaos"
occupant = "circle"
kind = "random"
"#;

#[test]
fn test_default_config_is_quick_vs_ai() {
    let config = MatchConfig::default();
    assert_eq!((*config.width(), *config.height(), *config.win_length()), (3, 3, 3));
    assert_eq!(config.players().len(), 2);
    assert_eq!(*config.players()[0].kind(), PlayerKind::Human);
    assert_eq!(*config.players()[1].kind(), PlayerKind::Minimax);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_toml() {
    let config = MatchConfig::from_toml(FOUR_BY_FOUR).expect("Valid config");
    assert_eq!(*config.width(), 4);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(
        config.players()[0],
        Seat::new("Ada".to_string(), Occupant::Triangle, PlayerKind::Human)
    );
    assert_eq!(*config.players()[2].occupant(), Occupant::Circle);
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = MatchConfig::from_toml("width = 5\n").expect("Valid config");
    assert_eq!(*config.width(), 5);
    assert_eq!(*config.height(), 3);
    assert_eq!(config.players(), MatchConfig::default().players());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FOUR_BY_FOUR.as_bytes()).unwrap();

    let config = MatchConfig::from_file(file.path()).expect("Valid config file");
    assert_eq!(config.players().len(), 3);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_toml() {
    let err = MatchConfig::from_toml("width = \"wide\"").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_unknown_occupant() {
    let toml = r#"
[[players]]
name = "A"
occupant = "hexagon"
kind = "human"
"#;
    assert!(MatchConfig::from_toml(toml).is_err());
}

#[test]
fn test_seat_count_limits() {
    let one = MatchConfig::new(
        3,
        3,
        3,
        vec![Seat::new("A".to_string(), Occupant::Cross, PlayerKind::Human)],
    );
    let err = one.validate().unwrap_err();
    assert!(err.message.contains("Expected 2 to 4 players, found 1"));

    let five = MatchConfig::new(
        3,
        3,
        3,
        (0..5)
            .map(|i| Seat::new(format!("P{}", i), Occupant::Cross, PlayerKind::Human))
            .collect(),
    );
    assert!(five.validate().is_err());
}

#[test]
fn test_duplicate_occupant() {
    let config = MatchConfig::new(
        3,
        3,
        3,
        vec![
            Seat::new("A".to_string(), Occupant::Cross, PlayerKind::Human),
            Seat::new("B".to_string(), Occupant::Cross, PlayerKind::Minimax),
        ],
    );
    let err = config.validate().unwrap_err();
    assert!(err.message.contains("Occupant X is assigned to more than one player"));
    assert!(err.to_string().starts_with("Config error:"));
}
