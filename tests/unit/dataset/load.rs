use super::*;

const TWO_PLAYERS: &str = r#"[
  { "rank": 1, "name": "Alessandro Del Piero", "country": "Italy", "flag": "Italy", "assists": 4 },
  { "rank": 2, "name": "Giampiero Boniperti", "country": "Italy", "flag": "Italy" }
]"#;

#[test]
fn strict_load_reverses_by_default() {
    let players = load_players(TWO_PLAYERS.as_bytes(), DatasetOpts::default()).unwrap();
    assert_eq!(players.iter().map(|p| p.rank).collect::<Vec<_>>(), [2, 1]);
    assert_eq!(players[0].assists, 0);

    let players = load_players(TWO_PLAYERS.as_bytes(), DatasetOpts { reverse: false }).unwrap();
    assert_eq!(players[0].rank, 1);
}

#[test]
fn strict_load_reports_dataset_error() {
    let bad = r#"[{ "rank": 0, "name": "x", "country": "y" }]"#;
    let err = load_players(bad.as_bytes(), DatasetOpts::default()).unwrap_err();
    assert!(matches!(err, ScoreReelError::Dataset(_)));
    assert!(err.to_string().contains("$[0].rank"));
}

#[test]
fn lenient_load_falls_back_to_empty() {
    assert!(load_players_or_empty("not json".as_bytes(), DatasetOpts::default()).is_empty());
    assert!(
        load_players_or_empty(r#"[{ "name": "no rank" }]"#.as_bytes(), DatasetOpts::default())
            .is_empty()
    );
    assert_eq!(
        load_players_or_empty(TWO_PLAYERS.as_bytes(), DatasetOpts::default()).len(),
        2
    );
}

#[test]
fn missing_file_falls_back_to_empty() {
    let players =
        load_players_from_path_or_empty("does/not/exist/players.json", DatasetOpts::default());
    assert!(players.is_empty());
}
