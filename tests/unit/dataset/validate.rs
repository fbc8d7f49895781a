use super::*;

fn player(rank: u32, name: &str) -> Player {
    Player {
        rank,
        name: name.to_owned(),
        jersey_name: None,
        country: "Italy".to_owned(),
        flag: "Italy".to_owned(),
        assists: 3,
        joined_year: Some(1993),
        end_year: Some(2012),
        height_cm: Some(174),
        birth_date: None,
        team: Some("Juventus FC".to_owned()),
        position: None,
    }
}

#[test]
fn accepts_well_formed_rows() {
    validate_players(&[player(1, "Alessandro Del Piero"), player(2, "Giampiero Boniperti")])
        .unwrap();
    validate_players(&[]).unwrap();
}

#[test]
fn collects_every_violation_with_paths() {
    let mut bad = player(0, " ");
    bad.end_year = Some(1980);
    bad.height_cm = Some(40);
    let dup_a = player(7, "A");
    let dup_b = player(7, "B");

    let errs = validate_players(&[bad, dup_a, dup_b]).unwrap_err();
    let text = errs.to_string();
    assert!(text.contains("$[0].rank: rank must be > 0"), "{text}");
    assert!(text.contains("$[0].name"), "{text}");
    assert!(text.contains("$[0].end_year"), "{text}");
    assert!(text.contains("$[0].height_cm"), "{text}");
    assert!(text.contains("$[2].rank: rank 7 already used by record 1"), "{text}");
    assert_eq!(errs.errors.len(), 5);
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn root_error_has_no_path_prefix() {
    let e = SchemaError::at(&[], "boom");
    assert_eq!(e.to_string(), "boom");
}

#[test]
fn schema_errors_are_std_errors() {
    let errs = SchemaErrors {
        errors: vec![SchemaError::at(
            &[SchemaPathElem::Index(3), SchemaPathElem::Field("team")],
            "unknown",
        )],
    };
    let as_dyn: &dyn std::error::Error = &errs;
    assert_eq!(as_dyn.to_string(), "$[3].team: unknown");
}
