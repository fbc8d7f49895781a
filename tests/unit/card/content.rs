use super::*;

fn del_piero() -> Player {
    Player {
        rank: 1,
        name: "Alessandro Del Piero".to_owned(),
        jersey_name: None,
        country: "Italy".to_owned(),
        flag: "Italy".to_owned(),
        assists: 12,
        joined_year: Some(1993),
        end_year: Some(2012),
        height_cm: Some(174),
        birth_date: Some("1974-11-09".to_owned()),
        team: Some("Juventus FC".to_owned()),
        position: Some("Forward".to_owned()),
    }
}

#[test]
fn full_record() {
    let c = card_content(&del_piero(), &Lookups::serie_a());
    assert_eq!(c.headline, "Piero");
    assert_eq!(c.flag_code.as_deref(), Some("it"));
    assert_ne!(c.club_logo_url, PLACEHOLDER_LOGO_URL);
    assert_eq!(c.avatar_url, "https://i.pravatar.cc/400?img=2");
    assert!(c.avatar_fallback_url.contains("name=Alessandro%20Del%20Piero"));
    assert_eq!(c.stat_target, 12);
    assert_eq!(c.details[2].value, "174 cm");
    assert_eq!(c.details[5].value, "Forward");
}

#[test]
fn jersey_name_wins() {
    let mut p = del_piero();
    p.jersey_name = Some("Del Piero".to_owned());
    assert_eq!(card_content(&p, &Lookups::serie_a()).headline, "Del Piero");
}

#[test]
fn sparse_record_uses_fallbacks() {
    let mut p = del_piero();
    p.flag = "Atlantis".to_owned();
    p.team = Some("Unknown United".to_owned());
    p.joined_year = None;
    p.height_cm = None;
    p.birth_date = Some("  ".to_owned());
    p.position = None;

    let c = card_content(&p, &Lookups::serie_a());
    assert_eq!(c.flag_code, None);
    assert_eq!(c.club_logo_url, PLACEHOLDER_LOGO_URL);
    assert_eq!(c.details[0].value, "N/A");
    assert_eq!(c.details[2].value, "N/A");
    assert_eq!(c.details[3].value, "N/A");
    assert_eq!(c.details[4].value, "Unknown United");
    assert_eq!(c.details[5].value, "Midfielder");
}

#[test]
fn avatar_pool_wraps() {
    assert_eq!(avatar_url(69), "https://i.pravatar.cc/400?img=70");
    assert_eq!(avatar_url(70), "https://i.pravatar.cc/400?img=1");
}
