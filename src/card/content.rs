use crate::{
    dataset::player::Player,
    lookup::{Lookups, PLACEHOLDER_LOGO_URL, or_placeholder},
};

/// Shown instead of a flag when the country has no code.
pub const GLOBE_PLACEHOLDER: &str = "\u{1F30D}";

const MISSING: &str = "N/A";
const DEFAULT_POSITION: &str = "Midfielder";
const AVATAR_POOL: u32 = 70;

/// One labeled value in the card's detail grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DetailRow {
    /// Upper-case label.
    pub label: &'static str,
    /// Display value, `N/A` when the dataset has none.
    pub value: String,
}

/// Everything a render surface needs to print on one card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CardContent {
    /// Rank badge.
    pub rank: u32,
    /// Large display name.
    pub headline: String,
    /// Full name under the headline.
    pub full_name: String,
    /// Nationality label.
    pub country: String,
    /// Flag code, or `None` to draw [`GLOBE_PLACEHOLDER`].
    pub flag_code: Option<String>,
    /// Club crest URL, never empty.
    pub club_logo_url: String,
    /// Portrait URL.
    pub avatar_url: String,
    /// Portrait URL to use when `avatar_url` fails to load.
    pub avatar_fallback_url: String,
    /// Label of the counted stat.
    pub stat_label: &'static str,
    /// Value the stat counter counts up to.
    pub stat_target: u32,
    /// Detail grid, in display order.
    pub details: Vec<DetailRow>,
}

/// Resolve the printable content of `player`'s card.
pub fn card_content(player: &Player, lookups: &Lookups) -> CardContent {
    let flag = lookups.countries.code_for(&player.flag);
    let club = player.team.as_deref().unwrap_or("");
    let logo = or_placeholder(lookups.clubs.logo_url(club), PLACEHOLDER_LOGO_URL);

    let or_missing = |v: Option<String>| v.unwrap_or_else(|| MISSING.to_owned());
    let details = vec![
        DetailRow {
            label: "JOINED",
            value: or_missing(player.joined_year.map(|y| y.to_string())),
        },
        DetailRow {
            label: "EXPIRES",
            value: or_missing(player.end_year.map(|y| y.to_string())),
        },
        DetailRow {
            label: "HEIGHT",
            value: or_missing(player.height_cm.map(|h| format!("{h} cm"))),
        },
        DetailRow {
            label: "BIRTHDAY",
            value: or_missing(non_blank(player.birth_date.as_deref())),
        },
        DetailRow {
            label: "TEAM",
            value: or_missing(non_blank(player.team.as_deref())),
        },
        DetailRow {
            label: "POSITION",
            value: non_blank(player.position.as_deref())
                .unwrap_or_else(|| DEFAULT_POSITION.to_owned()),
        },
    ];

    CardContent {
        rank: player.rank,
        headline: player.display_name().to_owned(),
        full_name: player.name.clone(),
        country: player.country.clone(),
        flag_code: (!flag.is_empty()).then(|| flag.to_owned()),
        club_logo_url: logo.to_owned(),
        avatar_url: avatar_url(player.rank),
        avatar_fallback_url: avatar_fallback_url(&player.name),
        stat_label: "TOTAL ASSISTS",
        stat_target: player.assists,
        details,
    }
}

/// Deterministic stock portrait for `rank`.
pub fn avatar_url(rank: u32) -> String {
    format!("https://i.pravatar.cc/400?img={}", (rank % AVATAR_POOL) + 1)
}

/// Initials avatar generated from the player's name.
pub fn avatar_fallback_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&size=256",
        urlencoding::encode(name)
    )
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

#[cfg(test)]
#[path = "../../tests/unit/card/content.rs"]
mod tests;
