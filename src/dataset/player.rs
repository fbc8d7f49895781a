/// One row of the top-scorers dataset.
///
/// `rank` is the stable identity of a card: it keys the stat counters and the render order
/// is the order of the slice the scheduler receives, never `rank` itself.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    /// Unique positive rank.
    pub rank: u32,
    /// Full name.
    pub name: String,
    /// Name printed on the shirt; falls back to the last word of `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_name: Option<String>,
    /// Nationality label shown on the card.
    pub country: String,
    /// Country key used for the flag lookup.
    #[serde(default)]
    pub flag: String,
    /// Stat counted up on the card.
    #[serde(default)]
    pub assists: u32,
    /// First season at the club.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_year: Option<u32>,
    /// Last season at the club.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<u32>,
    /// Height in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<u32>,
    /// Free-form birth date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Club name, also the logo lookup key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Playing position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Player {
    /// Display headline: the jersey name, or the last word of the full name.
    pub fn display_name(&self) -> &str {
        if let Some(j) = self.jersey_name.as_deref()
            && !j.trim().is_empty()
        {
            return j;
        }
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}
