//! Static key to URL/code tables used when building card content.
//!
//! Lookups never fail: unknown keys return an empty string and callers substitute a placeholder
//! with [`or_placeholder`].

pub(crate) mod clubs;
pub(crate) mod countries;

use clubs::ClubLogos;
use countries::CountryCodes;

/// Placeholder crest used when a club has no known logo.
pub const PLACEHOLDER_LOGO_URL: &str =
    "https://ui-avatars.com/api/?name=FC&background=cccccc&size=256";

/// All lookup tables, built once per composition and passed by reference.
#[derive(Clone, Debug, Default)]
pub struct Lookups {
    /// Club crests.
    pub clubs: ClubLogos,
    /// Country flag codes.
    pub countries: CountryCodes,
}

impl Lookups {
    /// Serie A crests plus the built-in country table.
    pub fn serie_a() -> Self {
        Self {
            clubs: ClubLogos::serie_a(),
            countries: CountryCodes::football_nations(),
        }
    }
}

/// `value`, or `placeholder` when `value` is empty.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

#[cfg(test)]
#[path = "../../tests/unit/lookup/lookups.rs"]
mod tests;
