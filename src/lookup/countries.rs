use std::collections::BTreeMap;

/// Country name to lowercase ISO 3166-1 alpha-2 code, for circular flag artwork.
///
/// Keys are matched case-insensitively. A two-letter code that is already in the table is
/// accepted as its own key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryCodes {
    by_name: BTreeMap<String, String>,
}

const FOOTBALL_NATIONS: &[(&str, &str)] = &[
    ("Albania", "al"),
    ("Algeria", "dz"),
    ("Argentina", "ar"),
    ("Australia", "au"),
    ("Austria", "at"),
    ("Belgium", "be"),
    ("Bosnia and Herzegovina", "ba"),
    ("Brazil", "br"),
    ("Cameroon", "cm"),
    ("Canada", "ca"),
    ("Chile", "cl"),
    ("Colombia", "co"),
    ("Croatia", "hr"),
    ("Czech Republic", "cz"),
    ("Denmark", "dk"),
    ("Ecuador", "ec"),
    ("England", "gb-eng"),
    ("France", "fr"),
    ("Georgia", "ge"),
    ("Germany", "de"),
    ("Ghana", "gh"),
    ("Greece", "gr"),
    ("Hungary", "hu"),
    ("Ireland", "ie"),
    ("Italy", "it"),
    ("Ivory Coast", "ci"),
    ("Japan", "jp"),
    ("Mexico", "mx"),
    ("Montenegro", "me"),
    ("Morocco", "ma"),
    ("Netherlands", "nl"),
    ("Nigeria", "ng"),
    ("North Macedonia", "mk"),
    ("Norway", "no"),
    ("Paraguay", "py"),
    ("Poland", "pl"),
    ("Portugal", "pt"),
    ("Romania", "ro"),
    ("Scotland", "gb-sct"),
    ("Senegal", "sn"),
    ("Serbia", "rs"),
    ("Slovakia", "sk"),
    ("Slovenia", "si"),
    ("South Korea", "kr"),
    ("Spain", "es"),
    ("Sweden", "se"),
    ("Switzerland", "ch"),
    ("Turkey", "tr"),
    ("Ukraine", "ua"),
    ("United States", "us"),
    ("Uruguay", "uy"),
    ("Wales", "gb-wls"),
];

impl CountryCodes {
    /// Built-in table of common football nations.
    pub fn football_nations() -> Self {
        Self::from_pairs(FOOTBALL_NATIONS.iter().copied())
    }

    /// Build a table from `(name, code)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            by_name: pairs
                .into_iter()
                .map(|(name, code)| (name.to_lowercase(), code.to_lowercase()))
                .collect(),
        }
    }

    /// Flag code for `country`, or `""` when unknown.
    pub fn code_for(&self, country: &str) -> &str {
        let key = country.trim().to_lowercase();
        if let Some(code) = self.by_name.get(&key) {
            return code;
        }
        self.by_name
            .values()
            .find(|code| **code == key)
            .map(String::as_str)
            .unwrap_or("")
    }
}
