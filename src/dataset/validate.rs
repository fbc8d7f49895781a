use std::collections::HashMap;
use std::fmt;

use crate::dataset::player::Player;

/// One step of a JSON path into the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPathElem {
    /// Object field.
    Field(&'static str),
    /// Array index.
    Index(usize),
}

impl fmt::Display for SchemaPathElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, ".{name}"),
            Self::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// A single schema violation, displayed as `$[i].field: message`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}{}", Location(.path), .message)]
pub struct SchemaError {
    /// Location of the offending value; empty for the document root.
    pub path: Vec<SchemaPathElem>,
    /// Human-readable description.
    pub message: String,
}

impl SchemaError {
    pub(crate) fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

struct Location<'a>(&'a [SchemaPathElem]);

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str("$")?;
        for elem in self.0 {
            write!(f, "{elem}")?;
        }
        f.write_str(": ")
    }
}

/// All violations found in one validation pass, one per line.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", Lines(.errors))]
pub struct SchemaErrors {
    /// Violations in dataset order.
    pub errors: Vec<SchemaError>,
}

struct Lines<'a>(&'a [SchemaError]);

impl fmt::Display for Lines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for e in self.0 {
            write!(f, "{sep}{e}")?;
            sep = "\n";
        }
        Ok(())
    }
}

/// Check every record; returns all violations rather than the first one.
pub fn validate_players(players: &[Player]) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();
    let mut first_index_by_rank = HashMap::<u32, usize>::new();

    for (i, p) in players.iter().enumerate() {
        let at = |field: &'static str| [SchemaPathElem::Index(i), SchemaPathElem::Field(field)];

        if p.rank == 0 {
            errors.push(SchemaError::at(&at("rank"), "rank must be > 0"));
        } else if let Some(first) = first_index_by_rank.insert(p.rank, i) {
            errors.push(SchemaError::at(
                &at("rank"),
                format!("rank {} already used by record {first}", p.rank),
            ));
            first_index_by_rank.insert(p.rank, first);
        }

        if p.name.trim().is_empty() {
            errors.push(SchemaError::at(&at("name"), "name must be non-empty"));
        }
        if p.country.trim().is_empty() {
            errors.push(SchemaError::at(&at("country"), "country must be non-empty"));
        }
        if let (Some(joined), Some(end)) = (p.joined_year, p.end_year)
            && end < joined
        {
            errors.push(SchemaError::at(
                &at("end_year"),
                format!("end_year {end} is before joined_year {joined}"),
            ));
        }
        if let Some(h) = p.height_cm
            && !(100..=250).contains(&h)
        {
            errors.push(SchemaError::at(
                &at("height_cm"),
                format!("height_cm {h} is outside 100..=250"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/validate.rs"]
mod tests;
