use std::fmt;
use std::str::FromStr;

use super::ids::OptionId;
use crate::error::CoreError;

/// Separator used when a multiselect answer is flattened into a record's
/// `text` field.
pub const SEPARATOR: char = ',';

/// The options picked for a multiselect answer.
///
/// Keeps the order in which options were picked and never holds the same
/// option twice. Records carry it flattened as `"3,1,7"`; see [`Selection::joined`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<OptionId>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: OptionId) -> bool {
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn ids(&self) -> &[OptionId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: OptionId) -> bool {
        self.0.contains(&id)
    }

    /// The flattened record form, e.g. `"1,2"`.
    pub fn joined(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<OptionId> for Selection {
    fn from_iter<I: IntoIterator<Item = OptionId>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// Parses the flattened form. Blank segments are skipped, so `""` is the
/// empty selection; any other segment must be an option id.
impl FromStr for Selection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .parse::<OptionId>()
                    .map_err(|_| CoreError::InvalidSelection(s.to_string()))
            })
            .collect()
    }
}
