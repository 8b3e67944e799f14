use serde::{Deserialize, Serialize};
use strum::Display;

use crate::models::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SortDir::Asc => "↑",
            SortDir::Desc => "↓",
        }
    }
}

/// How a header activation changes the sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ToggleMode {
    /// Same column flips direction, another column starts ascending.
    #[default]
    FieldAware,
    /// Every activation flips direction, whichever column it targets.
    AlwaysFlip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Field,
    pub dir: SortDir,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(Field::LastName, SortDir::Asc)
    }
}

impl SortSpec {
    pub fn new(field: Field, dir: SortDir) -> Self {
        Self { field, dir }
    }

    pub fn toggle(&mut self, field: Field, mode: ToggleMode) {
        self.dir = match mode {
            ToggleMode::FieldAware if self.field != field => SortDir::Asc,
            _ => self.dir.toggle(),
        };
        self.field = field;
    }

    /// Direction marker for the header cell of `field`, if it is the active one.
    pub fn marker(&self, field: Field) -> Option<&'static str> {
        (self.field == field).then(|| self.dir.symbol())
    }
}
