use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub ip_address: String,
}

/// Column selector, in display order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Id,
    FirstName,
    #[default]
    LastName,
    Email,
    Gender,
    IpAddress,
}

impl Field {
    /// Position of this field in the header.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        use Field::*;
        [Id, FirstName, LastName, Email, Gender, IpAddress].get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Gender => "Gender",
            Field::IpAddress => "IP address",
        }
    }
}
