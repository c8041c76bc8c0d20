//! Catalog record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender attribute of a user, used only to pick a display style.
///
/// Only the exact strings `"male"` and `"female"` get their own variant;
/// anything else (including `"m"` or `"Male"`) is kept verbatim so the
/// value round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    /// Any other value, kept verbatim
    Other(String),
}

impl Gender {
    #[must_use]
    pub const fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other(value),
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other(other) => write!(f, "{other}"),
        }
    }
}

/// A product owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub gender: Gender,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
        }
    }
}

/// A product category with its display icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// A catalog row. `category` and `user` are names, not ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub user: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            user: user.into(),
        }
    }
}
