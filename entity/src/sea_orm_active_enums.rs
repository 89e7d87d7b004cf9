use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tri-state activity flag shared by clubs, organizers, athletes and coaches.
///
/// `Unknown` is the value stored when a record is created without an explicit
/// choice; requests may only ever set `True` or `False`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ActiveStatus {
    #[default]
    #[sea_orm(string_value = "UNKNOWN")]
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[sea_orm(string_value = "TRUE")]
    #[serde(rename = "TRUE")]
    True,
    #[sea_orm(string_value = "FALSE")]
    #[serde(rename = "FALSE")]
    False,
}

impl ActiveStatus {
    /// Parses a request value, accepting only the two explicit states.
    pub fn from_request(value: &str) -> Option<Self> {
        match value {
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Gender {
    #[sea_orm(string_value = "MALE")]
    #[serde(rename = "MALE")]
    Male,
    #[sea_orm(string_value = "FEMALE")]
    #[serde(rename = "FEMALE")]
    Female,
}

impl Gender {
    pub fn from_request(value: &str) -> Option<Self> {
        match value {
            "MALE" => Some(Self::Male),
            "FEMALE" => Some(Self::Female),
            _ => None,
        }
    }
}
