use sea_orm::entity::prelude::*;
use std::fmt;

/// Lifecycle state of a guild event.
///
/// Discriminants are persisted, so existing values must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum EventStatus {
    /// Created but not started. Participant channels can still be edited.
    #[sea_orm(num_value = 0)]
    Created,
    /// Participant tracking is in progress.
    #[sea_orm(num_value = 1)]
    Active,
    /// Tracking is on hold.
    #[sea_orm(num_value = 2)]
    Paused,
    /// Tracking finished, ready for the loot phase.
    #[sea_orm(num_value = 3)]
    Completed,
    #[sea_orm(num_value = 6)]
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum LootStatus {
    #[sea_orm(num_value = 0)]
    Created,
    #[sea_orm(num_value = 1)]
    Open,
    #[sea_orm(num_value = 2)]
    Closed,
    #[sea_orm(num_value = 3)]
    Completed,
    #[sea_orm(num_value = 4)]
    Cancelled,
}

/// Who may claim from a loot pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum LootType {
    /// Only event participants.
    #[sea_orm(num_value = 0)]
    Restricted,
    /// Anyone who can see the pile.
    #[sea_orm(num_value = 1)]
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum LootRollType {
    #[sea_orm(num_value = 0)]
    Roll,
    #[sea_orm(num_value = 1)]
    Bid,
}
