//! Lifecycle status shared by events and tracks.

use std::{fmt, str::FromStr};

use sea_orm::DbErr;

use crate::model::status::LifecycleStatusDto;

/// Lifecycle state of an event or track.
///
/// Persisted as the strings `scheduled`, `in_process` and `completed`. Rows move
/// forward only: the scheduler promotes `Scheduled` to `InProcess` once the date window
/// opens and anything not yet `Completed` to `Completed` once it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStatus {
    Scheduled,
    InProcess,
    Completed,
}

impl LifecycleStatus {
    /// Returns the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProcess => "in_process",
            Self::Completed => "completed",
        }
    }

    /// Parses a stored status at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LifecycleStatus)` - Known status value
    /// - `Err(DbErr::Custom)` - Column holds a value outside the lifecycle
    pub fn from_column(value: &str) -> Result<Self, DbErr> {
        value
            .parse()
            .map_err(|e: UnknownStatus| DbErr::Custom(e.to_string()))
    }

    pub fn into_dto(self) -> LifecycleStatusDto {
        match self {
            Self::Scheduled => LifecycleStatusDto::Scheduled,
            Self::InProcess => LifecycleStatusDto::InProcess,
            Self::Completed => LifecycleStatusDto::Completed,
        }
    }

    pub fn from_dto(dto: LifecycleStatusDto) -> Self {
        match dto {
            LifecycleStatusDto::Scheduled => Self::Scheduled,
            LifecycleStatusDto::InProcess => Self::InProcess,
            LifecycleStatusDto::Completed => Self::Completed,
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string that is not part of the lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown lifecycle status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for LifecycleStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_process" => Ok(Self::InProcess),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_persisted_values() {
        for status in [
            LifecycleStatus::Scheduled,
            LifecycleStatus::InProcess,
            LifecycleStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<LifecycleStatus>(), Ok(status));
        }
    }

    #[test]
    fn rejects_unknown_column_value() {
        let result = LifecycleStatus::from_column("archived");

        assert!(matches!(result, Err(DbErr::Custom(_))));
    }
}
