//! Track winner and standings domain models.

use crate::model::track_winner::{CreateTrackWinnerDto, TeamResultDto, TrackWinnerDto};

/// Default page size for standings and generated winners.
pub const DEFAULT_RATING_LIMIT: u64 = 100;

/// A team's final standing on a track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackWinner {
    pub track_id: i32,
    pub track_team_id: i32,
    /// 0-based rank.
    pub place: i32,
    pub is_awardee: bool,
}

impl TrackWinner {
    pub fn from_entity(entity: entity::track_winner::Model) -> Self {
        Self {
            track_id: entity.track_id,
            track_team_id: entity.track_team_id,
            place: entity.place,
            is_awardee: entity.is_awardee,
        }
    }

    pub fn into_dto(self) -> TrackWinnerDto {
        TrackWinnerDto {
            track_id: self.track_id,
            track_team_id: self.track_team_id,
            place: self.place,
            is_awardee: self.is_awardee,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTrackWinnerParams {
    pub track_id: i32,
    pub track_team_id: i32,
    pub place: i32,
    pub is_awardee: bool,
}

impl CreateTrackWinnerParams {
    pub fn from_dto(dto: CreateTrackWinnerDto) -> Self {
        Self {
            track_id: dto.track_id,
            track_team_id: dto.track_team_id,
            place: dto.place,
            is_awardee: dto.is_awardee,
        }
    }
}

/// Aggregated score of one team on a track. `team_id` is the `track_team_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamResult {
    pub team_id: i32,
    pub total_value: i64,
}

impl TeamResult {
    pub fn into_dto(self) -> TeamResultDto {
        TeamResultDto {
            team_id: self.team_id,
            total_value: self.total_value,
        }
    }
}

/// Orders standings by total descending, breaking ties by team id ascending.
pub fn rank_results(results: &mut [TeamResult]) {
    results.sort_by(|a, b| {
        b.total_value
            .cmp(&a.total_value)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
}
