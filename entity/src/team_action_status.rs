use sea_orm::entity::prelude::*;

/// A team's submitted result for one timeline. One row per (team, timeline).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team_action_status")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub track_team_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub timeline_id: i32,
    pub result_value: i32,
    pub resolution_link: String,
    pub completed_at: DateTimeUtc,
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::track_team::Entity",
        from = "Column::TrackTeamId",
        to = "super::track_team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TrackTeam,
    #[sea_orm(
        belongs_to = "super::timeline::Entity",
        from = "Column::TimelineId",
        to = "super::timeline::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Timeline,
}

impl Related<super::timeline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timeline.def()
    }
}

impl Related<super::track_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
