use sea_orm::entity::prelude::*;

/// Final standing of a team within a track. `place` is 0-based.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "track_winner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub track_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub track_team_id: i32,
    pub place: i32,
    pub is_awardee: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::track::Entity",
        from = "Column::TrackId",
        to = "super::track::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Track,
    #[sea_orm(
        belongs_to = "super::track_team::Entity",
        from = "Column::TrackTeamId",
        to = "super::track_team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TrackTeam,
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl Related<super::track_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
