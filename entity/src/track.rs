use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "track")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_score_based: bool,
    /// One of `scheduled`, `in_process`, `completed`.
    pub status: String,
    pub event_id: i32,
    pub date_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::date::Entity",
        from = "Column::DateId",
        to = "super::date::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Date,
    #[sea_orm(has_many = "super::timeline::Entity")]
    Timeline,
    #[sea_orm(has_many = "super::track_team::Entity")]
    TrackTeam,
    #[sea_orm(has_many = "super::track_winner::Entity")]
    TrackWinner,
    #[sea_orm(has_many = "super::location_track::Entity")]
    LocationTrack,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Date.def()
    }
}

impl Related<super::timeline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timeline.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        super::location_track::Relation::Location.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::location_track::Relation::Track.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
