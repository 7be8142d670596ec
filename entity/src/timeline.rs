use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timeline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub deadline: DateTimeUtc,
    pub is_blocking: bool,
    pub is_scoring: bool,
    pub status: String,
    pub track_id: i32,
    pub timeline_status_id: i32,
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
        belongs_to = "super::timeline_status::Entity",
        from = "Column::TimelineStatusId",
        to = "super::timeline_status::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TimelineStatus,
    #[sea_orm(has_many = "super::team_action_status::Entity")]
    TeamActionStatus,
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl Related<super::timeline_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimelineStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
