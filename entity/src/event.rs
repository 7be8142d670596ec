use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub title: String,
    pub description: String,
    pub redirect_link: String,
    /// One of `scheduled`, `in_process`, `completed`.
    pub status: String,
    pub date_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::date::Entity",
        from = "Column::DateId",
        to = "super::date::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Date,
    #[sea_orm(has_many = "super::track::Entity")]
    Track,
    #[sea_orm(has_many = "super::event_location::Entity")]
    EventLocation,
}

impl Related<super::date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Date.def()
    }
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_location::Relation::Location.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_location::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
