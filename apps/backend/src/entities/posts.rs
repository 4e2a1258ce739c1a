use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    /// Raw upload, stored inline
    pub image: Vec<u8>,
    pub kind: String,
    pub title: String,
    pub address: String,
    pub upvotes: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kinds::Entity",
        from = "Column::Kind",
        to = "super::kinds::Column::Name",
        on_delete = "Restrict"
    )]
    Kinds,
}

impl Related<super::kinds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kinds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
