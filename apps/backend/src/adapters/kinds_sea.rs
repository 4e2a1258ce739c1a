//! SeaORM adapter for the kind registry.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::kinds;

pub async fn list_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<kinds::Model>, sea_orm::DbErr> {
    kinds::Entity::find()
        .order_by_asc(kinds::Column::Name)
        .all(conn)
        .await
}

/// Inserts and returns the assigned id. A duplicate name surfaces as a
/// unique-constraint `DbErr`.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<i64, sea_orm::DbErr> {
    let active = kinds::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    };
    let res = kinds::Entity::insert(active).exec(conn).await?;
    Ok(res.last_insert_id)
}

pub async fn exists_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<bool, sea_orm::DbErr> {
    let count = kinds::Entity::find()
        .filter(kinds::Column::Name.eq(name))
        .count(conn)
        .await?;
    Ok(count > 0)
}
