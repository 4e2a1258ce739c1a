//! SeaORM adapter for posts.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set, UpdateMany,
};
use time::OffsetDateTime;

use crate::entities::posts;

/// Every column except `image`.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct PostSummaryRow {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub text: String,
    pub kind: String,
    pub title: String,
    pub address: String,
    pub upvotes: i32,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct PostInsert {
    pub latitude: f64,
    pub longitude: f64,
    pub text: String,
    pub image: Vec<u8>,
    pub kind: String,
    pub title: String,
    pub address: String,
}

/// Newest first. Image bytes are never selected.
pub async fn list_summaries<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<PostSummaryRow>, sea_orm::DbErr> {
    posts::Entity::find()
        .select_only()
        .columns([
            posts::Column::Id,
            posts::Column::Latitude,
            posts::Column::Longitude,
            posts::Column::Text,
            posts::Column::Kind,
            posts::Column::Title,
            posts::Column::Address,
            posts::Column::Upvotes,
            posts::Column::CreatedAt,
        ])
        .order_by_desc(posts::Column::Id)
        .into_model::<PostSummaryRow>()
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post: PostInsert,
) -> Result<i64, sea_orm::DbErr> {
    let active = posts::ActiveModel {
        id: NotSet,
        latitude: Set(post.latitude),
        longitude: Set(post.longitude),
        text: Set(post.text),
        image: Set(post.image),
        kind: Set(post.kind),
        title: Set(post.title),
        address: Set(post.address),
        upvotes: Set(0),
        created_at: Set(OffsetDateTime::now_utc()),
    };
    let res = posts::Entity::insert(active).exec(conn).await?;
    Ok(res.last_insert_id)
}

pub async fn find_image<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<Vec<u8>>, sea_orm::DbErr> {
    posts::Entity::find_by_id(post_id)
        .select_only()
        .column(posts::Column::Image)
        .into_tuple::<Vec<u8>>()
        .one(conn)
        .await
}

/// `UPDATE posts SET upvotes = upvotes + 1 WHERE id = ?`
fn increment_upvotes_stmt(post_id: i64) -> UpdateMany<posts::Entity> {
    posts::Entity::update_many()
        .col_expr(
            posts::Column::Upvotes,
            Expr::col(posts::Column::Upvotes).add(1),
        )
        .filter(posts::Column::Id.eq(post_id))
}

/// Increments in a single statement; returns rows affected.
pub async fn increment_upvotes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = increment_upvotes_stmt(post_id).exec(conn).await?;
    Ok(res.rows_affected)
}
