//! Post repository.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::adapters::posts_sea::{self as posts_adapter, PostInsert, PostSummaryRow};
use crate::errors::domain::DomainError;
use crate::repos::kinds;

/// Public view of a post; the image is served separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub text: String,
    pub kind: String,
    pub title: String,
    pub address: String,
    pub upvotes: i32,
    pub created_at: String,
}

/// Everything a client supplies when uploading a post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub latitude: f64,
    pub longitude: f64,
    pub text: String,
    pub image: Vec<u8>,
    pub kind: String,
    pub title: String,
    pub address: String,
}

/// All posts, newest first.
pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<PostSummary>, DomainError> {
    let rows = posts_adapter::list_summaries(conn).await?;
    Ok(rows.into_iter().map(PostSummary::from).collect())
}

/// Persists `post` with zero upvotes and returns its id.
///
/// Run inside a transaction: the kind check and the insert must see the
/// same registry. The `fk_posts_kind` foreign key backs the check, and a
/// violation maps to the same `KindNotAllowed` error.
pub async fn create_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post: NewPost,
) -> Result<i64, DomainError> {
    if !kinds::kind_exists(conn, &post.kind).await? {
        return Err(DomainError::kind_not_allowed(&post.kind));
    }

    let kind = post.kind.clone();
    let image_len = post.image.len();
    let id = posts_adapter::insert(conn, PostInsert::from(post)).await?;

    tracing::info!(post_id = id, kind = %kind, image_bytes = image_len, "post.created");
    Ok(id)
}

/// The stored image bytes, exactly as uploaded.
pub async fn find_post_image<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Vec<u8>, DomainError> {
    posts_adapter::find_image(conn, post_id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(post_id))
}

/// Adds one upvote with a single storage-side increment.
pub async fn upvote_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<(), DomainError> {
    let affected = posts_adapter::increment_upvotes(conn, post_id).await?;
    if affected == 0 {
        return Err(DomainError::post_not_found(post_id));
    }
    tracing::debug!(post_id, "post.upvoted");
    Ok(())
}

fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}

impl From<PostSummaryRow> for PostSummary {
    fn from(row: PostSummaryRow) -> Self {
        Self {
            id: row.id,
            latitude: row.latitude,
            longitude: row.longitude,
            text: row.text,
            kind: row.kind,
            title: row.title,
            address: row.address,
            upvotes: row.upvotes,
            created_at: format_timestamp(row.created_at),
        }
    }
}

impl From<NewPost> for PostInsert {
    fn from(post: NewPost) -> Self {
        Self {
            latitude: post.latitude,
            longitude: post.longitude,
            text: post.text,
            image: post.image,
            kind: post.kind,
            title: post.title,
            address: post.address,
        }
    }
}
