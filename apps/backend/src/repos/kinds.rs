//! Kind registry.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::kinds_sea as kinds_adapter;
use crate::errors::domain::DomainError;

/// A registered category, addressed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    pub name: String,
}

/// All kinds, ordered by name.
pub async fn list_kinds<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Kind>, DomainError> {
    let models = kinds_adapter::list_by_name(conn).await?;
    Ok(models.into_iter().map(Kind::from).collect())
}

/// Registers `kind` and returns its id. Duplicate names are a
/// `DomainError::Conflict(ConflictKind::KindName, _)`.
pub async fn create_kind<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    kind: &Kind,
) -> Result<i64, DomainError> {
    let id = kinds_adapter::insert(conn, &kind.name).await?;
    tracing::info!(kind_id = id, kind = %kind.name, "kind.created");
    Ok(id)
}

pub async fn kind_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<bool, DomainError> {
    Ok(kinds_adapter::exists_by_name(conn, name).await?)
}

impl From<crate::entities::kinds::Model> for Kind {
    fn from(model: crate::entities::kinds::Model) -> Self {
        Self { name: model.name }
    }
}
