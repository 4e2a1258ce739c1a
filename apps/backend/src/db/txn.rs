use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::trace_ctx;

/// Boxed future borrowing the transaction.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'a>>;

/// Run `f` inside a fresh transaction.
///
/// Commits when `f` returns `Ok`; on `Err` rolls back (best effort) and
/// returns the original error.
///
/// ```ignore
/// let id = with_txn(&state, |txn| Box::pin(async move {
///     kinds::create_kind(txn, &kind).await.map_err(AppError::from)
/// }))
/// .await?;
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(
                    trace_id = %trace_ctx::trace_id(),
                    error = %rollback_err,
                    "transaction rollback failed"
                );
            }
            Err(err)
        }
    }
}
