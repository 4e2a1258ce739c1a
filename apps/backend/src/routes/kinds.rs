use actix_web::{web, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::kinds::{self, Kind};
use crate::state::app_state::AppState;

/// `GET /kinds`
async fn list_kinds(app_state: web::Data<AppState>) -> Result<web::Json<Vec<Kind>>, AppError> {
    let all = with_txn(&app_state, |txn| {
        Box::pin(async move { kinds::list_kinds(txn).await.map_err(AppError::from) })
    })
    .await?;
    Ok(web::Json(all))
}

/// `POST /kind` with `{"name": ...}`; responds with the new id. Duplicate
/// names are rejected with 400 `Already exists!`.
async fn create_kind(
    app_state: web::Data<AppState>,
    body: ValidatedJson<Kind>,
) -> Result<HttpResponse, AppError> {
    let kind = body.into_inner();
    let id = with_txn(&app_state, |txn| {
        Box::pin(async move { kinds::create_kind(txn, &kind).await.map_err(AppError::from) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(id))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/kinds", web::get().to(list_kinds))
        .route("/kind", web::post().to(create_kind));
}
