use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{ImageUpload, PostHeaders, PostId};
use crate::repos::posts::{self, NewPost, PostSummary};
use crate::state::app_state::AppState;

/// `POST /post`: metadata in `x-*` headers, image as the body. Responds
/// with the new post id.
async fn create_post(
    app_state: web::Data<AppState>,
    meta: PostHeaders,
    upload: ImageUpload,
) -> Result<HttpResponse, AppError> {
    let new_post = NewPost {
        latitude: meta.latitude,
        longitude: meta.longitude,
        text: meta.text,
        image: upload.into_inner(),
        kind: meta.kind,
        title: meta.title,
        address: meta.address,
    };

    let id = with_txn(&app_state, |txn| {
        Box::pin(async move { posts::create_post(txn, new_post).await.map_err(AppError::from) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(id))
}

/// `GET /posts`: every post without its image, newest first.
async fn list_posts(
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<PostSummary>>, AppError> {
    let all = with_txn(&app_state, |txn| {
        Box::pin(async move { posts::list_posts(txn).await.map_err(AppError::from) })
    })
    .await?;
    Ok(web::Json(all))
}

/// `GET /posts/{id}/img`: the stored bytes, verbatim.
async fn post_image(
    app_state: web::Data<AppState>,
    post_id: PostId,
) -> Result<HttpResponse, AppError> {
    let PostId(id) = post_id;
    let bytes = with_txn(&app_state, |txn| {
        Box::pin(async move { posts::find_post_image(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "image/jpeg"))
        .body(bytes))
}

/// `POST /posts/{id}/upvote`
async fn upvote_post(
    app_state: web::Data<AppState>,
    post_id: PostId,
) -> Result<HttpResponse, AppError> {
    let PostId(id) = post_id;
    with_txn(&app_state, |txn| {
        Box::pin(async move { posts::upvote_post(txn, id).await.map_err(AppError::from) })
    })
    .await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/post", web::post().to(create_post))
        .route("/posts", web::get().to(list_posts))
        .route("/posts/{id}/img", web::get().to(post_image))
        .route("/posts/{id}/upvote", web::post().to(upvote_post));
}
