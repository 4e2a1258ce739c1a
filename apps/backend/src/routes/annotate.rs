use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::ImageUpload;
use crate::services::annotation;

/// `POST /annotate`: the upload must be a decodable image; the response is
/// a fixed placeholder until annotation exists.
async fn annotate(upload: ImageUpload) -> Result<HttpResponse, AppError> {
    let text = annotation::annotate(upload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(text))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/annotate", web::post().to(annotate));
}
