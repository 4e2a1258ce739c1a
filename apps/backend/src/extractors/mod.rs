pub mod image_upload;
pub mod post_headers;
pub mod post_id;
pub mod validated_json;

pub use image_upload::ImageUpload;
pub use post_headers::PostHeaders;
pub use post_id::PostId;
pub use validated_json::ValidatedJson;
