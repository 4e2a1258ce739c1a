pub mod kinds;
pub mod posts;
