//! SeaORM adapters. Raw queries only; errors stay `sea_orm::DbErr`.

pub mod kinds_sea;
pub mod posts_sea;
