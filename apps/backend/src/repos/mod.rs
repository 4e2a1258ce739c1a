//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod kinds;
pub mod posts;
