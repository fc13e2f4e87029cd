pub mod auth_service;
pub mod mood_service;
pub mod token_service;
