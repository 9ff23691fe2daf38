pub mod auth;
pub mod gallery;
pub mod listings;
pub mod settings;
pub mod upload;
