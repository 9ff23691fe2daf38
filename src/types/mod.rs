pub mod auth;
pub mod gallery;
pub mod listing;
pub mod settings;
