pub mod auth;
pub mod config;
pub mod form;
pub mod keys;
pub mod request;
