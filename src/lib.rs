pub mod config;
pub mod database;
pub mod domain;
pub mod export;
pub mod geocode;
pub mod routing;
pub mod sentiment;
pub mod store;
