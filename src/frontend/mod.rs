pub mod api;
pub mod app;
pub mod components;
pub mod markdown;
pub mod pages;
pub mod session;
pub mod store;
pub mod utils;
