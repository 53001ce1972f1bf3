pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod message;
pub mod model;
pub mod utils;
pub mod views;
