pub mod app;
pub mod config;
pub mod driver;
pub mod input;
pub mod observer;
pub mod render;
pub mod views;
