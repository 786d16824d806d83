pub mod app;
pub mod render;
pub mod views;
