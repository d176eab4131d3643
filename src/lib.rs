pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod export;
pub mod render;
pub mod story;
pub mod ui;
