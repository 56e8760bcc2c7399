//! Coupled order/energy dynamics: explicit integration plus trajectory views.

pub mod app;
pub mod cli;
pub mod config;
pub mod render;
pub mod sim;
pub mod ui;
