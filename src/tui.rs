//! Terminal front end. Renders a [`crate::engine::VideoPokerEngine`] and maps
//! key presses onto it; no game rules live here.

pub mod app;
pub mod controller;
mod ui;
