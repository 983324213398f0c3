//! Terminal UI: a board view with a movable cursor that drives the engine
//! and follows it through the engine's observers.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
