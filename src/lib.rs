//! # Link Four
//!
//! A two-player connection game on a 13x13 grid. Players alternate placing
//! markers; after the opening move every marker must touch an occupied cell
//! orthogonally, and four in a row along a row, column, or diagonal wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, geometry, rules, observers, engine
//! - [`ui`] — Terminal UI: board view and game-over modal
//! - [`headless`] — Replay a move list to a text transcript
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod headless;
pub mod ui;
