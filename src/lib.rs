//! Snake on a fixed grid, with a ghost snake that wanders at random.
//!
//! The simulation (`game`, `snake`, `food`, `score`) has no I/O; `app` and
//! `render` put it on a terminal.

pub mod app;
pub mod config;
pub mod direction;
pub mod food;
pub mod game;
pub mod grid;
pub mod render;
pub mod score;
pub mod snake;
pub mod ticker;
