//! neo-snake - terminal snake with buffered steering and adaptive speed
//!
//! This library provides:
//! - Core simulation (game module): direction vocabulary, steering queue,
//!   food placement, and the session state machine
//! - TUI rendering (render module) with selectable colour themes (theme)
//! - Keyboard input mapping (input module)
//! - High-score persistence (storage module)
//! - The interactive event loop tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod storage;
pub mod theme;
