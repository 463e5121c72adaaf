/// State management module
///
/// This module handles all UI state, including:
/// - Shared data structures (data.rs)
/// - The upload widget state machine (widget.rs)
/// - The async work behind each widget effect (effect.rs)

pub mod data;
pub mod effect;
pub mod widget;
