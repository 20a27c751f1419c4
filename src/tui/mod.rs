//! TUI module for the interactive document viewer.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (NavigationState, Action, Transition)
//! - `update`: Pure transitions
//! - `layout`: Screen geometry and mouse hit-testing
//! - `view`: Pure rendering
//! - `run`: Effects (terminal, event loop, viewport and animator)
//! - `theme`: Colors, icons and styles

pub mod layout;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
