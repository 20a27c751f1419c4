//! folio: a single-page portfolio rendered as an interactive terminal document.

pub mod anim;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod export;
pub mod logging;
pub mod tui;
pub mod types;
pub mod viewport;
