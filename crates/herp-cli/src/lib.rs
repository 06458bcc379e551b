//! Library components of the `herp` checklist viewer.

pub mod config;
pub mod logging;
pub mod render;
