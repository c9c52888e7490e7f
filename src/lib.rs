//! Render nesting solver results as labeled vector drawings.
//!
//! Each placed piece is moved from its original geometry to the reported
//! placement ([`placement`]), an interior label anchor is searched for
//! ([`inland`]) and the piece id is drawn there with a built-in stroke font
//! ([`font`]).

pub mod config;
pub mod error;
pub mod font;
pub mod geometry;
pub mod inland;
pub mod logging;
pub mod placement;
pub mod problem;
pub mod render;
pub mod results;

pub use error::NestError;
pub use geometry::{Bounds, Point};
