//! Chroma: a five-role palette designer with AI-assisted generation.
//!
//! The terminal client lives in [`app`] and [`ui`]; the HTTP relay in [`web`].
//! Both share the generation pipeline: [`backend`] fetches raw model text and
//! [`services::normalize`] turns it into a [`palette::ValidatedPalette`].

pub mod actions;
pub mod app;
pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod palette;
pub mod services;
pub mod state;
pub mod ui;
pub mod web;

pub use error::PaletteError;
pub use palette::{ColorRole, Palette, ValidatedPalette};
