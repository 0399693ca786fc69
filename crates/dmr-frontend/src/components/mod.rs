//! # UI Components Module
//!
//! Leptos components for the single-page marketing site.

pub mod export_map;
pub mod landing;
pub mod navbar;
pub mod products;

pub use export_map::*;
pub use landing::*;
pub use navbar::*;
pub use products::*;
