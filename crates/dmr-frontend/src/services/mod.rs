//! # Services Module
//!
//! Browser plumbing behind the page animations: viewport observation
//! and the repaint-cycle count-up driver.

pub mod count_up;
pub mod viewport;

pub use count_up::*;
pub use viewport::*;
