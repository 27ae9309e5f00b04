//! # Utilities Module
//!
//! Integer grid math shared by the path strategies.

pub mod math;

pub use math::*;
