//! # Config Crate
//!
//! Centralized configuration constants for the globe grid pipeline.
//! All magic numbers and tunable parameters are defined here so the parser,
//! the mesh builder and the WASM boundary agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobeConfig, MIN_BOX_HEIGHT, SPHERE_RADIUS};
//!
//! let config = GlobeConfig::default();
//! assert_eq!(config.radius, SPHERE_RADIUS);
//! assert_eq!(config.min_height, MIN_BOX_HEIGHT);
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: `GlobeConfig` rejects values that would produce inverted
//!   or degenerate boxes

pub mod constants;
