//! # gridlock-core
//!
//! Primitives for a gesture-password grid: node layout, hit testing, the
//! password string codec, and a pluggable clock. This crate is pure state
//! and math — no rendering, no event loop. `gridlock-widget` builds the
//! gesture state machine on top of it.
//!
//! ```rust
//! use gridlock_core::*;
//!
//! let grid = GridModel::new(GridConfig::default(), Rect::new(0.0, 0.0, 320.0, 320.0));
//! let center = grid.node_center(5).unwrap();
//! assert_eq!(hit::node_at(&grid, center, &[]), Some(5));
//! assert_eq!(codec::encode(&[1, 2, 3, 6, 9]), "1,2,3,6,9");
//! ```

pub mod clock;
pub mod codec;
pub mod color;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod input;

pub use clock::*;
pub use color::*;
pub use geometry::*;
pub use grid::*;
pub use input::*;
