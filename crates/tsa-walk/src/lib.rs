//! Random walk sequence generation.
//!
//! Produces cumulative sums of uniformly drawn, scaled steps starting from 0.
//! The random source is always passed in explicitly, so a seeded generator
//! gives reproducible walks and concurrent callers never share state.
//!
//! ```
//! use tsa_walk::{RandomWalkConfig, StepKind};
//!
//! let walk = RandomWalkConfig::new(27)
//!     .unwrap()
//!     .with_step(StepKind::Sign)
//!     .generate_seeded(42)
//!     .unwrap();
//! assert_eq!(walk.len(), 27);
//! assert_eq!(walk.values()[0], 0.0);
//! ```

mod config;
mod error;
mod walk;

pub use config::{RandomWalkConfig, random_walk};
pub use error::WalkError;
pub use walk::{RandomWalk, StepKind};
