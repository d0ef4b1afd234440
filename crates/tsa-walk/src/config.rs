//! Configuration builder for random walk generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

use crate::error::WalkError;
use crate::walk::{RandomWalk, StepKind, cumulative_steps};

/// Configuration for a random walk.
///
/// Construct via [`RandomWalkConfig::new`] (or [`Default`]), then chain
/// `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter     | Default          |
/// |---------------|------------------|
/// | `length`      | 10               |
/// | `scale`       | 1.0              |
/// | `step`        | [`StepKind::Real`] |
/// | `values_only` | true             |
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalkConfig {
    pub(crate) length: usize,
    pub(crate) scale: f64,
    pub(crate) step: StepKind,
    pub(crate) values_only: bool,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            length: 10,
            scale: 1.0,
            step: StepKind::Real,
            values_only: true,
        }
    }
}

impl RandomWalkConfig {
    /// Create a configuration producing `length` points, the initial zero included.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WalkError::InvalidLength`] | `length` is zero |
    pub fn new(length: usize) -> Result<Self, WalkError> {
        if length == 0 {
            return Err(WalkError::InvalidLength { length });
        }
        Ok(Self {
            length,
            ..Self::default()
        })
    }

    /// Set the factor every step is multiplied by.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set how raw draws become steps.
    #[must_use]
    pub fn with_step(mut self, step: StepKind) -> Self {
        self.step = step;
        self
    }

    /// Choose between [`RandomWalk::Values`] (`true`) and
    /// [`RandomWalk::Indexed`] (`false`) output.
    #[must_use]
    pub fn with_values_only(mut self, values_only: bool) -> Self {
        self.values_only = values_only;
        self
    }

    /// Return the number of points produced.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Return the step scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Return the step kind.
    #[must_use]
    pub fn step(&self) -> StepKind {
        self.step
    }

    /// Return whether output omits timesteps.
    #[must_use]
    pub fn values_only(&self) -> bool {
        self.values_only
    }

    /// Generate a walk, drawing one uniform value per step from `rng`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`WalkError::InvalidScale`] | `scale` is NaN, infinite, zero, or negative |
    #[instrument(skip_all, fields(length = self.length, scale = self.scale))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RandomWalk, WalkError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(WalkError::InvalidScale { scale: self.scale });
        }

        let values = cumulative_steps(self.length, self.scale, self.step, rng);
        debug!(step = ?self.step, last = values[values.len() - 1], "random walk generated");

        Ok(if self.values_only {
            RandomWalk::Values(values)
        } else {
            RandomWalk::Indexed(values.into_iter().enumerate().collect())
        })
    }

    /// Generate a reproducible walk from a [`ChaCha8Rng`] seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_seeded(&self, seed: u64) -> Result<RandomWalk, WalkError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

/// Generate a walk with the default configuration: ten real-valued points
/// at unit scale, values only.
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R) -> RandomWalk {
    let config = RandomWalkConfig::default();
    RandomWalk::Values(cumulative_steps(config.length, config.scale, config.step, rng))
}
