//! Random walk output and the step generator behind it.

use rand::Rng;

/// How each raw uniform draw in `[-1, 1)` becomes a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepKind {
    /// Use the draw as-is: real-valued steps in `[-1, 1)`.
    #[default]
    Real,
    /// Keep only the sign of the draw: steps of exactly `-1` or `+1`.
    /// A draw of `0.0` counts as positive.
    Sign,
}

impl StepKind {
    fn apply(self, draw: f64) -> f64 {
        match self {
            Self::Real => draw,
            Self::Sign => 1.0_f64.copysign(draw),
        }
    }
}

/// A generated random walk.
///
/// Serialized as a flat list of values or as a list of `[timestep, value]`
/// pairs, depending on the variant.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RandomWalk {
    /// Cumulative values only.
    Values(Vec<f64>),
    /// `(timestep, cumulative value)` pairs, timestep starting at 0.
    Indexed(Vec<(usize, f64)>),
}

impl RandomWalk {
    /// Return the number of points, including the initial zero.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(v) => v.len(),
            Self::Indexed(v) => v.len(),
        }
    }

    /// Return true if the walk has no points. Never the case for a walk
    /// produced by [`RandomWalkConfig::generate`](crate::RandomWalkConfig::generate).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the cumulative values regardless of variant.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::Values(v) => v.clone(),
            Self::Indexed(v) => v.iter().map(|&(_, value)| value).collect(),
        }
    }

    /// Consume the walk and return its cumulative values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        match self {
            Self::Values(v) => v,
            Self::Indexed(v) => v.into_iter().map(|(_, value)| value).collect(),
        }
    }

    /// Return `(timestep, value)` pairs regardless of variant.
    #[must_use]
    pub fn indexed(&self) -> Vec<(usize, f64)> {
        match self {
            Self::Values(v) => v.iter().copied().enumerate().collect(),
            Self::Indexed(v) => v.clone(),
        }
    }
}

/// Cumulative sums of `length - 1` scaled steps, starting from 0.
///
/// One uniform draw is consumed per step whatever the [`StepKind`], so the
/// same seed yields walks of both kinds that share their step signs.
pub(crate) fn cumulative_steps<R: Rng + ?Sized>(
    length: usize,
    scale: f64,
    step: StepKind,
    rng: &mut R,
) -> Vec<f64> {
    let mut values = Vec::with_capacity(length);
    let mut current = 0.0;
    values.push(current);

    for _ in 1..length {
        let draw: f64 = rng.gen_range(-1.0..1.0);
        current += step.apply(draw) * scale;
        values.push(current);
    }

    values
}
