use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{Error, Grid, Result};

////////////////////////////////////////////////////////////////////////////////

/// z-score of a two-sided 95% confidence interval under a normal approximation.
pub const CONFIDENCE_95: f64 = 1.96;

/// Opens uniformly random sites of a fresh `n`-by-`n` grid until it percolates
/// and returns the fraction of open sites at that moment.
///
/// Each candidate draws a row and then a column from `rng`; picks that land on
/// an already open site are discarded and redrawn.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let opened = open_until_percolates(n, rng)?;
    Ok(opened as f64 / (n * n) as f64)
}

/// Returns the number of sites open when the grid first percolates.
fn open_until_percolates<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<usize> {
    let mut grid = Grid::new(n)?;
    while !grid.percolates() {
        let (row, col) = loop {
            let row = rng.gen_range(0..n) + 1;
            let col = rng.gen_range(0..n) + 1;
            if !grid.is_open(row, col)? {
                break (row, col);
            }
        };
        grid.open(row, col)?;
    }
    Ok(grid.number_of_open_sites())
}

fn record_trial<R: Rng + ?Sized>(n: usize, trial: usize, rng: &mut R) -> Result<f64> {
    let opened = open_until_percolates(n, rng)?;
    let threshold = opened as f64 / (n * n) as f64;
    debug!("trial {trial}: {opened} of {} sites open, threshold {threshold}", n * n);
    Ok(threshold)
}

////////////////////////////////////////////////////////////////////////////////

/// Monte Carlo estimate of the percolation threshold.
///
/// All trials run at construction. Statistics are recomputed from the stored
/// thresholds on every call, so they can be queried in any order.
#[derive(Debug, Clone)]
pub struct ThresholdStats {
    dimension: usize,
    thresholds: Vec<f64>,
}

impl ThresholdStats {
    /// Performs `trials` independent experiments on an `n`-by-`n` grid
    /// using the thread-local RNG.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_rng(n, trials, &mut rand::thread_rng())
    }

    /// Same as [`ThresholdStats::new`], drawing sites from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        validate(n, trials)?;

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            thresholds.push(record_trial(n, trial, rng)?);
        }
        Ok(Self::finish(n, thresholds))
    }

    /// Runs trials concurrently, trial `i` drawing from a `StdRng` seeded
    /// with `seed + i`. The result does not depend on thread scheduling.
    pub fn with_seed_parallel(n: usize, trials: usize, seed: u64) -> Result<Self> {
        validate(n, trials)?;

        let thresholds = (0..trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
                record_trial(n, trial, &mut rng)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::finish(n, thresholds))
    }

    fn finish(dimension: usize, thresholds: Vec<f64>) -> Self {
        let stats = Self {
            dimension,
            thresholds,
        };
        info!(
            "{} trials on {}x{} grid, mean threshold {}",
            stats.trials(),
            dimension,
            dimension,
            stats.mean()
        );
        stats
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial thresholds in the order the trials ran.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of percolation threshold.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials() as f64
    }

    /// Sample standard deviation of percolation threshold.
    /// `NaN` for a single trial.
    pub fn stddev(&self) -> f64 {
        let trials = self.trials();
        if trials == 1 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum_sq = self
            .thresholds
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>();
        (sum_sq / (trials - 1) as f64).sqrt()
    }

    /// Low endpoint of 95% confidence interval. `NaN` whenever `stddev` is.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of 95% confidence interval. `NaN` whenever `stddev` is.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

fn validate(n: usize, trials: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidDimension(n));
    }
    if trials == 0 {
        return Err(Error::InvalidTrials(trials));
    }
    Ok(())
}
