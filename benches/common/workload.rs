//! Key streams and load accounting for ring benchmarks.
//!
//! Generators are seeded so every run of a benchmark sees the same keys.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ringkit::hash::RingHasher;
use ringkit::ring::Ring;

#[derive(Debug, Clone, Copy)]
pub enum Workload {
    /// Uniform random keys in `[0, universe)`.
    Uniform,
    /// Sequential keys in `[0, universe)`, wrapping.
    Scan,
    /// Zipfian distribution over `[0, universe)`.
    /// `theta` controls skew: 0.0 = uniform, 0.99 = highly skewed (YCSB default).
    Zipfian { theta: f64 },
}

#[derive(Debug, Clone)]
pub struct KeyGenerator {
    universe: u64,
    workload: Workload,
    rng: SmallRng,
    scan_pos: u64,
    zipfian: Option<ZipfianState>,
}

impl KeyGenerator {
    pub fn new(universe: u64, workload: Workload, seed: u64) -> Self {
        let universe = universe.max(1);
        let zipfian = match workload {
            Workload::Zipfian { theta } => Some(ZipfianState::new(universe, theta)),
            _ => None,
        };
        Self {
            universe,
            workload,
            rng: SmallRng::seed_from_u64(seed),
            scan_pos: 0,
            zipfian,
        }
    }

    pub fn next_id(&mut self) -> u64 {
        match (self.workload, &self.zipfian) {
            (Workload::Zipfian { .. }, Some(zipf)) => zipf.sample(self.rng.r#gen::<f64>()),
            (Workload::Scan, _) => {
                let id = self.scan_pos;
                self.scan_pos = (self.scan_pos + 1) % self.universe;
                id
            },
            _ => self.rng.gen_range(0..self.universe),
        }
    }

    /// Next key rendered the way callers usually name things: `user:<id>`.
    pub fn next_key(&mut self) -> String {
        format!("user:{}", self.next_id())
    }

    /// Pre-renders `count` keys so formatting stays out of timed loops.
    pub fn keys(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.next_key()).collect()
    }
}

/// How lookups spread across a ring's nodes.
#[derive(Debug, Clone, Default)]
pub struct LoadSpread {
    pub per_node: HashMap<String, u64>,
    pub lookups: u64,
}

impl LoadSpread {
    /// Heaviest node's share relative to a perfectly even split.
    pub fn max_over_mean(&self) -> f64 {
        if self.per_node.is_empty() {
            return 0.0;
        }
        let mean = self.lookups as f64 / self.per_node.len() as f64;
        let max = self.per_node.values().copied().max().unwrap_or(0) as f64;
        max / mean
    }

    /// Lightest node's share relative to a perfectly even split.
    pub fn min_over_mean(&self) -> f64 {
        if self.per_node.is_empty() {
            return 0.0;
        }
        let mean = self.lookups as f64 / self.per_node.len() as f64;
        let min = self.per_node.values().copied().min().unwrap_or(0) as f64;
        min / mean
    }
}

/// Resolves every key and tallies the owner of each.
pub fn measure_spread<H: RingHasher>(ring: &Ring<String, H>, keys: &[String]) -> LoadSpread {
    let mut spread = LoadSpread::default();
    for node in ring.nodes() {
        spread.per_node.insert(node.clone(), 0);
    }
    for key in keys {
        if let Some(owner) = ring.get(key) {
            *spread.per_node.entry(owner.clone()).or_insert(0) += 1;
            spread.lookups += 1;
        }
    }
    spread
}

/// Fraction of keys whose owner differs between two placements.
pub fn moved_fraction(before: &[Option<String>], after: &[Option<String>]) -> f64 {
    if before.is_empty() {
        return 0.0;
    }
    let moved = before.iter().zip(after).filter(|(a, b)| a != b).count();
    moved as f64 / before.len() as f64
}

/// Zipfian distribution state for inverse CDF sampling.
///
/// Uses the algorithm from YCSB (Yahoo Cloud Serving Benchmark).
#[derive(Debug, Clone)]
struct ZipfianState {
    n: u64,
    theta: f64,
    zeta_n: f64,
    alpha: f64,
    eta: f64,
}

impl ZipfianState {
    fn new(n: u64, theta: f64) -> Self {
        let theta = theta.clamp(0.0, 0.9999);
        let zeta_2 = Self::zeta(2, theta);
        let zeta_n = Self::zeta(n, theta);
        let alpha = 1.0 / (1.0 - theta);
        let eta = (1.0 - (2.0 / n as f64).powf(1.0 - theta)) / (1.0 - zeta_2 / zeta_n);

        Self {
            n,
            theta,
            zeta_n,
            alpha,
            eta,
        }
    }

    fn zeta(n: u64, theta: f64) -> f64 {
        (1..=n).map(|i| 1.0 / (i as f64).powf(theta)).sum()
    }

    fn sample(&self, u: f64) -> u64 {
        let uz = u * self.zeta_n;
        if uz < 1.0 {
            return 0;
        }
        if uz < 1.0 + 0.5_f64.powf(self.theta) {
            return 1;
        }
        let spread = (self.n as f64) * (self.eta * u - self.eta + 1.0).powf(self.alpha);
        (spread as u64).min(self.n - 1)
    }
}
