//! Synthetic node/file list generation for tests and benchmarks.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Names are `{prefix}_{n}`.
    pub prefix: String,
    /// Number of well-formed `NAME VALUE` lines.
    pub num_entries: usize,
    /// Number of `#` comment lines mixed in.
    pub comments: usize,
    /// Number of single-token garbage lines mixed in.
    pub errors: usize,
    pub lower: u64,
    pub upper: u64,
    /// Fixed seed for reproducible output; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            prefix: "node".to_string(),
            num_entries: 10,
            comments: 0,
            errors: 0,
            lower: 10,
            upper: 10_000,
            seed: None,
        }
    }
}

impl GeneratorOptions {
    pub fn new(prefix: impl Into<String>, num_entries: usize) -> Self {
        Self {
            prefix: prefix.into(),
            num_entries,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, lower: u64, upper: u64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Build shuffled record text according to `options`, lines joined by `\n`.
pub fn generate_text(options: &GeneratorOptions) -> Result<String, ConfigError> {
    if options.lower > options.upper {
        return Err(ConfigError::Invalid(format!(
            "lower bound {} exceeds upper bound {}",
            options.lower, options.upper
        )));
    }

    let mut rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let total = options.num_entries + options.comments + options.errors;
    let mut lines = Vec::with_capacity(total);
    for n in 0..options.num_entries {
        let value = rng.random_range(options.lower..=options.upper);
        lines.push(format!("{}_{} {}", options.prefix, n, value));
    }
    for _ in 0..options.comments {
        lines.push(format!("#{:032x}", rng.random::<u128>()));
    }
    for _ in 0..options.errors {
        lines.push(format!("{:032x}", rng.random::<u128>()));
    }

    lines.shuffle(&mut rng);
    Ok(lines.join("\n"))
}
