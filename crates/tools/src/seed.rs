use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use xxhash_rust::xxh3::xxh3_64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn resolve(cli_seed: Option<u64>) -> Self {
        match cli_seed {
            Some(seed) => Self::Cli(seed),
            None => Self::Generated(generate_runtime_seed()),
        }
    }

    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static RUNTIME_DRAWS: AtomicU64 = AtomicU64::new(0);

/// Hashes the clock and process id together with a per-process draw counter,
/// so calls within one clock tick still differ.
pub fn generate_runtime_seed() -> u64 {
    let nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_nanos());
    let draw = RUNTIME_DRAWS.fetch_add(1, Ordering::Relaxed);

    let mut entropy = Vec::with_capacity(28);
    entropy.extend(nanos.to_le_bytes());
    entropy.extend(process::id().to_le_bytes());
    entropy.extend(draw.to_le_bytes());
    xxh3_64(&entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_kept() {
        assert_eq!(SeedChoice::resolve(Some(4_242)), SeedChoice::Cli(4_242));
        assert_eq!(SeedChoice::resolve(Some(7)).value(), 7);
    }

    #[test]
    fn missing_seed_is_generated() {
        assert!(matches!(SeedChoice::resolve(None), SeedChoice::Generated(_)));
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
