use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{OrderError, OrderResult};
use crate::models::{OrderId, MAX_ORDER_ID};

/// Attempts made before giving up on finding a free order number
pub const DEFAULT_ALLOCATION_ATTEMPTS: u32 = 10_000;

/// Stream of candidate order numbers
#[cfg_attr(test, mockall::automock)]
pub trait CandidateSource {
    fn next_candidate(&mut self) -> u32;
}

/// Uniform draws from `1..=MAX_ORDER_ID`
#[derive(Debug)]
pub struct RandomCandidates<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomCandidates<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomCandidates<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CandidateSource for RandomCandidates<R> {
    fn next_candidate(&mut self) -> u32 {
        self.rng.gen_range(1..=MAX_ORDER_ID)
    }
}

/// Picks an unused order number from a candidate stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    max_attempts: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOCATION_ATTEMPTS)
    }
}

impl IdAllocator {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draw candidates until one is in range and not taken.
    ///
    /// Nothing is reserved: the caller must insert the returned number
    /// before anyone else can observe the taken set.
    pub fn allocate(
        &self,
        source: &mut dyn CandidateSource,
        is_taken: impl Fn(OrderId) -> bool,
    ) -> OrderResult<OrderId> {
        for attempt in 1..=self.max_attempts {
            let candidate = source.next_candidate();
            if candidate == 0 || candidate > MAX_ORDER_ID {
                debug!(candidate, attempt, "Order number candidate out of range");
                continue;
            }

            let id = OrderId::from(candidate);
            if is_taken(id) {
                debug!(candidate, attempt, "Order number collision");
                continue;
            }
            return Ok(id);
        }

        Err(OrderError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }
}
