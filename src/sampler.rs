use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GenError;

/// The only place randomness enters the crate. Swapping the source swaps it
/// for every generator at once.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send {
    /// Uniform value in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: u64) -> u64;
    /// Uniform value over the whole `u64` domain.
    fn any(&mut self) -> u64;
}

pub struct RngSource<R: Rng + Send> {
    rng: R,
}

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn below(&mut self, bound: u64) -> u64 {
        self.rng.random_range(0..bound)
    }

    fn any(&mut self) -> u64 {
        self.rng.random()
    }
}

pub struct Sampler {
    source: Box<dyn RandomSource>,
}

impl Sampler {
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    pub fn from_entropy() -> Self {
        Self::new(Box::new(RngSource::new(StdRng::from_os_rng())))
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Box::new(RngSource::new(StdRng::seed_from_u64(seed))))
    }

    /// Uniform index in `[0, n)`.
    pub fn index(&mut self, n: usize) -> Result<usize, GenError> {
        if n == 0 {
            return Err(GenError::invalid("cannot pick an index from an empty range"));
        }
        Ok(self.source.below(n as u64) as usize)
    }

    /// Uniform integer in `[min, max]`.
    pub fn in_range(&mut self, min: i64, max: i64) -> Result<i64, GenError> {
        if max < min {
            return Err(GenError::invalid(format!(
                "range maximum {max} is below minimum {min}"
            )));
        }
        let span = max.abs_diff(min);
        let offset = if span == u64::MAX {
            self.source.any()
        } else {
            self.source.below(span + 1)
        };
        Ok(min.wrapping_add_unsigned(offset))
    }

    /// Uniform element of `set`. A single-element set never touches the source.
    pub fn choice<'a, T>(&mut self, set: &'a [T]) -> Result<&'a T, GenError> {
        match set {
            [] => Err(GenError::invalid("cannot choose from an empty set")),
            [only] => Ok(only),
            _ => Ok(&set[self.index(set.len())?]),
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

thread_local! {
    static THREAD_SAMPLER: RefCell<Sampler> = RefCell::new(Sampler::from_entropy());
}

/// Run `f` with this thread's sampler. Each thread gets its own source, so no
/// draw is ever shared across threads.
pub fn with_thread_sampler<T>(f: impl FnOnce(&mut Sampler) -> T) -> T {
    THREAD_SAMPLER.with(|sampler| f(&mut sampler.borrow_mut()))
}
