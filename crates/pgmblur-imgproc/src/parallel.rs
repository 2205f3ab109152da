use std::num::NonZeroUsize;
use std::thread::available_parallelism;

use thiserror::Error;

/// Errors that can occur when configuring parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be >= -1, got {0}")]
    InvalidThreadCount(i32),
}

/// Controls how the blur passes are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of
    /// parallelization outweighs the benefits.
    Serial,

    /// Run on a thread pool sized to every core the system reports
    /// available, resolved at call time.
    #[default]
    AllCores,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Number of worker threads the strategy resolves to.
    ///
    /// Must return at least 1.
    pub fn thread_count(&self) -> usize {
        match self {
            Self::Serial => 1,
            Self::AllCores => available_parallelism().map_or(1, NonZeroUsize::get),
            Self::Fixed(n) => *n,
        }
    }

    /// Run `op` under this strategy: inline for [`ExecutionStrategy::Serial`],
    /// otherwise inside a local thread pool sized to
    /// [`ExecutionStrategy::thread_count`].
    ///
    /// # Errors
    ///
    /// Returns an error if the thread count is zero or the pool cannot be
    /// built.
    pub fn install<F, R>(&self, op: F) -> Result<R, ParallelError>
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self {
            Self::Serial => Ok(op()),
            Self::Fixed(0) => Err(ParallelError::InvalidThreadCount(0)),
            _ => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(self.thread_count())
                    .build()
                    .map_err(|e| ParallelError::BuildError(e.to_string()))?;

                Ok(pool.install(op))
            }
        }
    }
}

/// Maps the conventional signed thread-count argument: `-1` forces serial
/// execution, `0` resolves to all available cores and positive values
/// request exactly that many workers.
impl TryFrom<i32> for ExecutionStrategy {
    type Error = ParallelError;

    fn try_from(threads: i32) -> Result<Self, Self::Error> {
        match threads {
            -1 => Ok(Self::Serial),
            0 => Ok(Self::AllCores),
            n if n > 0 => Ok(Self::Fixed(n as usize)),
            n => Err(ParallelError::InvalidThreadCount(n)),
        }
    }
}
