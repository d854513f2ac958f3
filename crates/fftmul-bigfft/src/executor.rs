//! Parallel butterfly stage executors.
//!
//! A stage is every butterfly block of one block length `len`. Blocks are
//! disjoint in memory, so each chunk of a [`ThreadPartition`] is handed to a
//! single worker with no locking. `run_stage` returns only after every worker
//! has finished, which is the barrier between consecutive stages.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use num_complex::Complex64;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::MulError;
use crate::fft_core::butterfly_blocks;
use crate::partition::ThreadPartition;

/// Runs one transform stage across worker threads.
///
/// A worker that panics is reported as [`MulError::WorkerPanicked`] once the
/// stage has been joined; the panic does not unwind into the caller.
pub trait StageExecutor: Send + Sync {
    /// Apply the butterflies of block length `len` to every block of `data`,
    /// with `w_len` the stage's principal root of unity.
    fn run_stage(&self, data: &mut [Complex64], len: usize, w_len: Complex64)
        -> Result<(), MulError>;

    /// Requested worker count.
    fn threads(&self) -> usize;

    /// Short name used in logs and reports.
    fn name(&self) -> &str;
}

/// Which executor to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutorKind {
    /// Fresh scoped OS threads per stage.
    Spawn,
    /// Persistent rayon pool.
    #[default]
    Pool,
}

impl ExecutorKind {
    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spawn => "spawn",
            Self::Pool => "pool",
        }
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build an executor of the given kind with `threads` workers.
pub fn build_executor(
    kind: ExecutorKind,
    threads: usize,
) -> Result<Box<dyn StageExecutor>, MulError> {
    Ok(match kind {
        ExecutorKind::Spawn => Box::new(SpawnExecutor::new(threads)?),
        ExecutorKind::Pool => Box::new(PoolExecutor::new(threads)?),
    })
}

/// Spawns one scoped thread per non-empty chunk for every stage and joins
/// them all before returning.
#[derive(Debug, Clone)]
pub struct SpawnExecutor {
    threads: usize,
}

impl SpawnExecutor {
    pub fn new(threads: usize) -> Result<Self, MulError> {
        if threads == 0 {
            return Err(MulError::ZeroParallelism);
        }
        Ok(Self { threads })
    }

    /// Run `body` on each `chunk_len` slice of `data`, one scoped thread per
    /// slice, and join them all.
    fn for_each_chunk<F>(
        &self,
        data: &mut [Complex64],
        chunk_len: usize,
        body: F,
    ) -> Result<(), MulError>
    where
        F: Fn(&mut [Complex64]) + Sync,
    {
        let body = &body;
        crossbeam::thread::scope(|s| -> Result<(), MulError> {
            for (t, chunk) in data.chunks_mut(chunk_len).enumerate() {
                s.builder()
                    .name(format!("fft-stage-{t}"))
                    .spawn(move |_| body(chunk))
                    .map_err(MulError::ThreadSpawn)?;
            }
            Ok(())
        })
        .map_err(|_| MulError::WorkerPanicked)?
    }
}

impl StageExecutor for SpawnExecutor {
    fn run_stage(
        &self,
        data: &mut [Complex64],
        len: usize,
        w_len: Complex64,
    ) -> Result<(), MulError> {
        let partition = ThreadPartition::new(data.len() / len, self.threads);
        if partition.workers() <= 1 {
            butterfly_blocks(data, len, w_len);
            return Ok(());
        }

        let chunk_len = partition.chunk_blocks() * len;
        self.for_each_chunk(data, chunk_len, |chunk| butterfly_blocks(chunk, len, w_len))
    }

    fn threads(&self) -> usize {
        self.threads
    }

    fn name(&self) -> &str {
        "spawn"
    }
}

/// Runs stages on a persistent rayon pool sized to the requested parallelism.
pub struct PoolExecutor {
    pool: ThreadPool,
    threads: usize,
}

impl PoolExecutor {
    pub fn new(threads: usize) -> Result<Self, MulError> {
        if threads == 0 {
            return Err(MulError::ZeroParallelism);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("fft-pool-{i}"))
            .build()
            .map_err(|e| MulError::ThreadPool(e.to_string()))?;
        Ok(Self { pool, threads })
    }

    /// Run `body` on each `chunk_len` slice of `data` inside the pool.
    fn for_each_chunk<F>(
        &self,
        data: &mut [Complex64],
        chunk_len: usize,
        body: F,
    ) -> Result<(), MulError>
    where
        F: Fn(&mut [Complex64]) + Send + Sync,
    {
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.pool
                .install(|| data.par_chunks_mut(chunk_len).for_each(&body));
        }))
        .map_err(|_| MulError::WorkerPanicked)
    }
}

impl fmt::Debug for PoolExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolExecutor")
            .field("threads", &self.threads)
            .finish_non_exhaustive()
    }
}

impl StageExecutor for PoolExecutor {
    fn run_stage(
        &self,
        data: &mut [Complex64],
        len: usize,
        w_len: Complex64,
    ) -> Result<(), MulError> {
        let partition = ThreadPartition::new(data.len() / len, self.threads);
        if partition.workers() <= 1 {
            butterfly_blocks(data, len, w_len);
            return Ok(());
        }

        let chunk_len = partition.chunk_blocks() * len;
        self.for_each_chunk(data, chunk_len, |chunk| butterfly_blocks(chunk, len, w_len))
    }

    fn threads(&self) -> usize {
        self.threads
    }

    fn name(&self) -> &str {
        "pool"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new(i as f64, (n - i) as f64 * 0.5))
            .collect()
    }

    fn stage_root(len: usize) -> Complex64 {
        Complex64::from_polar(1.0, 2.0 * std::f64::consts::PI / len as f64)
    }

    #[test]
    fn zero_threads_rejected() {
        assert!(matches!(
            SpawnExecutor::new(0),
            Err(MulError::ZeroParallelism)
        ));
        assert!(matches!(
            PoolExecutor::new(0),
            Err(MulError::ZeroParallelism)
        ));
    }

    #[test]
    fn executors_match_sequential_stage() {
        let n = 64;
        for len in [2, 4, 8, 16, 32, 64] {
            let mut expected = ramp(n);
            butterfly_blocks(&mut expected, len, stage_root(len));

            for threads in [1, 2, 3, 4, 8] {
                for kind in [ExecutorKind::Spawn, ExecutorKind::Pool] {
                    let exec = build_executor(kind, threads).unwrap();
                    let mut data = ramp(n);
                    exec.run_stage(&mut data, len, stage_root(len)).unwrap();
                    assert_eq!(data, expected, "{kind} threads={threads} len={len}");
                }
            }
        }
    }

    #[test]
    fn worker_panic_becomes_error() {
        let fail_upper_half = |chunk: &mut [Complex64]| {
            if chunk[0].re >= 32.0 {
                panic!("butterfly worker failed");
            }
        };

        let spawn = SpawnExecutor::new(4).unwrap();
        let mut data = ramp(64);
        assert!(matches!(
            spawn.for_each_chunk(&mut data, 16, fail_upper_half),
            Err(MulError::WorkerPanicked)
        ));

        let pool = PoolExecutor::new(4).unwrap();
        let mut data = ramp(64);
        assert!(matches!(
            pool.for_each_chunk(&mut data, 16, fail_upper_half),
            Err(MulError::WorkerPanicked)
        ));

        // The pool survives a failed stage.
        let mut expected = ramp(64);
        butterfly_blocks(&mut expected, 8, stage_root(8));
        let mut data = ramp(64);
        pool.run_stage(&mut data, 8, stage_root(8)).unwrap();
        assert_eq!(data, expected);
    }

    #[test]
    fn names_and_threads() {
        let exec = build_executor(ExecutorKind::Spawn, 3).unwrap();
        assert_eq!(exec.name(), "spawn");
        assert_eq!(exec.threads(), 3);
        let exec = build_executor(ExecutorKind::Pool, 2).unwrap();
        assert_eq!(exec.name(), "pool");
        assert_eq!(exec.threads(), 2);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ExecutorKind::Spawn.to_string(), "spawn");
        assert_eq!(ExecutorKind::default(), ExecutorKind::Pool);
    }
}
