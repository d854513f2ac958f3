//! Division of a stage's butterfly blocks across workers.

use std::ops::Range;

/// Contiguous split of the block range `[0, blocks)` into chunks of
/// `ceil(blocks / threads)` blocks each.
///
/// Recomputed once per stage: the block count `n / len` halves every stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadPartition {
    blocks: usize,
    chunk_blocks: usize,
}

impl ThreadPartition {
    /// Partition `blocks` independent blocks over at most `threads` workers.
    ///
    /// `threads` is clamped to at least 1.
    #[must_use]
    pub fn new(blocks: usize, threads: usize) -> Self {
        let threads = threads.max(1);
        Self {
            blocks,
            chunk_blocks: blocks.div_ceil(threads).max(1),
        }
    }

    /// Total number of blocks in the stage.
    #[must_use]
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Blocks per chunk. The final chunk may hold fewer.
    #[must_use]
    pub fn chunk_blocks(&self) -> usize {
        self.chunk_blocks
    }

    /// Number of non-empty chunks, i.e. workers to launch.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.blocks.div_ceil(self.chunk_blocks)
    }

    /// Block ranges of the non-empty chunks, in order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.workers()).map(move |t| {
            let start = t * self.chunk_blocks;
            start..(start + self.chunk_blocks).min(self.blocks)
        })
    }
}
