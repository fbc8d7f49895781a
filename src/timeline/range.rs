use rayon::prelude::*;

use crate::{
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ScoreReelError, ScoreReelResult},
    timeline::scheduler::{FrameState, TimelineScheduler},
};

/// Threading and chunking controls for multi-frame evaluation.
#[derive(Clone, Debug)]
pub struct EvalThreading {
    /// Evaluate frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Worker count; `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Frames handed to the pool per batch.
    pub chunk_size: usize,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            chunk_size: 256,
        }
    }
}

/// Evaluate every frame in `range`, in frame order.
///
/// Parallel and sequential evaluation produce identical results because each frame is computed
/// independently.
#[tracing::instrument(skip(sched, threading))]
pub fn evaluate_range(
    sched: &TimelineScheduler,
    range: FrameRange,
    threading: &EvalThreading,
) -> ScoreReelResult<Vec<FrameState>> {
    if range.is_empty() {
        return Err(ScoreReelError::validation("evaluation range must be non-empty"));
    }

    if !threading.parallel {
        return Ok((range.start.0..range.end.0)
            .map(|f| sched.frame_state(FrameIndex(f)))
            .collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut out = Vec::with_capacity(range.len_frames().min(1 << 16) as usize);

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let mut states = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| sched.frame_state(FrameIndex(f)))
                .collect::<Vec<_>>()
        });
        out.append(&mut states);
        chunk_start = chunk_end;
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> ScoreReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ScoreReelError::validation(
            "evaluation threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ScoreReelError::validation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    u64::try_from(chunk_size.max(1)).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/range.rs"]
mod tests;
