//! Chunked viewshed summation.
//!
//! Summing thousands of viewsheds at once would hold them all live;
//! instead the unseen IDs are split into consecutive chunks, each chunk
//! is summed into one partial count raster, and the partials are added.
//! Chunks are independent, so with more than one worker they are summed
//! on scoped threads fed from a crossbeam job queue. Partials are always
//! combined in chunk order after every worker has finished, so the
//! result never depends on scheduling.

use std::slice::Chunks;

use tracing::debug;
use vantage_core::{SurfaceError, TargetId, TargetSet};

use crate::config::SurfaceConfig;
use crate::raster::ViewshedStack;

/// Split `ids` into consecutive chunks of at most `chunk_size` IDs.
///
/// A `chunk_size` of zero is treated as one.
pub fn make_chunks(ids: &[TargetId], chunk_size: usize) -> Chunks<'_, TargetId> {
    ids.chunks(chunk_size.max(1))
}

/// Per-cell count of `unseen` targets visible from each cell.
///
/// Returns one `u32` per grid cell in row-major order. The mask is not
/// applied here.
///
/// # Errors
///
/// [`SurfaceError::UnknownTarget`] if an unseen ID has no viewshed in
/// `stack`; [`SurfaceError::WorkerFailed`] if a summation thread dies.
pub fn chunked_sum(
    stack: &ViewshedStack,
    unseen: &TargetSet,
    config: &SurfaceConfig,
) -> Result<Vec<u32>, SurfaceError> {
    let ids: Vec<TargetId> = unseen.iter().copied().collect();
    if let Some(&target) = ids.iter().find(|&&id| stack.get(id).is_none()) {
        return Err(SurfaceError::UnknownTarget { target });
    }

    let chunks: Vec<&[TargetId]> = make_chunks(&ids, config.chunk_size).collect();
    let workers = config.resolved_worker_count().min(chunks.len());
    debug!(
        targets = ids.len(),
        chunks = chunks.len(),
        workers,
        "summing unseen viewsheds"
    );

    let partials: Vec<Vec<u32>> = if workers <= 1 {
        chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| sum_chunk(stack, i, chunk))
            .collect()
    } else {
        sum_parallel(stack, &chunks, workers)?
    };

    let mut total = vec![0u32; stack.grid().cell_count()];
    for partial in &partials {
        for (sum, &p) in total.iter_mut().zip(partial) {
            *sum += p;
        }
    }
    Ok(total)
}

/// Sum one chunk of viewsheds into a fresh count raster.
fn sum_chunk(stack: &ViewshedStack, chunk_index: usize, chunk: &[TargetId]) -> Vec<u32> {
    debug!(chunk = chunk_index + 1, len = chunk.len(), "chunk sum");
    let mut acc = vec![0u32; stack.grid().cell_count()];
    for &id in chunk {
        if let Some(raster) = stack.get(id) {
            raster.accumulate_into(&mut acc);
        }
    }
    acc
}

fn sum_parallel(
    stack: &ViewshedStack,
    chunks: &[&[TargetId]],
    workers: usize,
) -> Result<Vec<Vec<u32>>, SurfaceError> {
    let (job_tx, job_rx) = crossbeam_channel::unbounded::<(usize, &[TargetId])>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, Vec<u32>)>();

    for (i, &chunk) in chunks.iter().enumerate() {
        job_tx
            .send((i, chunk))
            .map_err(|_| SurfaceError::WorkerFailed {
                reason: "job queue closed".to_string(),
            })?;
    }
    // Workers exit once the queue drains.
    drop(job_tx);

    std::thread::scope(move |scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    while let Ok((i, chunk)) = job_rx.recv() {
                        if result_tx.send((i, sum_chunk(stack, i, chunk))).is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();
        drop(result_tx);

        let mut partials: Vec<Option<Vec<u32>>> = vec![None; chunks.len()];
        for (i, sum) in result_rx.iter() {
            partials[i] = Some(sum);
        }
        for handle in handles {
            handle.join().map_err(|_| SurfaceError::WorkerFailed {
                reason: "summation thread panicked".to_string(),
            })?;
        }

        partials
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                p.ok_or_else(|| SurfaceError::WorkerFailed {
                    reason: format!("chunk {} produced no sum", i + 1),
                })
            })
            .collect()
    })
}
