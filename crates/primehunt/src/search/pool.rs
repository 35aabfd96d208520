use core::num::NonZeroUsize;
use std::thread;

use crate::{Clock, Error, Result, ResultSink, WorkSource, WorkerId, WorkerStats, run_worker};

/// Spawns `workers` OS threads bound to the same `source` and `sink`, and
/// blocks until every one of them has terminated.
///
/// Threads are scoped, so `source`, `sink` and `clock` are borrowed rather
/// than shared through globals or reference counting. Worker ids are assigned
/// `1..=workers` in spawn order and the returned statistics follow that order.
///
/// Every spawned thread is joined before this function returns, including on
/// the error path.
///
/// # Errors
///
/// - [`Error::Spawn`] if the OS refuses a thread. Workers spawned before the
///   failure still run to completion.
/// - [`Error::WorkerPanicked`] if a worker panicked.
/// - The first error a worker returned, in worker id order.
pub fn run_pool<S, K, C>(
    workers: NonZeroUsize,
    source: &S,
    sink: &K,
    clock: &C,
) -> Result<Vec<WorkerStats>>
where
    S: WorkSource + ?Sized,
    K: ResultSink + ?Sized,
    C: Clock + ?Sized,
{
    thread::scope(|scope| {
        let mut handles = Vec::new();
        let mut spawn_error = None;
        for worker_id in WorkerId::all(workers) {
            let spawned = thread::Builder::new()
                .name(format!("worker-{worker_id}"))
                .spawn_scoped(scope, move || run_worker(worker_id, source, sink, clock));
            match spawned {
                Ok(handle) => handles.push((worker_id, handle)),
                Err(source) => {
                    spawn_error = Some(Error::Spawn {
                        worker_id: worker_id.get(),
                        source,
                    });
                    break;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Spawned {} workers", handles.len());

        // Join everything before inspecting results so no handle is left
        // unjoined when an earlier worker failed.
        let joined: Vec<_> = handles
            .into_iter()
            .map(|(worker_id, handle)| {
                handle.join().unwrap_or(Err(Error::WorkerPanicked {
                    worker_id: worker_id.get(),
                }))
            })
            .collect();

        match spawn_error {
            Some(err) => Err(err),
            None => joined.into_iter().collect(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BufferedCollect, Claim, DynamicClaim, LocalClock, PrimeFinding, SearchRange,
        StaticPartition,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn spawns_exactly_the_requested_workers() {
        let range = SearchRange::up_to(5_000).unwrap();
        let source = StaticPartition::new(range, workers(5));
        let sink = BufferedCollect::new();

        let stats = run_pool(workers(5), &source, &sink, &LocalClock).unwrap();
        let ids: Vec<_> = stats.iter().map(|s| s.worker_id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            stats.iter().map(|s| s.candidates).sum::<u64>(),
            range.len()
        );
        assert_eq!(
            stats.iter().map(|s| s.primes).sum::<u64>() as usize,
            sink.len().unwrap()
        );
    }

    #[test]
    fn threads_are_named_after_worker_ids() {
        struct NameCheck;
        impl ResultSink for NameCheck {
            type Batch = ();
            fn batch(&self, worker: WorkerId) -> Self::Batch {
                let name = thread::current().name().map(str::to_owned);
                assert_eq!(name, Some(format!("worker-{worker}")));
            }
            fn record(&self, _: &mut (), _: PrimeFinding) -> Result<()> {
                Ok(())
            }
            fn flush(&self, _: ()) -> Result<()> {
                Ok(())
            }
        }

        let source = DynamicClaim::new(SearchRange::up_to(100).unwrap());
        run_pool(workers(3), &source, &NameCheck, &LocalClock).unwrap();
    }

    #[test]
    fn panicking_worker_is_reported_after_all_joins() {
        struct Flaky {
            inner: DynamicClaim,
            lanes: AtomicUsize,
        }
        impl WorkSource for Flaky {
            type Lane = (WorkerId, <DynamicClaim as WorkSource>::Lane);
            fn range(&self) -> SearchRange {
                self.inner.range()
            }
            fn lane(&self, worker: WorkerId) -> Self::Lane {
                self.lanes.fetch_add(1, Ordering::SeqCst);
                (worker, self.inner.lane(worker))
            }
            fn next(&self, lane: &mut Self::Lane) -> Claim {
                if lane.0.get() == 2 {
                    panic!("worker 2 fails");
                }
                self.inner.next(&mut lane.1)
            }
        }

        let source = Flaky {
            inner: DynamicClaim::new(SearchRange::up_to(1_000).unwrap()),
            lanes: AtomicUsize::new(0),
        };
        let sink = BufferedCollect::new();

        let err = run_pool(workers(3), &source, &sink, &LocalClock).unwrap_err();
        assert!(matches!(err, Error::WorkerPanicked { worker_id: 2 }));
        assert_eq!(source.lanes.load(Ordering::SeqCst), 3);
        // The surviving workers still drained the range.
        assert_eq!(sink.len().unwrap(), 168);
    }
}
