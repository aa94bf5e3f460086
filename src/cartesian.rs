//! N-ary cartesian product over lists of candidates.
//!
//! The result covers every combination exactly once, but its order is not
//! part of the contract: [`par_product`] emits tuples in whatever order its
//! workers finish. Callers must treat the output as a set.
//!
//! The number of tuples is the product of all list lengths, so it grows
//! exponentially with the number of lists. Compilation pays this once per
//! distinct pattern.

// std imports
use std::panic;

// third-party imports
use closure::closure;
use crossbeam_channel as channel;
use crossbeam_utils::{sync::WaitGroup, thread};

// ---

/// Returns the number of tuples the product of `lists` contains.
///
/// Saturates at `usize::MAX`.
pub fn size<T>(lists: &[&[T]]) -> usize {
    lists.iter().fold(1usize, |acc, list| acc.saturating_mul(list.len()))
}

/// Enumerates the product on the calling thread.
///
/// Zero lists yield a single empty tuple; any empty list yields nothing.
pub fn product<T: Clone>(lists: &[&[T]]) -> Vec<Vec<T>> {
    let mut result = Vec::with_capacity(size(lists).min(MAX_PREALLOCATED));
    let mut tuple = Vec::with_capacity(lists.len());
    produce(lists, &mut tuple, &mut |t| result.push(t));
    result
}

/// Enumerates the product on up to `workers` scoped threads.
///
/// The first list is split between workers, each of them enumerates the rest
/// for its share and sends tuples to a shared channel. The channel is drained
/// once every worker has passed the completion barrier.
pub fn par_product<T>(lists: &[&[T]], workers: usize) -> Vec<Vec<T>>
where
    T: Clone + Send + Sync,
{
    let Some((head, rest)) = lists.split_first() else {
        return product(lists);
    };
    if head.is_empty() {
        return Vec::new();
    }

    let chunk = head.len().div_ceil(workers.max(1));
    let (tx, rx) = channel::unbounded();
    let wg = WaitGroup::new();

    let result = thread::scope(|scope| {
        for share in head.chunks(chunk) {
            scope.spawn(closure!(clone wg, clone tx, |_| {
                let mut tuple = Vec::with_capacity(lists.len());
                for item in share {
                    tuple.push(item.clone());
                    produce(rest, &mut tuple, &mut |t| {
                        // receiver outlives every worker
                        let _ = tx.send(t);
                    });
                    tuple.pop();
                }
                drop(wg);
            }));
        }
        wg.wait();
        rx.try_iter().collect::<Vec<_>>()
    });

    match result {
        Ok(tuples) => tuples,
        Err(payload) => panic::resume_unwind(payload),
    }
}

// ---

const MAX_PREALLOCATED: usize = 1 << 16;

fn produce<T: Clone>(lists: &[&[T]], tuple: &mut Vec<T>, sink: &mut impl FnMut(Vec<T>)) {
    match lists.split_first() {
        None => sink(tuple.clone()),
        Some((head, rest)) => {
            for item in *head {
                tuple.push(item.clone());
                produce(rest, tuple, sink);
                tuple.pop();
            }
        }
    }
}
