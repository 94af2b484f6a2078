#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;

/// Performs fallible mutable foreach in parallel, stops on the first error observed.
pub fn parallel_try_foreach_mut<T, F, E>(source: &mut [T], action: F) -> Result<(), E>
where
    T: Send + Sync,
    F: Fn(&mut T) -> Result<(), E> + Send + Sync,
    E: Send,
{
    source.par_iter_mut().try_for_each(action)
}
