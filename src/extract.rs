//! Take a value out of a map and hand it to a callback.
//!
//! The entry is removed *before* the callback runs. If the callback panics or
//! returns an error, the entry stays removed.

use crate::error::{ExtractError, Result};
use crate::map::SequentialMap;
use crate::{ok_or, some_or};

/// Method-style extraction for every [`SequentialMap`].
///
/// Both methods return the receiver so calls can be chained:
///
/// ```
/// use std::collections::BTreeMap;
/// use map_extract::RemoveAndProcess;
///
/// let mut map: BTreeMap<&str, i32> = vec![("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
/// let mut seen = Vec::new();
///
/// map.remove_and_process(&"a", |v: i32| seen.push(v))
///     .unwrap()
///     .remove_and_process(&"b", |v: i32| v * 2)
///     .unwrap();
///
/// assert_eq!(seen, vec![1]);
/// assert_eq!(map.len(), 1);
/// ```
pub trait RemoveAndProcess<K, V>: SequentialMap<K, V> {
    /// Remove the entry for `key` and pass its value to `f`.
    ///
    /// Whatever `f` returns is dropped; the map itself is returned.
    fn remove_and_process<F, R>(&mut self, key: &K, f: F) -> Result<&mut Self>
    where
        F: FnOnce(V) -> R,
    {
        let value = detach(&mut *self, key)?;
        let _ = f(value);

        Ok(self)
    }

    /// Like [`remove_and_process`](Self::remove_and_process), for callbacks that can fail.
    ///
    /// An `Err` from `f` is returned untouched, after the entry was removed.
    fn try_remove_and_process<F, R, E>(&mut self, key: &K, f: F) -> std::result::Result<&mut Self, E>
    where
        F: FnOnce(V) -> std::result::Result<R, E>,
        E: From<ExtractError>,
    {
        let value = detach(&mut *self, key)?;
        f(value)?;

        Ok(self)
    }
}

impl<K, V, M> RemoveAndProcess<K, V> for M where M: SequentialMap<K, V> + ?Sized {}

/// Remove the entry for `key` from `container` and pass its value to `callback`.
///
/// Absent arguments are rejected with [`ExtractError::InvalidArgument`] before
/// the container is touched. A missing key gives [`ExtractError::KeyNotFound`]
/// and leaves the container as it was.
pub fn extract_and_remove<'a, K, V, M, F, R>(
    container: Option<&'a mut M>,
    key: &K,
    callback: Option<F>,
) -> Result<&'a mut M>
where
    M: SequentialMap<K, V> + ?Sized,
    F: FnOnce(V) -> R,
{
    let container = some_or!(container, return Err(rejected("container")));
    let callback = some_or!(callback, return Err(rejected("callback")));

    container.remove_and_process(key, callback)
}

/// Fallible-callback form of [`extract_and_remove`].
pub fn try_extract_and_remove<'a, K, V, M, F, R, E>(
    container: Option<&'a mut M>,
    key: &K,
    callback: Option<F>,
) -> std::result::Result<&'a mut M, E>
where
    M: SequentialMap<K, V> + ?Sized,
    F: FnOnce(V) -> std::result::Result<R, E>,
    E: From<ExtractError>,
{
    let container = some_or!(container, return Err(rejected("container").into()));
    let callback = some_or!(callback, return Err(rejected("callback").into()));

    container.try_remove_and_process(key, callback)
}

// lookup first, so a miss never reaches `remove`
fn detach<K, V, M>(map: &mut M, key: &K) -> Result<V>
where
    M: SequentialMap<K, V> + ?Sized,
{
    some_or!(map.lookup(key), {
        #[cfg(feature = "trace")]
        tracing::trace!("key not found");
        return Err(ExtractError::KeyNotFound);
    });

    let value = ok_or!(map.remove(key), return Err(ExtractError::KeyNotFound));

    #[cfg(feature = "trace")]
    tracing::trace!("entry removed, invoking callback");

    Ok(value)
}

fn rejected(argument: &'static str) -> ExtractError {
    #[cfg(feature = "trace")]
    tracing::trace!(argument, "rejected absent argument");

    ExtractError::InvalidArgument(argument)
}
