#[cfg(feature = "std")]
use std::sync as lock_impl;

#[cfg(not(feature = "std"))]
use spin as lock_impl;

/// A process-global slot holding at most one value.
///
/// The lock implementation is `std::sync::RwLock` when the `std` feature is
/// enabled and `spin::RwLock` otherwise, so the slot stays usable on `no_std`
/// targets.
pub(crate) struct Slot<T: 'static + Send + Sync>(lock_impl::RwLock<Option<T>>);

impl<T: 'static + Send + Sync> Slot<T> {
    #[must_use]
    pub(crate) const fn empty() -> Self {
        Self(lock_impl::RwLock::new(None))
    }

    /// Runs `f` with a shared view of the slot contents.
    ///
    /// The read guard is held for the duration of `f`, so writers registering
    /// or removing a value block until `f` returns.
    pub(crate) fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().expect("unable to acquire slot lock");

        f(guard.as_ref())
    }

    /// Stores `value` if the slot is empty.
    ///
    /// Returns the value back to the caller if the slot is already occupied.
    pub(crate) fn put(&self, value: T) -> Result<(), T> {
        let mut guard = self.write();
        if guard.is_some() {
            Err(value)
        } else {
            *guard = Some(value);
            Ok(())
        }
    }

    /// Stores `value` unconditionally, returning the previous occupant.
    pub(crate) fn swap(&self, value: T) -> Option<T> {
        self.write().replace(value)
    }

    /// Empties the slot, returning the occupant.
    pub(crate) fn take(&self) -> Option<T> {
        self.write().take()
    }

    #[cfg(not(feature = "std"))]
    fn write(&self) -> lock_impl::RwLockWriteGuard<'_, Option<T>> {
        self.0.write()
    }

    #[cfg(feature = "std")]
    fn write(&self) -> lock_impl::RwLockWriteGuard<'_, Option<T>> {
        self.0.write().expect("unable to acquire slot lock")
    }
}

#[cfg(test)]
mod tests {
    use super::Slot;

    #[test]
    fn put_is_first_wins() {
        let slot: Slot<u32> = Slot::empty();
        assert_eq!(slot.put(1), Ok(()));
        assert_eq!(slot.put(2), Err(2));
        slot.with(|value| assert_eq!(value, Some(&1)));
    }

    #[cfg(feature = "std")]
    #[test]
    fn racing_puts_resolve_to_a_single_winner() {
        use std::{sync::Arc, thread, vec::Vec};

        let slot: Arc<Slot<u32>> = Arc::new(Slot::empty());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let slot = Arc::clone(&slot);
                thread::spawn(move || slot.put(i).is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        slot.with(|value| assert!(value.is_some()));
    }

    #[test]
    fn swap_and_take_return_previous() {
        let slot: Slot<u32> = Slot::empty();
        assert_eq!(slot.swap(1), None);
        assert_eq!(slot.swap(2), Some(1));
        assert_eq!(slot.take(), Some(2));
        assert_eq!(slot.take(), None);
        slot.with(|value| assert_eq!(value, None));
    }
}
