//! Replacing and removing the registered crash reporter.

use std::sync::atomic::{AtomicUsize, Ordering};

static FIRST_INSTALLS: AtomicUsize = AtomicUsize::new(0);
static SECOND_INSTALLS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn replace_and_unregister_hand_back_the_previous_reporter() {
    assert!(
        crashsite::reporter::replace(|| {
            FIRST_INSTALLS.fetch_add(1, Ordering::SeqCst);
        })
        .is_none()
    );

    let previous = crashsite::reporter::replace(|| {
        SECOND_INSTALLS.fetch_add(1, Ordering::SeqCst);
    })
    .expect("first reporter should have been registered");

    // The replaced reporter comes back intact and can still install.
    previous.install();
    assert_eq!(FIRST_INSTALLS.load(Ordering::SeqCst), 1);

    // The hook now sees only the replacement.
    crashsite::entrypoint();
    assert_eq!(FIRST_INSTALLS.load(Ordering::SeqCst), 1);
    assert_eq!(SECOND_INSTALLS.load(Ordering::SeqCst), 1);

    // After unregistering, the hook goes back to being a silent no-op.
    let removed = crashsite::reporter::unregister();
    assert!(removed.is_some());
    assert!(!crashsite::reporter::is_registered());
    crashsite::entrypoint();
    assert_eq!(SECOND_INSTALLS.load(Ordering::SeqCst), 1);

    assert!(crashsite::reporter::unregister().is_none());
}
