//! Behavior when no crash reporter has been registered.
//!
//! Kept in its own test binary so no other test can populate the
//! process-global registry first.

use crashsite::reporter::ReporterAlreadyRegisteredError;
use static_assertions::assert_impl_all;

assert_impl_all!(ReporterAlreadyRegisteredError: Send, Sync);

#[test]
fn entrypoint_without_reporter_is_a_silent_no_op() {
    assert!(!crashsite::reporter::is_registered());

    // Returns normally, repeatably.
    crashsite::entrypoint();
    crashsite::entrypoint();

    assert!(!crashsite::reporter::is_registered());
    assert!(crashsite::reporter::unregister().is_none());
}
