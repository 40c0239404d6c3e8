//! The crash reporter capability and its process-global registry.
//!
//! A crash reporter is an external component that knows how to register a
//! process-wide crash or panic reporting mechanism. This crate never
//! implements one; it only provides the registry through which a reporter
//! makes itself locatable, and the [`entrypoint`](crate::entrypoint) probe
//! that activates whatever is registered.
//!
//! # Registering a Reporter
//!
//! Anything implementing [`CrashReporter`] can be registered. The trait is
//! also blanket-implemented for plain closures:
//!
//! ```rust
//! crashsite::reporter::register(|| {
//!     // wire up your crash handler here
//! })
//! .expect("failed to register crash reporter");
//!
//! crashsite::entrypoint();
//! ```
//!
//! # Registration Semantics
//!
//! At most one reporter is registered at a time. [`register`] is first-wins
//! and hands the rejected reporter back on conflict; [`replace`] swaps
//! unconditionally and returns the previous reporter; [`unregister`] empties
//! the registry. All three serialize through the same lock, so there is no
//! window in which two reporters are visible.

use alloc::boxed::Box;
use core::{fmt, panic::Location};

use crate::slot::Slot;

static REPORTER: Slot<Box<dyn RegisteredReporter>> = Slot::empty();

/// An external capability that installs a process-wide crash reporting
/// mechanism.
///
/// The single operation, [`install`](Self::install), takes no parameters and
/// returns no value. It is expected to be idempotent and side-effecting:
/// implementations typically register a global handler (a panic hook, a
/// signal handler, a minidump writer) and nothing else. What installation
/// actually does is entirely owned by the implementation.
///
/// # Automatic Implementation
///
/// This trait is automatically implemented for any `Fn()` closure:
///
/// ```rust
/// use crashsite::reporter::CrashReporter;
///
/// let reporter = || println!("handler installed");
/// reporter.install();
/// ```
pub trait CrashReporter: 'static + Send + Sync {
    /// Installs the crash reporting mechanism this reporter provides.
    ///
    /// Called at most once per [`entrypoint`](crate::entrypoint) invocation.
    /// Guarding against double installation across repeated invocations is
    /// the implementation's responsibility.
    fn install(&self);
}

impl<F> CrashReporter for F
where
    F: 'static + Send + Sync + Fn(),
{
    fn install(&self) {
        (self)()
    }
}

/// The type-erased form a reporter takes inside the registry.
///
/// The extra `Display` bound describes the reporter and its registration site
/// for debugging purposes.
trait RegisteredReporter: CrashReporter + fmt::Display {}

struct Registered<R> {
    reporter: R,
    added_at: &'static Location<'static>,
}

impl<R: CrashReporter> CrashReporter for Registered<R> {
    fn install(&self) {
        self.reporter.install();
    }
}

impl<R> fmt::Display for Registered<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Crash reporter {} registered at {}:{}",
            core::any::type_name::<R>(),
            self.added_at.file(),
            self.added_at.line()
        )
    }
}

impl<R: CrashReporter> RegisteredReporter for Registered<R> {}

#[track_caller]
fn reporter_to_untyped<R>(reporter: R) -> Box<dyn RegisteredReporter>
where
    R: CrashReporter,
{
    Box::new(Registered {
        reporter,
        added_at: Location::caller(),
    })
}

fn into_reporter(boxed: Box<dyn RegisteredReporter>) -> Box<dyn CrashReporter> {
    boxed
}

/// Error returned when attempting to register a crash reporter while another
/// one is already registered.
///
/// Contains the reporter that was attempted to be registered, allowing you to
/// recover it if needed.
pub struct ReporterAlreadyRegisteredError(pub Box<dyn CrashReporter>);

impl fmt::Debug for ReporterAlreadyRegisteredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterAlreadyRegisteredError").finish()
    }
}

impl fmt::Display for ReporterAlreadyRegisteredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a crash reporter is already registered globally")
    }
}

impl core::error::Error for ReporterAlreadyRegisteredError {}

/// Registers `reporter` as the process-global crash reporter.
///
/// Registration is first-wins: if a reporter is already registered, the new
/// one is rejected and handed back inside the error.
///
/// See also [`replace`], which swaps reporters without erroring.
///
/// # Examples
///
/// ```rust
/// use crashsite::reporter;
///
/// reporter::register(|| { /* install a panic hook */ })
///     .expect("failed to register crash reporter");
///
/// // A second registration is rejected
/// reporter::register(|| {}).unwrap_err();
/// # reporter::unregister();
/// ```
#[track_caller]
pub fn register<R>(reporter: R) -> Result<(), ReporterAlreadyRegisteredError>
where
    R: CrashReporter,
{
    REPORTER
        .put(reporter_to_untyped(reporter))
        .map_err(|rejected| ReporterAlreadyRegisteredError(into_reporter(rejected)))
}

/// Registers `reporter`, replacing any previously registered reporter.
///
/// Returns the previous reporter, if any. The previous reporter is returned
/// as-is; whatever it already installed stays installed.
///
/// See also [`register`], which errors instead of replacing.
///
/// # Examples
///
/// ```rust
/// use crashsite::reporter;
///
/// reporter::register(|| {}).expect("failed to register crash reporter");
///
/// let previous = reporter::replace(|| {});
/// assert!(previous.is_some());
/// # reporter::unregister();
/// ```
#[track_caller]
pub fn replace<R>(reporter: R) -> Option<Box<dyn CrashReporter>>
where
    R: CrashReporter,
{
    REPORTER.swap(reporter_to_untyped(reporter)).map(into_reporter)
}

/// Removes the registered crash reporter, if any, and returns it.
///
/// After this call, [`entrypoint`](crate::entrypoint) goes back to being a
/// silent no-op. Anything the reporter installed while registered stays
/// installed.
pub fn unregister() -> Option<Box<dyn CrashReporter>> {
    REPORTER.take().map(into_reporter)
}

/// Returns whether a crash reporter is currently registered.
///
/// This is the same presence probe [`entrypoint`](crate::entrypoint)
/// performs, without the install call.
#[must_use]
pub fn is_registered() -> bool {
    REPORTER.with(|reporter| reporter.is_some())
}

/// Probes the registry and installs the registered reporter, if any.
///
/// Absence is an expected, silent outcome.
pub(crate) fn install_registered() {
    REPORTER.with(|reporter| {
        if let Some(reporter) = reporter {
            reporter.install();
        }
    });
}
