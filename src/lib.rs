#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    unsafe_code,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! A startup entry hook that activates an optional crash reporter.
//!
//! ## Overview
//!
//! Some processes want a crash reporting mechanism installed as early as
//! possible, but whether one is available depends on the deployment: a
//! desktop build might ship a minidump writer, a server build might ship a
//! panic hook that forwards to an error tracker, and a development build
//! might ship nothing at all. This crate provides the seam: a process-global
//! registry through which a crash reporter makes itself locatable, and a
//! single [`entrypoint`] meant to run first thing at startup that probes the
//! registry and installs whatever is registered.
//!
//! When no reporter is registered, [`entrypoint`] silently does nothing.
//! Absence is an expected, normal condition, not a failure: the hook never
//! errors, never logs, and never produces output of its own.
//!
//! ## Quick Example
//!
//! ```rust
//! // Deployment-specific wiring, e.g. behind a cfg or feature:
//! crashsite::reporter::register(|| {
//!     // register a panic hook, signal handler, minidump writer, ...
//! })
//! .expect("failed to register crash reporter");
//!
//! // First thing in main:
//! crashsite::entrypoint();
//! ```
//!
//! Without the `register` call, `crashsite::entrypoint()` is a no-op and the
//! process starts up exactly as before.
//!
//! ## What This Crate Does Not Do
//!
//! The crate implements no crash reporting of its own. What installation
//! means, whether double installation is safe, and how crashes are actually
//! captured and delivered are all owned by the registered
//! [`CrashReporter`](reporter::CrashReporter). This crate only performs the
//! probe-and-maybe-install step.
//!
//! ## `no_std` Support
//!
//! The crate is `no_std` (with `alloc`) by default, using a spin lock for the
//! registry. Enable the `std` feature to use `std::sync` locks instead.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod reporter;

mod slot;

pub use reporter::CrashReporter;

/// Probes for a registered crash reporter and, if one is present, installs
/// it.
///
/// Intended to be invoked once by the host process's startup sequence,
/// before any work whose failures the reporter should capture.
///
/// - If a reporter is registered, its
///   [`install`](reporter::CrashReporter::install) operation is invoked
///   exactly once.
/// - If no reporter is registered, nothing happens: no error, no log output,
///   no observable side effect.
///
/// The hook itself is stateless. Calling it twice performs the
/// probe-and-maybe-install sequence twice; whether double installation is
/// safe is determined solely by the registered reporter.
///
/// # Panics
///
/// If the registered reporter's `install` panics, the panic propagates to
/// the caller; the hook does not catch or translate it.
///
/// # Examples
///
/// ```rust
/// // With nothing registered, this is a silent no-op:
/// crashsite::entrypoint();
/// ```
pub fn entrypoint() {
    reporter::install_registered();
}
