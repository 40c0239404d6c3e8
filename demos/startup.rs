//! Wires a panic-hook-based crash reporter into process startup.
//!
//! Run with: `cargo run --example startup`

use std::panic;

fn main() {
    // Deployment-specific wiring: this build ships a reporter that chains a
    // reporting step onto the default panic hook.
    crashsite::reporter::register(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            default_hook(panic_info);
            eprintln!("crash reported: {panic_info}");
        }));
    })
    .expect("failed to register crash reporter");

    // First thing at startup: probe and install whatever is registered.
    crashsite::entrypoint();

    let caught = panic::catch_unwind(|| panic!("demo crash"));
    assert!(caught.is_err());
    eprintln!("process still running after the demo crash");
}
