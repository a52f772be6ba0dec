//! # Overview
//!
//! simgreet is a hello-world smoke test for a discrete-event simulation
//! environment: one module with one triggered process, and a kernel that
//! runs it to completion. The program builds a single [`Greeter`] instance
//! named `"hello"`, registers it, and runs the kernel until quiescence,
//! producing exactly one greeting line on standard output.
//!
//! The pieces are deliberately small, but they keep the seams a real
//! simulation program would have:
//!
//! * The [`Process`] trait describes a named, schedulable activity that
//!   receives exclusive access to the simulation's state while it runs.
//! * The [`Kernel`] trait is the two-operation scheduler contract - register
//!   an activity, run until quiescent - so that a full discrete-event kernel
//!   and a trivial stub are interchangeable behind it.
//! * The [`EventKernel`] struct is that trivial stub: a single-shot
//!   scheduler that activates each registered process exactly once, in
//!   registration order, and reports quiescence when its queue is empty.
//! * The [`Greeter`] struct is the one module in the system; its activation
//!   writes the greeting and terminates permanently.
//!
//! Registration is an explicit call rather than a constructor side effect:
//! build the module, then hand it to the kernel. Anything the kernel rejects
//! (an empty or duplicate instance name) surfaces as an [`Error`] at the
//! registration site, before the run starts.

mod error;
mod greeter;
mod kernel;
mod process;

pub use error::{Error, Result};
pub use greeter::Greeter;
pub use kernel::{EventKernel, Kernel};
pub use process::Process;

/// Initialize the tracing subscriber for diagnostic logging.
///
/// Call this at the start of your program to enable logging. The filter
/// honors `RUST_LOG` when set and falls back to the provided level
/// otherwise. Output goes to stderr: stdout is reserved for simulation
/// output, and the one-line greeting contract must hold under any filter.
pub fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
