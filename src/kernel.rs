use crate::process::Process;
use crate::Error;

use std::collections::VecDeque;
use std::fmt::Formatter;

/// The two-operation contract between a simulation program and its
/// scheduler.
///
/// A scheduler accepts processes at setup time and later runs every pending
/// activation until none remain. Keeping the contract this narrow means a
/// full discrete-event kernel and a trivial test stub are interchangeable
/// behind it: client code such as a module's setup path can be written once
/// against `&mut impl Kernel<State>` and exercised against either.
pub trait Kernel<State> {
    /// Hand a process to the scheduler. The scheduler guarantees the process
    /// will be activated at least once during [`run_to_quiescence()`].
    ///
    /// # Errors
    ///
    /// Implementations may reject a process whose instance name they cannot
    /// accept; see [`EventKernel::register_boxed()`] for what this crate's
    /// kernel enforces.
    ///
    /// [`run_to_quiescence()`]: Kernel::run_to_quiescence
    /// [`EventKernel::register_boxed()`]: EventKernel::register_boxed
    fn register_boxed(&mut self, process: Box<dyn Process<State>>) -> crate::Result;

    /// Execute pending activations until none remain, then return.
    ///
    /// # Errors
    ///
    /// Errors raised by individual activations are forwarded to the caller
    /// unchanged.
    fn run_to_quiescence(&mut self) -> crate::Result;
}

/// A single-shot scheduler: every registered process is activated exactly
/// once, in registration order.
///
/// The defining struct for a simulation run in simgreet. An [`EventKernel`]
/// owns both its state and its queue of pending activations, granting each
/// process exclusive access to the state while it runs. There is no clock
/// and no rescheduling interface, so the queue only drains: once
/// [`run_to_quiescence()`] returns, the kernel is quiescent and stays that
/// way.
///
/// The expected workflow is:
///
/// 1. Build the state the processes will act on - for the greeting program,
///    the output sink.
/// 2. Pass it to [`new()`].
/// 3. Register at least one process.
/// 4. Call [`run_to_quiescence()`]. Handle any error it might return.
/// 5. Use the [`state()`] or [`state_mut()`] accessors to finish processing
///    the results.
///
/// [`new()`]: EventKernel::new
/// [`run_to_quiescence()`]: EventKernel::run_to_quiescence
/// [`state()`]: EventKernel::state
/// [`state_mut()`]: EventKernel::state_mut
#[derive(Debug)]
pub struct EventKernel<State> {
    /// Processes awaiting their single activation, in registration order.
    pending: VecDeque<Box<dyn Process<State>>>,
    /// Instance names accepted so far, kept for duplicate detection.
    registered_names: Vec<String>,
    /// The current state of the simulation. Exclusive access will be granted
    /// to each process that activates.
    state: State,
}

impl<State> EventKernel<State> {
    /// Initialize a kernel with the provided state and no pending
    /// activations.
    pub fn new(state: State) -> Self {
        Self {
            pending: VecDeque::new(),
            registered_names: Vec::new(),
            state,
        }
    }

    /// Hand the provided process to the kernel, queueing its single
    /// activation.
    ///
    /// # Errors
    ///
    /// If the process's instance name is empty, returns [`Error::EmptyName`];
    /// if a process with the same name is already registered, returns
    /// [`Error::DuplicateName`]. Either way the queue is not modified.
    pub fn register<ProcessType>(&mut self, process: ProcessType) -> crate::Result
    where
        ProcessType: Process<State> + 'static,
    {
        self.register_boxed(Box::new(process))
    }

    /// Hand the provided pre-boxed process to the kernel, queueing its
    /// single activation.
    ///
    /// # Errors
    ///
    /// If the process's instance name is empty, returns [`Error::EmptyName`];
    /// if a process with the same name is already registered, returns
    /// [`Error::DuplicateName`]. Either way the queue is not modified.
    pub fn register_boxed(&mut self, process: Box<dyn Process<State>>) -> crate::Result {
        let name = process.name();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.registered_names.iter().any(|registered| registered == name) {
            return Err(Error::DuplicateName(name.to_string()));
        }

        tracing::debug!(name, "registered process");
        self.registered_names.push(name.to_string());
        self.pending.push_back(process);
        Ok(())
    }

    /// Activate pending processes, one at a time, in registration order,
    /// until the queue is empty.
    ///
    /// Follows this loop:
    ///
    /// 1. Attempt to pop the next process from the queue. If there isn't
    ///    one, the kernel is quiescent: return `Ok(())`.
    /// 2. Pass an exclusive reference to the state to
    ///    [`process.activate()`].
    ///     1. If an error is returned, forward it as-is to the caller.
    ///     2. Otherwise, go back to step 1.
    ///
    /// Calling this method on an already quiescent kernel is a no-op.
    ///
    /// # Errors
    ///
    /// Errors raised during process activations are passed back to the
    /// caller unchanged; see [`Error::BadActivation`].
    ///
    /// [`process.activate()`]: Process::activate
    /// [`Error::BadActivation`]: crate::Error::BadActivation
    pub fn run_to_quiescence(&mut self) -> crate::Result {
        while let Some(mut process) = self.pending.pop_front() {
            tracing::debug!(name = process.name(), "activating process");
            process.activate(&mut self.state)?;
        }

        tracing::debug!("kernel quiescent");
        Ok(())
    }

    /// The number of activations still waiting to run.
    pub fn pending_activations(&self) -> usize {
        self.pending.len()
    }

    /// Get a shared reference to the simulation state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Get an exclusive reference to the simulation state.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl<State> Kernel<State> for EventKernel<State> {
    fn register_boxed(&mut self, process: Box<dyn Process<State>>) -> crate::Result {
        EventKernel::register_boxed(self, process)
    }

    fn run_to_quiescence(&mut self) -> crate::Result {
        EventKernel::run_to_quiescence(self)
    }
}

impl<State> std::fmt::Display for EventKernel<State> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "EventKernel with {} pending activations", self.pending.len())
    }
}
