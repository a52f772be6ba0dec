use std::fmt::Debug;

/// A named behavior that occurs within a simulation.
///
/// This trait has one required method describing what happens when the
/// implementing type is activated by the kernel, plus an accessor for the
/// instance name the process was constructed with. The trait is generic over
/// the type used to represent simulation state so that the kernel can grant
/// each activation exclusive access to whatever state your use case owns -
/// for the greeting program that state is simply the output sink.
///
/// Requiring implementors to be [`Debug`] enables printing the full contents
/// of a kernel's pending queue when necessary.
pub trait Process<State>: Debug {
    /// The human-readable instance name of this process. The kernel checks
    /// it once, at registration; it is not consulted again during the run.
    fn name(&self) -> &str;

    /// Run the process's single activation. The kernel will invoke this
    /// method during [`EventKernel::run_to_quiescence()`] exactly once for
    /// each registered process, in registration order, with exclusive
    /// access to the simulation state. After returning, the process is
    /// dropped - there is no rescheduling interface and no re-trigger.
    ///
    /// # Errors
    ///
    /// Implementations that can fail at runtime should wrap the underlying
    /// error with [`Error::bad_activation`] so that
    /// [`EventKernel::run_to_quiescence()`] can bubble it back up to the
    /// client unchanged.
    ///
    /// [`EventKernel::run_to_quiescence()`]: crate::EventKernel::run_to_quiescence
    /// [`Error::bad_activation`]: crate::Error::bad_activation
    fn activate(&mut self, state: &mut State) -> crate::Result;
}
