/// Errors that may be encountered while setting up or running a simulation.
///
/// The name variants originate from [`EventKernel::register()`], which
/// rejects instance names the kernel cannot accept. The [`BadActivation`]
/// variant originates from client code, providing a wrapper that can pass
/// through [`EventKernel::run_to_quiescence()`] in a type-safe manner.
/// Invoking [`std::error::Error::source()`] on it acquires a shared
/// reference to the wrapped error for handling on the client side.
///
/// [`EventKernel::register()`]: crate::EventKernel::register
/// [`EventKernel::run_to_quiescence()`]: crate::EventKernel::run_to_quiescence
/// [`BadActivation`]: Error::BadActivation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The kernel rejected a process with an empty instance name.
    #[error("process instance name must not be empty")]
    EmptyName,
    /// The kernel rejected a process whose instance name is already
    /// registered.
    #[error("process instance name '{0}' is already registered")]
    DuplicateName(String),
    /// A client-generated error was encountered while activating a process.
    /// Call `source()` or unpack this value to handle it directly.
    #[error("error while activating process: {0}")]
    BadActivation(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap a client error for propagation out of a process activation.
    pub fn bad_activation<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::BadActivation(Box::new(error))
    }
}

/// [`std::result::Result`]`<(), `[`Error`]`>`
///
/// A type alias that simplifies the signatures of various functions in
/// simgreet.
pub type Result = std::result::Result<(), Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_duplicate_name() {
        let e = Error::DuplicateName("hello".to_string());
        assert_eq!(e.to_string(), "process instance name 'hello' is already registered");
    }

    #[test]
    fn display_empty_name() {
        assert!(Error::EmptyName.to_string().contains("must not be empty"));
    }

    #[test]
    fn bad_activation_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
        let e = Error::bad_activation(io);
        assert!(e.to_string().contains("sink closed"));
        assert!(e.source().is_some());
    }
}
