use crate::process::Process;
use crate::Error;

use std::io::Write;

/// The hello-world module: a named instance whose single activation writes
/// one greeting line to the simulation's output sink.
///
/// Construction has no side effects; hand the built instance to a kernel's
/// register operation to bind its activation into the run. The activation
/// fires once, writes its line, and terminates permanently - it never loops,
/// suspends, or re-registers itself.
#[derive(Debug)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    /// Build a greeter with the provided instance name. Name constraints are
    /// left to the kernel the greeter is later registered with.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<State> Process<State> for Greeter
where
    State: Write,
{
    fn name(&self) -> &str {
        &self.name
    }

    /// Write the greeting to the kernel-owned sink.
    ///
    /// A failure of the underlying sink is the only way this activation can
    /// fail; it surfaces as [`Error::BadActivation`] wrapping the I/O error.
    fn activate(&mut self, state: &mut State) -> crate::Result {
        writeln!(state, "Hello from module '{}'!", self.name).map_err(Error::bad_activation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_instance() {
        let mut greeter = Greeter::new("hello");
        let mut sink: Vec<u8> = Vec::new();

        greeter.activate(&mut sink).unwrap();

        assert_eq!("Hello from module 'hello'!\n", String::from_utf8(sink).unwrap());
    }

    /// Sink that refuses every write.
    struct ClosedSink {}

    impl Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failure_surfaces_as_bad_activation() {
        let mut greeter = Greeter::new("hello");
        let result = greeter.activate(&mut ClosedSink {});

        assert!(matches!(result, Err(Error::BadActivation(_))));
    }
}
