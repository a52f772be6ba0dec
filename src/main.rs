//! Build one `Greeter` module named `"hello"` over a stdout-backed kernel,
//! then run the kernel to quiescence - the greeting prints as its single
//! activation executes. Command-line arguments are accepted but have no
//! effect on the run.

use simgreet::{EventKernel, Greeter};

use std::io;

fn main() {
    simgreet::init_logging("warn");

    let mut kernel = EventKernel::new(io::stdout());
    kernel
        .register(Greeter::new("hello"))
        .expect("a fresh kernel accepts the first well-formed name");
    kernel.run_to_quiescence().expect("writing the greeting to stdout should not fail");
}
