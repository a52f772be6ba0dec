use std::process::{Command, Output};

/// Run the built binary with the given arguments. `RUST_LOG` is cleared so
/// an ambient filter in the test environment cannot affect the comparison.
fn run_program(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simgreet"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("greeting binary should spawn")
}

#[test]
fn program_exits_zero_with_one_greeting_line() {
    let output = run_program(&[]);

    assert!(output.status.success(), "expected exit code 0, got {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(1, stdout.lines().count(), "expected exactly one line on stdout: {stdout:?}");
    let line = stdout.lines().next().unwrap();
    assert!(line.contains("Hello"), "greeting should contain 'Hello': {line}");
    assert!(line.contains("hello"), "greeting should name the instance: {line}");
}

#[test]
fn arguments_do_not_change_behavior() {
    let bare = run_program(&[]);
    let with_args = run_program(&["--frobnicate", "extra", "arguments"]);

    assert!(bare.status.success());
    assert!(with_args.status.success());
    assert_eq!(
        bare.stdout, with_args.stdout,
        "stdout should be identical regardless of arguments"
    );
}

#[test]
fn repeated_runs_are_deterministic() {
    let first = run_program(&[]);
    let second = run_program(&[]);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}
