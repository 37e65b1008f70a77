//! Integration tests for the urtd runner
//!
//! These run the built `urtd` binary against programs written to temporary
//! files and check exit codes, program output and diagnostics.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;
use urt_format::parse_program;
use urt_host::BufferedHost;
use urt_runtime::ExecutionOutcome;
use urtd::{Daemon, FAULT_EXIT_CODE, UrtdConfig, load_program};

fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../demos")
        .join(name)
}

fn program_file(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".urt")
        .tempfile()
        .expect("Failed to create temporary program");
    file.write_all(source.as_bytes())
        .expect("Failed to write temporary program");
    file
}

fn urtd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_urtd"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute urtd")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_demo_exits_with_sum() {
    let demo = demo_path("unwind_demo.urt");
    let output = urtd(&[demo.to_str().unwrap(), "--input", "7", "--input", "8"]);

    assert_eq!(output.status.code(), Some(15));
    let out = stdout(&output);
    assert!(out.contains("=> inside add catch handler"));
    assert!(out.contains("=> inside prevent 14 defer block"));
    assert!(out.contains("VM exited with code 15"));
}

#[test]
fn test_demo_reports_caught_fourteen() {
    let demo = demo_path("unwind_demo.urt");
    let output = urtd(&[demo.to_str().unwrap(), "--input", "7", "--input", "7"]);

    let out = stdout(&output);
    assert!(out.contains("=> 42"));
    assert!(out.contains("VM exited with code 3333"));
}

#[test]
fn test_numbers_are_read_from_stdin() {
    let file = program_file("getnumber\ngetnumber\nadd\nexit\n");
    let mut child = Command::new(env!("CARGO_BIN_EXE_urtd"))
        .arg(file.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn urtd");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"3\n4\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert!(stdout(&output).starts_with("enter number: enter number: "));
}

#[test]
fn test_unhandled_exception_exits_with_fault_code() {
    let file = program_file(".main\n    setupdefer cleanup done\n    throw\n.cleanup\n    load \"cleanup\"\n    print\n    defercontinue\n.done\n    load 0\n    exit\n");
    let output = urtd(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(FAULT_EXIT_CODE));
    assert!(stderr(&output).contains("Unhandled exception"));
    let out = stdout(&output);
    assert!(!out.contains("cleanup"));
    assert!(!out.contains("VM exited"));
}

#[test]
fn test_disasm_prints_reparseable_listing() {
    let demo = demo_path("unwind_demo.urt");
    let output = urtd(&[demo.to_str().unwrap(), "--disasm"]);

    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains("setupcatch"));
    assert_eq!(
        parse_program(&listing).unwrap(),
        load_program(&demo).unwrap()
    );
}

#[test]
fn test_parse_error_names_the_line() {
    let file = program_file("load 1\nfrobnicate\n");
    let output = urtd(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(FAULT_EXIT_CODE));
    let err = stderr(&output);
    assert!(err.contains("Failed to parse program"));
    assert!(err.contains("line 2"));
}

#[test]
fn test_unresolved_label_is_reported_before_running() {
    let file = program_file("load \"ran\"\nprint\njmp nowhere\n");
    let output = urtd(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(FAULT_EXIT_CODE));
    assert!(stderr(&output).contains("at instruction 0002"));
    assert!(!stdout(&output).contains("ran"));
}

#[test]
fn test_fuel_limit_stops_a_spinning_program() {
    let file = program_file(".spin\n    jmp spin\n");
    let output = urtd(&[file.path().to_str().unwrap(), "--fuel", "100"]);

    assert_eq!(output.status.code(), Some(FAULT_EXIT_CODE));
    assert!(stderr(&output).contains("Fuel exhausted"));
}

#[test]
fn test_call_depth_flag() {
    let file = program_file(".main\n    call main\n");
    let output = urtd(&[file.path().to_str().unwrap(), "--max-call-depth", "8"]);

    assert_eq!(output.status.code(), Some(FAULT_EXIT_CODE));
    assert!(stderr(&output).contains("Call stack exhausted"));
}

#[test]
fn test_locals_flag() {
    let file = program_file("load 1\nwritelocal 6\nload 0\nexit\n");
    let path = file.path().to_str().unwrap();

    assert_eq!(urtd(&[path]).status.code(), Some(FAULT_EXIT_CODE));
    assert_eq!(urtd(&[path, "--locals", "8"]).status.code(), Some(0));
}

#[test]
fn test_stats_are_printed_to_stderr() {
    let demo = demo_path("defer_order.urt");
    let output = urtd(&[demo.to_str().unwrap(), "--stats"]);

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("defers entered:    3"));
    assert!(err.contains("returns:           1"));
    assert!(!stdout(&output).contains("defers entered"));
}

#[test]
fn test_missing_file() {
    let output = urtd(&["/nonexistent/program.urt"]);

    assert_eq!(output.status.code(), Some(FAULT_EXIT_CODE));
    assert!(stderr(&output).contains("Failed to read program file"));
}

#[test]
fn test_daemon_runs_loaded_program() {
    let file = program_file(".main\n    call f\n    exit\n.f\n    setupdefer d after\n    load 4\n    ret\n.d\n    load \"deferred\"\n    print\n    defercontinue\n.after\n    abort\n");
    let program = load_program(file.path()).unwrap();

    let daemon = Daemon::new(UrtdConfig::default());
    let (report, host) = daemon.execute(&program, BufferedHost::new());

    assert_eq!(report.outcome, Ok(ExecutionOutcome::Exited(4)));
    assert_eq!(report.exit_code(), 4);
    assert_eq!(report.stats.defers_entered, 1);
    assert_eq!(host.output(), &["=> deferred".to_string()]);
}
