//! End-to-end tests for the MiniLang interpreter binary.
//!
//! These drive the compiled `minilang` executable as a subprocess
//! against script files on disk, the way a user actually runs it.

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

/// Writes `source` to a temp `.ml` file, runs the `minilang` binary
/// against it, and returns (stdout, stderr, success).
fn run_script(source: &str) -> (String, String, bool) {
    let mut file = NamedTempFile::new().expect("create temp script file");
    file.write_all(source.as_bytes()).expect("write script");

    let output = Command::new(env!("CARGO_BIN_EXE_minilang"))
        .arg(file.path())
        .output()
        .expect("run minilang binary");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn arithmetic_respects_precedence() {
    let (stdout, _, ok) = run_script("print 2 + 3 * 4;");
    assert!(ok);
    assert_eq!(stdout, "14\n");
}

#[test]
fn subtraction_is_left_associative() {
    let (stdout, _, ok) = run_script("print 10 - 3 - 2;");
    assert!(ok);
    assert_eq!(stdout, "5\n");
}

#[test]
fn division_promotes_to_float_even_for_two_ints() {
    let (stdout, _, ok) = run_script("print 7 / 2;");
    assert!(ok);
    assert_eq!(stdout, "3.5\n");
}

#[test]
fn division_to_a_whole_number_still_renders_as_a_float() {
    let (stdout, _, ok) = run_script("print 4 / 2;");
    assert!(ok);
    assert_eq!(stdout, "2.0\n");
}

#[test]
fn multiplication_of_two_ints_has_no_decimal_point() {
    let (stdout, _, ok) = run_script("print 6 * 7;");
    assert!(ok);
    assert_eq!(stdout, "42\n");
}

#[test]
fn block_scoping_shadows_without_leaking() {
    let (stdout, _, ok) = run_script(
        r#"
        let x = 1;
        {
            let x = 2;
            print x;
        }
        print x;
        "#,
    );
    assert!(ok);
    assert_eq!(stdout, "2\n1\n");
}

#[test]
fn assignment_walks_outward_to_the_nearest_binding() {
    let (stdout, _, ok) = run_script(
        r#"
        let x = 1;
        {
            x = 9;
        }
        print x;
        "#,
    );
    assert!(ok);
    assert_eq!(stdout, "9\n");
}

#[test]
fn while_loop_counts_up() {
    let (stdout, _, ok) = run_script(
        r#"
        let i = 0;
        while (i < 3) {
            print i;
            i = i + 1;
        }
        "#,
    );
    assert!(ok);
    assert_eq!(stdout, "0\n1\n2\n");
}

#[test]
fn undefined_variable_is_a_runtime_error_reported_on_stderr() {
    let (stdout, stderr, ok) = run_script("print y;");
    assert!(!ok);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Undefined variable 'y'"));
}

#[test]
fn dangling_else_binds_to_the_nearest_if() {
    let (stdout, _, ok) = run_script("if (true) if (false) print 1; else print 2;");
    assert!(ok);
    assert_eq!(stdout, "2\n");
}

#[test]
fn zero_is_truthy() {
    let (stdout, _, ok) = run_script("if (0) { print \"truthy\"; } else { print \"falsy\"; }");
    assert!(ok);
    assert_eq!(stdout, "truthy\n");
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    let (_, stderr, ok) = run_script("print 1 / 0;");
    assert!(!ok);
    assert!(stderr.contains("Division by zero"));
}

#[test]
fn nil_prints_as_null() {
    let (stdout, _, ok) = run_script("print null;");
    assert!(ok);
    assert_eq!(stdout, "null\n");
}

#[test]
fn unreadable_file_is_a_clean_failure_not_a_panic() {
    let output = Command::new(env!("CARGO_BIN_EXE_minilang"))
        .arg("/nonexistent/path/to/script.ml")
        .output()
        .expect("run minilang binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
