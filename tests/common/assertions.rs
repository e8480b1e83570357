//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::app::TestOutput;

/// Assert the command succeeded and printed exactly `expected` on stdout
pub fn assert_prints(output: &TestOutput, expected: &str) {
    assert!(
        output.success(),
        "Expected success, got {}. Stderr: {}",
        output.status,
        output.stderr
    );
    assert_eq!(output.line(), expected);
}

/// Assert the command failed with exit code 1 and stderr mentions `needle`
pub fn assert_fails_with(output: &TestOutput, needle: &str) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "Expected exit code 1. Stdout: {} Stderr: {}",
        output.stdout,
        output.stderr
    );
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to contain {needle:?}, got: {}",
        output.stderr
    );
    assert!(output.stdout.is_empty(), "Expected no stdout, got: {}", output.stdout);
}

/// Assert stderr holds a framed window block for `title` (e.g. "invert output")
pub fn assert_framed(output: &TestOutput, title: &str) {
    let rule = "=".repeat(25);
    assert!(
        output.stderr.contains(&format!("{rule}\n{title}:\n{rule}\n")),
        "Expected framed block titled {title:?}, got: {}",
        output.stderr
    );
    assert!(
        output.stderr.contains("Press <return> to close"),
        "Expected close prompt, got: {}",
        output.stderr
    );
}
