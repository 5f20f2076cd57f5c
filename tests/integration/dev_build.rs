//! Dev-mode compilation fallback, success and failure paths.

use std::fs;

use tempfile::tempdir;

use crate::common::{fake_go_script, install_launcher_at, run_launcher, stdout_of, write_script};

fn configure_build_tool(install_dir_config: &std::path::Path, tool: &std::path::Path) {
    fs::write(
        install_dir_config,
        format!("[build]\ntool = \"{}\"\n", tool.display()),
    )
    .expect("can write launcher config");
}

#[test]
fn empty_checkout_compiles_and_runs_the_dev_binary() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    let tool = temp.path().join("tools/fake-go");
    write_script(&tool, fake_go_script());
    configure_build_tool(&temp.path().join("better_tinker/launcher.toml"), &tool);

    let output = run_launcher(&launcher, &["checkpoints"], &[]);

    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(
        stdout.contains("Attempting to compile from source"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("Compilation successful"), "stdout: {stdout}");
    assert!(stdout.contains("built-child:checkpoints"), "stdout: {stdout}");
    assert!(
        temp.path().join("tinker-cli").exists(),
        "dev binary is written to the project root"
    );
}

#[test]
fn failing_build_exits_1_and_lists_checked_paths() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    let tool = temp.path().join("tools/fake-go");
    write_script(&tool, "#!/bin/sh\nexit 3\n");
    configure_build_tool(&temp.path().join("better_tinker/launcher.toml"), &tool);

    let output = run_launcher(&launcher, &[], &[]);

    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(1), "stdout: {stdout}");
    assert!(stdout.contains("Build failed"), "stdout: {stdout}");
    assert!(stdout.contains("Paths checked"), "stdout: {stdout}");
    assert!(stdout.contains("bin"), "stdout: {stdout}");
}

#[test]
fn missing_build_tool_is_a_resolution_failure() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    configure_build_tool(
        &temp.path().join("better_tinker/launcher.toml"),
        &temp.path().join("tools/not-installed"),
    );

    let output = run_launcher(&launcher, &[], &[]);

    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(1), "stdout: {stdout}");
    assert!(stdout.contains("Paths checked"), "stdout: {stdout}");
}

#[test]
fn disabled_auto_build_skips_compilation_entirely() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    let tool = temp.path().join("tools/fake-go");
    write_script(&tool, fake_go_script());
    fs::write(
        temp.path().join("better_tinker/launcher.toml"),
        format!(
            "[build]\ntool = \"{}\"\nauto_build = false\n",
            tool.display()
        ),
    )
    .expect("can write launcher config");

    let output = run_launcher(&launcher, &[], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        !temp.path().join("tinker-cli").exists(),
        "no dev binary may be produced"
    );
}
