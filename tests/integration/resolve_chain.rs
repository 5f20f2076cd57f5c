//! End-to-end coverage of the candidate chain, permission repair, and
//! argument/exit-code forwarding.

use std::fs;

use tempfile::tempdir;

use crate::common::{
    fake_child_script, install_launcher_at, packaged_name, run_launcher, stdout_of, write_script,
};

#[test]
fn packaged_binary_runs_with_forwarded_args_and_exit_code() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    write_script(
        &temp
            .path()
            .join("better_tinker/bin")
            .join(packaged_name()),
        &fake_child_script(7),
    );

    let output = run_launcher(&launcher, &["runs", "list", "-v"], &[]);

    assert_eq!(output.status.code(), Some(7), "child exit code is mirrored");
    assert!(
        stdout_of(&output).contains("child:runs list -v"),
        "stdout: {}",
        stdout_of(&output)
    );
}

#[test]
fn missing_execute_bit_is_repaired_before_launch() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    let child = temp
        .path()
        .join("better_tinker/bin")
        .join(packaged_name());
    write_script(&child, &fake_child_script(0));
    fs::set_permissions(&child, fs::Permissions::from_mode(0o644))
        .expect("can drop the execute bits");

    let output = run_launcher(&launcher, &[], &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("child:"));
    let mode = fs::metadata(&child)
        .expect("can stat child")
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755, "read/write bits survive the repair");
}

#[test]
fn local_build_is_selected_when_the_packaged_binary_is_absent() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "pkg");
    write_script(
        &temp
            .path()
            .join("better_tinker/bin")
            .join(packaged_name()),
        &fake_child_script(3),
    );

    let output = run_launcher(&launcher, &[], &[]);

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn dev_binary_is_selected_before_any_compilation() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "pkg");
    write_script(&temp.path().join("tinker-cli"), &fake_child_script(5));
    // A build tool that would clobber the exit code if it ever ran.
    write_script(&temp.path().join("fake-go"), "#!/bin/sh\nexit 99\n");
    fs::write(
        temp.path().join("pkg/launcher.toml"),
        format!(
            "[build]\ntool = \"{}\"\n",
            temp.path().join("fake-go").display()
        ),
    )
    .expect("can write launcher config");

    let output = run_launcher(&launcher, &[], &[]);

    assert_eq!(output.status.code(), Some(5), "dev binary wins over build");
}

#[test]
fn binary_override_bypasses_the_chain() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    let custom = temp.path().join("elsewhere/custom-tinker");
    write_script(&custom, &fake_child_script(9));

    let output = run_launcher(
        &launcher,
        &["usage"],
        &[("TINKER_CLI_BIN", custom.to_str().expect("utf-8 path"))],
    );

    assert_eq!(output.status.code(), Some(9));
    assert!(stdout_of(&output).contains("child:usage"));
}

#[test]
fn dangling_override_fails_listing_only_that_path() {
    let temp = tempdir().expect("can create temp directory");
    let launcher = install_launcher_at(temp.path(), "better_tinker");
    let missing = temp.path().join("not-there");

    let output = run_launcher(
        &launcher,
        &[],
        &[("TINKER_CLI_BIN", missing.to_str().expect("utf-8 path"))],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Paths checked"), "stdout: {stdout}");
    assert!(stdout.contains("not-there"), "stdout: {stdout}");
}
