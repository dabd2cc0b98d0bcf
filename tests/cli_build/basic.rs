use std::os::unix::fs::PermissionsExt;
use std::process::Command;

use crate::common::*;

#[test]
fn bare_invocation_builds_executable_artifact() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    let result = env.run(&[]);

    assert!(result.success, "build failed:\n{}", result.combined_output());
    let artifact = env.project_path("code");
    assert!(artifact.is_file(), "artifact `code` should exist");

    let mode = std::fs::metadata(&artifact).unwrap().permissions().mode();
    assert!(mode & 0o111 != 0, "artifact should be executable: {:o}", mode);

    let run = Command::new(&artifact).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&run.stdout), "Hello from solution\n");
}

#[test]
fn build_subcommand_matches_bare_invocation() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    let result = env.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("code").is_file());
}

#[test]
fn flags_are_passed_verbatim_before_output_and_source() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    assert!(env.run(&[]).success);

    let invocations = env.compiler_invocations();
    assert_eq!(invocations.len(), 1, "{:?}", invocations);

    let args = &invocations[0];
    assert!(
        args.starts_with("-std=c++17 -O2 -Wall -Wextra -o .ojdrive-"),
        "unexpected arguments: {}",
        args
    );
    assert!(args.ends_with("/code solution.cpp"), "unexpected arguments: {}", args);
}

#[test]
fn configured_flags_replace_defaults_in_order() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_project_config("flags = [\"-O0\", \"-g\", \"-DLOCAL\"]\n")
        .with_source(VALID_SOURCE)
        .build();

    assert!(env.run(&[]).success);

    let invocations = env.compiler_invocations();
    assert!(
        invocations[0].starts_with("-O0 -g -DLOCAL -o "),
        "unexpected arguments: {}",
        invocations[0]
    );
}

#[test]
fn success_is_silent_by_default() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    let result = env.run(&[]);

    assert!(result.success);
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "");
}

#[test]
fn no_staging_directories_are_left_behind() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    assert!(env.run(&[]).success);
    assert!(env.staging_dirs().is_empty(), "{:?}", env.staging_dirs());
}

#[test]
fn directory_flag_runs_in_another_workspace() {
    let env = TestEnv::builder().with_fake_compiler().build();
    env.write_project_file("work/solution.cpp", VALID_SOURCE);
    let config = env.project_path("ojdrive.toml");

    let result = env.run(&["-C", "work", "--config", config.to_str().unwrap()]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("work/code").is_file());
    assert!(!env.project_path("code").exists());
}

#[test]
fn output_path_can_live_in_a_subdirectory() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_project_config("output = \"bin/solution\"\n")
        .with_source(VALID_SOURCE)
        .build();
    std::fs::create_dir_all(env.project_path("bin")).unwrap();

    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("bin/solution").is_file());
}
