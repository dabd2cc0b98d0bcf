use crate::common::*;

#[test]
fn verbose_shows_command_and_skip_message() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    let first = env.run(&["-v"]);
    assert!(first.success);
    assert!(
        first.stderr.contains("-std=c++17 -O2 -Wall -Wextra -o code solution.cpp"),
        "stderr:\n{}",
        first.stderr
    );
    assert!(first.stderr.contains("Built code"), "stderr:\n{}", first.stderr);

    let second = env.run(&["build", "-v"]);
    assert!(second.success);
    assert!(
        second.stderr.contains("'code' is up to date."),
        "stderr:\n{}",
        second.stderr
    );
}

#[test]
fn debug_verbosity_reports_config_source_and_freshness() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    let result = env.run(&["-vv"]);

    assert!(result.success);
    assert!(result.stderr.contains("config:"), "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("(project)"), "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("code is missing"), "stderr:\n{}", result.stderr);
}

#[test]
fn unknown_config_key_warns_but_builds() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_project_config("optimise = true\n")
        .with_source(VALID_SOURCE)
        .build();

    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert!(
        result.stderr.contains("unknown config key 'optimise'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn json_build_emits_start_and_complete() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();

    let result = env.run(&["--json"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.events();
    assert_eq!(events.len(), 2, "{:?}", events);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "build");
    assert_eq!(events[1]["event"], "build_complete");
    assert_eq!(events[1]["artifact"], "code");
    assert_eq!(events[1]["freshness"], "missing");
    assert!(events[1]["duration_ms"].is_u64());
}

#[test]
fn json_second_build_is_skipped() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(VALID_SOURCE)
        .build();
    assert!(env.run(&[]).success);

    let events = env.run(&["build", "--json"]).events();

    assert_eq!(events[1]["event"], "build_skipped");
    assert_eq!(events[1]["freshness"], "up_to_date");
}

#[test]
fn json_captures_warnings_on_success() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(WARNING_SOURCE)
        .build();

    let result = env.run(&["--json"]);

    assert!(result.success);
    let events = result.events();
    assert!(events[1]["diagnostics"]
        .as_str()
        .unwrap()
        .contains("warning: unused variable"));
    assert!(!result.stderr.contains("warning: unused variable"));
}

#[test]
fn json_failure_is_an_error_event_with_diagnostics() {
    let env = TestEnv::builder()
        .with_fake_compiler()
        .with_source(INVALID_SOURCE)
        .build();

    let result = env.run(&["--json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    let error = events.last().unwrap();
    assert_eq!(error["event"], "error");
    assert_eq!(error["command"], "build");
    assert_eq!(error["code"], "build_failure");
    assert_eq!(error["exit_code"], 1);
    assert!(error["diagnostics"]
        .as_str()
        .unwrap()
        .contains("error: expected ';'"));
}

#[test]
fn color_always_colors_the_error_line() {
    let env = TestEnv::builder().build();

    let result = env.run_allowing_color(&["--color", "always"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("source file not found: solution.cpp"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("\x1b["), "stderr:\n{:?}", result.stderr);
}

#[test]
fn color_never_keeps_the_error_line_plain() {
    let env = TestEnv::builder()
        .with_project_config("[output]\ncolor = \"always\"\n")
        .build();

    let result = env.run_allowing_color(&["--color", "never"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("source file not found: solution.cpp"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!result.stderr.contains('\x1b'), "stderr:\n{:?}", result.stderr);
}

#[test]
fn configured_color_applies_to_the_error_line() {
    let env = TestEnv::builder()
        .with_project_config("[output]\ncolor = \"always\"\n")
        .build();

    let result = env.run_allowing_color(&[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("\x1b["), "stderr:\n{:?}", result.stderr);
}

#[test]
fn color_flag_applies_when_the_directory_is_missing() {
    let env = TestEnv::builder().build();

    let result = env.run_allowing_color(&["--color", "always", "-C", "no-such-dir"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("cannot change to directory"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("\x1b["), "stderr:\n{:?}", result.stderr);
}
