//! Test environment builder for isolated ojdrive testing.
//!
//! Provides `TestEnv` - an isolated test environment with temp directories
//! for both the workspace and home, plus helpers to run the ojdrive binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use super::fixtures::FAKE_COMPILER_SCRIPT;

/// Unroutable judge base; any request that escapes a test fails fast.
pub const OFFLINE_API_BASE: &str = "http://127.0.0.1:9/api";

/// Result of running an ojdrive CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid NDJSON line {l:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - Isolated workspace directory
/// - Isolated home directory (user config lives under `home/.config/ojdrive`)
/// - Optional fake compiler installed under `home/bin`
pub struct TestEnv {
    /// Temporary directory the CLI runs in
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Path to the fake compiler, when installed
    pub compiler: Option<PathBuf>,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to the workspace
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to the home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run ojdrive in the workspace
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run ojdrive in the workspace with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run ojdrive from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = self.command(cwd, args, env_vars);
        let output = cmd.output().expect("Failed to execute ojdrive");
        Self::output_to_result(output)
    }

    /// Run ojdrive in the workspace with `NO_COLOR` unset.
    pub fn run_allowing_color(&self, args: &[&str]) -> TestResult {
        let mut cmd = self.command(self.project_root.path(), args, &[]);
        cmd.env_remove("NO_COLOR").env_remove("OJDRIVE_NO_COLOR");
        let output = cmd.output().expect("Failed to execute ojdrive");
        Self::output_to_result(output)
    }

    fn command(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("OJDRIVE_API_BASE", OFFLINE_API_BASE)
            .env_remove("ACMOJ_TOKEN")
            .env_remove("OJDRIVE_VERBOSITY")
            .env_remove("OJDRIVE_TIMEOUT_SECS");

        for proxy in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
            cmd.env_remove(proxy);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the workspace
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a workspace file as bytes
    pub fn read_project_file(&self, relative_path: &str) -> Vec<u8> {
        std::fs::read(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        let full_path = self.home_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Move a workspace file's mtime `secs` seconds into the past
    pub fn age_project_file(&self, relative_path: &str, secs: u64) {
        let time = SystemTime::now() - Duration::from_secs(secs);
        set_mtime(&self.project_path(relative_path), time);
    }

    /// Lines the fake compiler logged, one per invocation
    pub fn compiler_invocations(&self) -> Vec<String> {
        let log = self.home_path("bin/invocations.log");
        std::fs::read_to_string(log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Leftover staging directories in the workspace
    pub fn staging_dirs(&self) -> Vec<String> {
        std::fs::read_dir(self.project_root.path())
            .expect("Failed to list workspace")
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| name.starts_with(".ojdrive-"))
            .collect()
    }
}

pub fn set_mtime(path: &Path, time: SystemTime) {
    std::fs::File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(time))
        .unwrap_or_else(|e| panic!("Failed to set mtime on {}: {}", path.display(), e));
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    source: Option<String>,
    project_config: Option<String>,
    home_config: Option<String>,
    fake_compiler: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            project_config: None,
            home_config: None,
            fake_compiler: false,
        }
    }

    /// Write `solution.cpp` with this content
    pub fn with_source(mut self, content: &str) -> Self {
        self.source = Some(content.to_string());
        self
    }

    /// Extra `ojdrive.toml` content (appended after the fake compiler line)
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// User config at `~/.config/ojdrive/config.toml`
    pub fn with_home_config(mut self, toml: &str) -> Self {
        self.home_config = Some(toml.to_string());
        self
    }

    /// Install the fake compiler and point `[build] compiler` at it
    pub fn with_fake_compiler(mut self) -> Self {
        self.fake_compiler = true;
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        let mut env = TestEnv {
            project_root,
            home_dir,
            compiler: None,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ojdrive")),
        };

        if let Some(source) = &self.source {
            env.write_project_file("solution.cpp", source);
        }

        let mut config = String::new();
        if self.fake_compiler {
            let compiler = install_fake_compiler(env.home_dir.path());
            config.push_str(&format!(
                "[build]\ncompiler = \"{}\"\n",
                compiler.display()
            ));
            env.compiler = Some(compiler);
        }
        if let Some(extra) = &self.project_config {
            config.push_str(extra);
        }
        if !config.is_empty() {
            env.write_project_file("ojdrive.toml", &config);
        }

        if let Some(home_config) = &self.home_config {
            env.write_home_file(".config/ojdrive/config.toml", home_config);
            #[cfg(target_os = "macos")]
            env.write_home_file("Library/Application Support/ojdrive/config.toml", home_config);
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn install_fake_compiler(home: &Path) -> PathBuf {
    let path = home.join("bin").join("fakecc");
    std::fs::create_dir_all(path.parent().expect("bin dir")).expect("Failed to create bin dir");
    std::fs::write(&path, FAKE_COMPILER_SCRIPT).expect("Failed to write fake compiler");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake compiler executable");
    }

    path
}
