//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::time::Duration;

use crate::application::{BuildUseCase, CleanUseCase, StatusUseCase, SubmitUseCase};
use crate::config::JudgeConfig;
use crate::error::OjResult;
use crate::infrastructure::{HttpJudgeClient, LocalFs, ProcessCompiler};

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs, ProcessCompiler>;

/// Type alias for the concrete SubmitUseCase with all dependencies
pub type ConcreteSubmitUseCase = SubmitUseCase<LocalFs, HttpJudgeClient>;

/// Create a build use case that spawns the real compiler
pub fn create_build_use_case() -> ConcreteBuildUseCase {
    BuildUseCase::new(LocalFs::new(), ProcessCompiler::new())
}

/// Create a clean use case on the local file system
pub fn create_clean_use_case() -> CleanUseCase<LocalFs> {
    CleanUseCase::new(LocalFs::new())
}

/// Create an HTTP judge client from configuration
pub fn create_judge_client(config: &JudgeConfig, token: &str) -> OjResult<HttpJudgeClient> {
    Ok(HttpJudgeClient::new(
        config.api_base.clone(),
        token,
        Duration::from_secs(config.timeout_secs),
    )?)
}

/// Create a submit use case talking to the configured judge
pub fn create_submit_use_case(config: &JudgeConfig, token: &str) -> OjResult<ConcreteSubmitUseCase> {
    Ok(SubmitUseCase::new(
        LocalFs::new(),
        create_judge_client(config, token)?,
    ))
}

/// Create a status use case talking to the configured judge
pub fn create_status_use_case(
    config: &JudgeConfig,
    token: &str,
) -> OjResult<StatusUseCase<HttpJudgeClient>> {
    Ok(StatusUseCase::new(create_judge_client(config, token)?))
}
