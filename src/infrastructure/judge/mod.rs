//! Online judge clients

mod http;

pub use http::{interpret_response, HttpJudgeClient, DEFAULT_API_BASE};
