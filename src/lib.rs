//! REST API conformance harness for JSONPlaceholder-style resource services.
//!
//! The reusable core is `check` (structural response validation) and `data`
//! (deterministic test payloads). Around it sit the collaborators: an HTTP
//! client (`http`), typed resource helpers (`api`), configuration
//! (`config`), a scenario runner (`runner`), and the built-in per-resource
//! suites (`suite`) driven by the `apiprobe` binary.

pub mod api;
pub mod check;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod http;
pub mod runner;
pub mod suite;

pub use config::HarnessConfig;
pub use error::Error;
pub use http::{ApiClient, ApiResponse};
pub use runner::RunReport;
