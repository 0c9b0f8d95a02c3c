//! Service-declaration analysis: listener filtering and the task driver.

pub mod filter;
pub mod task;

pub use filter::{is_module_listener, resolve_import_prefix};
pub use task::{ServiceAnalysisTask, UDP_MODULE, UDP_ORG};
