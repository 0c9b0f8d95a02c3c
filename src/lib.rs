//! # udplint
//!
//! Analysis library for compiler plugins that validate UDP-bound services.
//!
//! Given a per-invocation snapshot of one service declaration, the library
//! decides whether the service binds a listener declared by the
//! `ballerina/udp` module, resolves the import prefix the file uses for
//! that module, and hands both to a downstream shape validator.
//!
//! The host compiler is abstracted behind the traits in [`host`], so the
//! whole pipeline runs against hand-built snapshots in tests.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis → the task driver + listener/import resolution
//!   ↓
//! host     → collaborator traits (semantic model, shape validator)
//!   ↓
//! model    → snapshot types (ModuleId, TypeDesc, Import)
//!   ↓
//! diagnostics → reporting channel for validator findings
//!   ↓
//! source, text → file registry and positions
//! ```

pub mod analysis;
pub mod diagnostics;
pub mod host;
pub mod model;
pub mod source;
pub mod text;

// Re-export the operations and types most hosts touch
pub use analysis::{ServiceAnalysisTask, is_module_listener, resolve_import_prefix};
pub use host::{AnalysisContext, SemanticModel, ServiceValidator};
pub use model::{Import, ModuleId, ServiceDecl, ServiceSymbol, TypeDesc, TypeRef};
pub use source::{FileId, FileSet};
