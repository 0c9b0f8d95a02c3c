//! Host collaborator interfaces.
//!
//! The analysis runs inside some compiler's plugin pipeline. Everything it
//! needs from that compiler is narrowed to the traits here, so the library
//! stays host-agnostic and testable against hand-built snapshots.

use crate::diagnostics::DiagnosticCollector;
use crate::model::{Import, ServiceDecl, ServiceSymbol};
use crate::source::FileId;

/// Semantic queries the host compiler answers during analysis.
pub trait SemanticModel {
    /// Resolve the declared symbol for a service declaration.
    ///
    /// `None` when the compiler produced no symbol for the node, e.g.
    /// because the declaration does not type-check. The analysis treats
    /// that as "not relevant" and stays silent.
    fn service_symbol(&self, service: &ServiceDecl) -> Option<ServiceSymbol>;
}

/// Per-invocation view of one service declaration under analysis.
///
/// Read-only borrows of host-owned data; nothing here outlives the call.
pub struct AnalysisContext<'a> {
    file: FileId,
    service: &'a ServiceDecl,
    imports: &'a [Import],
    semantic: &'a dyn SemanticModel,
}

impl<'a> AnalysisContext<'a> {
    /// Assemble a context for one service declaration.
    pub fn new(
        file: FileId,
        service: &'a ServiceDecl,
        imports: &'a [Import],
        semantic: &'a dyn SemanticModel,
    ) -> Self {
        Self {
            file,
            service,
            imports,
            semantic,
        }
    }

    /// The file containing the declaration.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// The declaration under analysis.
    pub fn service(&self) -> &ServiceDecl {
        self.service
    }

    /// The file's import declarations, in source order.
    pub fn imports(&self) -> &[Import] {
        self.imports
    }

    /// The host's semantic model.
    pub fn semantic(&self) -> &dyn SemanticModel {
        self.semantic
    }
}

/// Downstream shape validator for services that passed the listener filter.
///
/// Implementations check the service against the module's expected
/// resource functions, parameter types, and return types, and report
/// findings through the collector. This crate only decides relevance; the
/// rule set lives with the validator.
pub trait ServiceValidator {
    /// Validate one service declaration.
    ///
    /// `module_prefix` is already qualified with the `:` separator
    /// (`udp:`, or the alias form such as `u:`), ready to prepend to
    /// member names as in `udp:Listener`.
    fn validate(
        &mut self,
        ctx: &AnalysisContext<'_>,
        module_prefix: &str,
        diagnostics: &mut DiagnosticCollector,
    );
}

impl<F> ServiceValidator for F
where
    F: FnMut(&AnalysisContext<'_>, &str, &mut DiagnosticCollector),
{
    fn validate(
        &mut self,
        ctx: &AnalysisContext<'_>,
        module_prefix: &str,
        diagnostics: &mut DiagnosticCollector,
    ) {
        self(ctx, module_prefix, diagnostics)
    }
}
