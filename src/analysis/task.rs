//! The per-service analysis task.
//!
//! Mirrors how a host compiler drives plugin analysis: the task is invoked
//! once per service declaration with a fresh [`AnalysisContext`], decides
//! whether the service is relevant to the target module, and if so runs
//! the downstream shape validator exactly once.

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::diagnostics::DiagnosticCollector;
use crate::host::{AnalysisContext, ServiceValidator};
use crate::model::ModuleId;

use super::{is_module_listener, resolve_import_prefix};

/// Organization publishing the target module.
pub const UDP_ORG: &str = "ballerina";
/// Name of the target module.
pub const UDP_MODULE: &str = "udp";

/// Separator between an import prefix and a member name, as in `udp:Listener`.
const PREFIX_SEPARATOR: char = ':';

/// Analysis task that filters service declarations down to the ones bound
/// to a listener of one target module.
///
/// The task holds its configuration (target module, downstream validator)
/// and nothing else: every [`perform`](Self::perform) call works purely on
/// the context it is handed, so a host may reuse one task across
/// declarations and files.
pub struct ServiceAnalysisTask<V> {
    target: ModuleId,
    validator: V,
}

impl<V: ServiceValidator> ServiceAnalysisTask<V> {
    /// Create a task for an arbitrary target module.
    pub fn new(target: ModuleId, validator: V) -> Self {
        Self { target, validator }
    }

    /// Create a task for the `ballerina/udp` module.
    pub fn udp(validator: V) -> Self {
        Self::new(ModuleId::new(UDP_ORG, UDP_MODULE), validator)
    }

    /// The module this task filters for.
    pub fn target(&self) -> &ModuleId {
        &self.target
    }

    /// Decide whether the service in `ctx` is relevant to the target module.
    ///
    /// Returns the import prefix under which the target module is visible
    /// in the file when the service declares at least one listener of that
    /// module, `None` otherwise. A declaration the host produced no symbol
    /// for is never relevant.
    pub fn matching_prefix(&self, ctx: &AnalysisContext<'_>) -> Option<SmolStr> {
        let Some(symbol) = ctx.semantic().service_symbol(ctx.service()) else {
            trace!(file = %ctx.file(), "no symbol for service declaration, skipping");
            return None;
        };

        let relevant = symbol
            .listener_types()
            .iter()
            .any(|listener| is_module_listener(listener, &self.target));
        if !relevant {
            return None;
        }

        Some(resolve_import_prefix(ctx.imports(), self.target.name()))
    }

    /// Run the task over one service declaration.
    ///
    /// When the service binds a listener of the target module, the
    /// downstream validator runs exactly once, with the resolved prefix
    /// qualified by `:` (`udp:`, or `u:` for an aliased import). A service
    /// declaring several listeners of the target module is still validated
    /// only once.
    pub fn perform(&mut self, ctx: &AnalysisContext<'_>, diagnostics: &mut DiagnosticCollector) {
        let Some(prefix) = self.matching_prefix(ctx) else {
            return;
        };

        debug!(
            file = %ctx.file(),
            module = %self.target,
            prefix = %prefix,
            "validating service bound to target module listener"
        );
        let qualified = format!("{prefix}{PREFIX_SEPARATOR}");
        self.validator.validate(ctx, &qualified, diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use text_size::{TextRange, TextSize};

    use super::*;
    use crate::host::SemanticModel;
    use crate::model::{Import, ServiceDecl, ServiceSymbol, TypeDesc};
    use crate::source::FileId;

    struct FakeModel {
        symbol: Option<ServiceSymbol>,
    }

    impl SemanticModel for FakeModel {
        fn service_symbol(&self, _service: &ServiceDecl) -> Option<ServiceSymbol> {
            self.symbol.clone()
        }
    }

    #[derive(Default)]
    struct Recorder {
        prefixes: Vec<String>,
    }

    impl ServiceValidator for Recorder {
        fn validate(
            &mut self,
            _ctx: &AnalysisContext<'_>,
            module_prefix: &str,
            _diagnostics: &mut DiagnosticCollector,
        ) {
            self.prefixes.push(module_prefix.to_string());
        }
    }

    fn decl() -> ServiceDecl {
        ServiceDecl::new(TextRange::new(TextSize::from(0), TextSize::from(7)))
    }

    fn udp_listener() -> TypeDesc {
        TypeDesc::reference("Listener", ModuleId::new(UDP_ORG, UDP_MODULE))
    }

    fn run(symbol: Option<ServiceSymbol>, imports: Vec<Import>) -> Vec<String> {
        let model = FakeModel { symbol };
        let service = decl();
        let ctx = AnalysisContext::new(FileId::new(0), &service, &imports, &model);

        let mut task = ServiceAnalysisTask::udp(Recorder::default());
        let mut diagnostics = DiagnosticCollector::new();
        task.perform(&ctx, &mut diagnostics);
        task.validator.prefixes
    }

    #[test]
    fn test_validator_runs_for_udp_listener() {
        let symbol = ServiceSymbol::new(vec![udp_listener()]);
        let prefixes = run(Some(symbol), vec![Import::new(["ballerina", "udp"])]);

        assert_eq!(prefixes, ["udp:"]);
    }

    #[test]
    fn test_validator_gets_aliased_prefix() {
        let symbol = ServiceSymbol::new(vec![udp_listener()]);
        let imports = vec![Import::new(["ballerina", "udp"]).with_alias("u")];
        let prefixes = run(Some(symbol), imports);

        assert_eq!(prefixes, ["u:"]);
    }

    #[test]
    fn test_missing_symbol_skips_validation() {
        let prefixes = run(None, vec![Import::new(["ballerina", "udp"])]);

        assert!(prefixes.is_empty());
    }

    #[test]
    fn test_unrelated_listener_skips_validation() {
        let tcp = TypeDesc::reference("Listener", ModuleId::new("ballerina", "tcp"));
        let symbol = ServiceSymbol::new(vec![tcp, TypeDesc::Other]);
        let prefixes = run(Some(symbol), vec![Import::new(["ballerina", "udp"])]);

        assert!(prefixes.is_empty());
    }

    #[test]
    fn test_multiple_matching_listeners_validate_once() {
        let symbol = ServiceSymbol::new(vec![udp_listener(), udp_listener()]);
        let prefixes = run(Some(symbol), vec![Import::new(["ballerina", "udp"])]);

        assert_eq!(prefixes, ["udp:"]);
    }

    #[test]
    fn test_union_listener_matches() {
        let union = TypeDesc::Union(vec![
            TypeDesc::reference("Listener", ModuleId::new("ballerina", "tcp")),
            udp_listener(),
        ]);
        let symbol = ServiceSymbol::new(vec![union]);
        let prefixes = run(Some(symbol), Vec::new());

        // No import at all still yields the default prefix
        assert_eq!(prefixes, ["udp:"]);
    }

    #[test]
    fn test_matching_prefix_reports_relevance() {
        let model = FakeModel {
            symbol: Some(ServiceSymbol::new(vec![udp_listener()])),
        };
        let service = decl();
        let imports = vec![Import::new(["ballerina", "udp"]).with_alias("u")];
        let ctx = AnalysisContext::new(FileId::new(0), &service, &imports, &model);

        let task = ServiceAnalysisTask::udp(Recorder::default());
        assert_eq!(task.matching_prefix(&ctx).as_deref(), Some("u"));
    }

    #[test]
    fn test_custom_target_module() {
        let tcp = ModuleId::new("ballerina", "tcp");
        let model = FakeModel {
            symbol: Some(ServiceSymbol::new(vec![TypeDesc::reference(
                "Listener",
                tcp.clone(),
            )])),
        };
        let service = decl();
        let imports = Vec::new();
        let ctx = AnalysisContext::new(FileId::new(0), &service, &imports, &model);

        let task = ServiceAnalysisTask::new(tcp, Recorder::default());
        assert_eq!(task.matching_prefix(&ctx).as_deref(), Some("tcp"));
    }
}
