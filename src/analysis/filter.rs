//! Listener membership and import-prefix resolution.
//!
//! The two decisions the task needs before it can hand a service to the
//! shape validator: does the service bind a listener declared by the
//! target module, and under which prefix did the file import that module.
//! Both are total functions; unresolvable input degrades to a negative or
//! default answer instead of an error.

use smol_str::SmolStr;

use crate::model::{Import, ModuleId, TypeDesc};

/// Check whether a declared listener type belongs to `target`.
///
/// Unions are unwrapped one level: the listener matches when any member
/// that is a type reference resolves to `target`. Non-reference members
/// are skipped, not errors. A reference whose defining module the host
/// could not resolve never matches. Module equality is case-sensitive and
/// covers both organization and name.
pub fn is_module_listener(listener: &TypeDesc, target: &ModuleId) -> bool {
    match listener {
        TypeDesc::Union(members) => members
            .iter()
            .filter_map(TypeDesc::as_reference)
            .any(|r| r.module() == Some(target)),
        TypeDesc::Reference(r) => r.module() == Some(target),
        TypeDesc::Other => false,
    }
}

/// Resolve the prefix under which `module_name` is visible in a file.
///
/// Scans `imports` in source order and takes the first one whose module
/// name (last path segment, ignoring trailing whitespace) equals
/// `module_name`: its alias when one was declared, the bare module name
/// otherwise. The scan stops at that first match; a duplicate import later
/// in the file is never consulted. When nothing matches, the module name
/// itself is the prefix.
pub fn resolve_import_prefix(imports: &[Import], module_name: &str) -> SmolStr {
    for import in imports {
        if import.module_name().trim_end() == module_name {
            if let Some(alias) = import.alias() {
                return SmolStr::new(alias);
            }
            break;
        }
    }
    SmolStr::new(module_name)
}
