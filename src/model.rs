//! Snapshot types handed to the analysis by the host compiler.
//!
//! Everything here is a read-only view built per analysis invocation.
//! The library holds no references beyond a single call.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use text_size::TextRange;
use thiserror::Error;

// ============================================================================
// MODULE IDENTITY
// ============================================================================

/// Identity of a module: publishing organization plus module name.
///
/// Compares by value, case-sensitive on both parts. A module named `udp`
/// under a different organization is a different module.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    org: SmolStr,
    name: SmolStr,
}

impl ModuleId {
    /// Create a module identity from organization and module name.
    pub fn new(org: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            org: org.into(),
            name: name.into(),
        }
    }

    /// The organization that publishes the module.
    pub fn org(&self) -> &str {
        &self.org
    }

    /// The bare module name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({}/{})", self.org, self.name)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

/// Error parsing a [`ModuleId`] from its `org/name` form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModuleIdParseError {
    #[error("module path `{0}` is missing the `/` between organization and name")]
    MissingSeparator(String),
    #[error("module path `{0}` has an empty organization or module name")]
    EmptyComponent(String),
}

impl FromStr for ModuleId {
    type Err = ModuleIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((org, name)) = s.split_once('/') else {
            return Err(ModuleIdParseError::MissingSeparator(s.to_string()));
        };
        if org.is_empty() || name.is_empty() {
            return Err(ModuleIdParseError::EmptyComponent(s.to_string()));
        }
        Ok(Self::new(org, name))
    }
}

// ============================================================================
// TYPE DESCRIPTORS
// ============================================================================

/// A named reference to a type declared elsewhere.
///
/// Carries provenance: the module declaring the referenced type, when the
/// host compiler managed to resolve it. An unresolved module is legal and
/// simply never matches anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    name: SmolStr,
    module: Option<ModuleId>,
}

impl TypeRef {
    /// Create a resolved reference.
    pub fn new(name: impl Into<SmolStr>, module: ModuleId) -> Self {
        Self {
            name: name.into(),
            module: Some(module),
        }
    }

    /// Create a reference whose defining module the host could not resolve.
    pub fn unresolved(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            module: None,
        }
    }

    /// Simple name of the referenced type, e.g. `Listener`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module declaring the referenced type, if resolved.
    pub fn module(&self) -> Option<&ModuleId> {
        self.module.as_ref()
    }
}

/// Static type of a declared listener, as seen by the host's type system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDesc {
    /// Union of member types, in declaration order.
    Union(Vec<TypeDesc>),
    /// Reference to a type declared elsewhere.
    Reference(TypeRef),
    /// Any other shape of type.
    Other,
}

impl TypeDesc {
    /// Shorthand for a resolved reference descriptor.
    pub fn reference(name: impl Into<SmolStr>, module: ModuleId) -> Self {
        Self::Reference(TypeRef::new(name, module))
    }

    /// View this descriptor as a reference, if it is one.
    pub fn as_reference(&self) -> Option<&TypeRef> {
        match self {
            Self::Reference(r) => Some(r),
            _ => None,
        }
    }
}

// ============================================================================
// IMPORTS
// ============================================================================

/// One import declaration of the file under analysis, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    path: Vec<SmolStr>,
    alias: Option<SmolStr>,
}

impl Import {
    /// Create an import from its path segments, e.g. `["ballerina", "udp"]`.
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            alias: None,
        }
    }

    /// Set the alias prefix the import was declared with.
    pub fn with_alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The path segments, in source order.
    pub fn path(&self) -> &[SmolStr] {
        &self.path
    }

    /// The bare module name: the last path segment.
    ///
    /// Empty for a degenerate import with no segments.
    pub fn module_name(&self) -> &str {
        self.path.last().map(SmolStr::as_str).unwrap_or("")
    }

    /// The declared alias prefix, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

// ============================================================================
// SERVICE DECLARATIONS
// ============================================================================

/// Syntax-side handle for the service declaration under analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDecl {
    range: TextRange,
}

impl ServiceDecl {
    /// Create a handle covering the declaration's source range.
    pub fn new(range: TextRange) -> Self {
        Self { range }
    }

    /// Source range of the declaration, for diagnostic locations.
    pub fn range(&self) -> TextRange {
        self.range
    }
}

/// Resolved symbol for a service declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceSymbol {
    listener_types: Vec<TypeDesc>,
}

impl ServiceSymbol {
    /// Create a symbol from the declared listener types, in order.
    pub fn new(listener_types: Vec<TypeDesc>) -> Self {
        Self { listener_types }
    }

    /// The declared listener types.
    pub fn listener_types(&self) -> &[TypeDesc] {
        &self.listener_types
    }
}
