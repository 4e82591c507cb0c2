use hyperion_span::Span;
use std::fmt;

/// A bare name component: `[A-Za-z_][A-Za-z_0-9]*`.
pub type Name = String;

/// A slash-separated scope prefix, e.g. the `s1/s2` in `s1/s2/ns.name`.
/// May be empty.
#[derive(Clone, Debug, Default)]
pub struct Scope(pub Vec<Name>);

impl Scope {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new scope with `segment` appended, used by
    /// `calls_to_evaluated_references` to append a fresh `_0`, `_1`, ...
    /// prefix to a lowered call's identifier.
    pub fn appended(&self, segment: impl Into<Name>) -> Self {
        let mut path = self.0.clone();
        path.push(segment.into());
        Self(path)
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Scope {}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

/// A dot-separated namespace path, e.g. the `ns1.ns2` in `s/ns1.ns2.name`.
/// May be empty for macro-style bindings.
#[derive(Clone, Debug, Default)]
pub struct Namespace(pub Vec<Name>);

impl Namespace {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a namespace with `name` appended, used by
    /// `calls_to_evaluated_references` to turn a call's original
    /// identifier into the namespace of its synthetic argument bindings.
    pub fn appended(&self, name: impl Into<Name>) -> Self {
        let mut path = self.0.clone();
        path.push(name.into());
        Self(path)
    }

    /// Returns a namespace with `prefix`'s path spliced onto the front,
    /// used by `flatten_withs`.
    pub fn prefixed(&self, prefix: &Namespace) -> Self {
        let mut path = prefix.0.clone();
        path.extend(self.0.iter().cloned());
        Self(path)
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Namespace {}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A fully-qualified reference to a configurable or binding target:
/// `scope/ns1.ns2.name`. Carries a [`Span`] for diagnostics; the span
/// does not participate in equality or hashing, since two identifiers
/// naming the same path are the same identifier regardless of where in
/// the source either occurrence was written.
#[derive(Clone, Debug)]
pub struct Identifier {
    pub scope: Scope,
    pub namespace: Namespace,
    pub name: Name,
    pub span: Span,
}

impl Identifier {
    pub fn new(scope: Scope, namespace: Namespace, name: impl Into<Name>) -> Self {
        Self { scope, namespace, name: name.into(), span: Span::dummy() }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// A bare name with empty scope and namespace.
    pub fn bare(name: impl Into<Name>) -> Self {
        Self::new(Scope::empty(), Namespace::empty(), name)
    }

    pub fn with_scope(&self, scope: Scope) -> Self {
        Self { scope, namespace: self.namespace.clone(), name: self.name.clone(), span: self.span }
    }

    pub fn with_namespace(&self, namespace: Namespace) -> Self {
        Self { scope: self.scope.clone(), namespace, name: self.name.clone(), span: self.span }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope && self.namespace == other.namespace && self.name == other.name
    }
}
impl Eq for Identifier {}

impl std::hash::Hash for Identifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.scope.0.hash(state);
        self.namespace.0.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scope.is_empty() {
            write!(f, "{}/", self.scope)?;
        }
        if !self.namespace.is_empty() {
            write!(f, "{}.", self.namespace)?;
        }
        write!(f, "{}", self.name)
    }
}
