use std::collections::HashMap;
use tracing::trace;

/// Rewrites a generated Java expression, e.g. wrapping it in a parse call.
pub type Converter = fn(&str) -> String;

/// Common view over the role-specific type specs.
pub trait TypeSpec {
    fn name(&self) -> &'static str;
    fn converter(&self) -> Option<Converter>;
}

/// Result of resolving a declared type name against a registry.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedType<'a, S> {
    Known(&'a S),
    /// No entry exists; emitters fall back to generic output.
    Unknown { name: &'a str },
}

impl<'a, S: TypeSpec> ResolvedType<'a, S> {
    pub fn name(&self) -> &'a str {
        match self {
            ResolvedType::Known(spec) => spec.name(),
            ResolvedType::Unknown { name } => *name,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ResolvedType::Unknown { .. })
    }
}

/// Immutable name → spec table. Lookups are exact string matches.
#[derive(Debug)]
pub struct TypeRegistry<S> {
    entries: Vec<S>,
    index:   HashMap<&'static str, usize>,
}

impl<S: TypeSpec> TypeRegistry<S> {
    /// Builds a registry, returning the first repeated name on failure.
    pub fn new(entries: Vec<S>) -> Result<Self, &'static str> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, spec) in entries.iter().enumerate() {
            if index.insert(spec.name(), i).is_some() {
                return Err(spec.name());
            }
        }
        Ok(TypeRegistry { entries, index })
    }

    pub fn lookup(&self, name: &str) -> Option<&S> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Resolves `name`, synthesizing an unknown entry when `handle_unknown` is set.
    pub fn resolve<'a>(&'a self, name: &'a str, handle_unknown: bool) -> Option<ResolvedType<'a, S>> {
        match self.lookup(name) {
            Some(spec) => Some(ResolvedType::Known(spec)),
            None if handle_unknown => {
                trace!(type_name = name, "no registry entry, treating as unknown type");
                Some(ResolvedType::Unknown { name })
            }
            None => None,
        }
    }

    /// Registered type names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|spec| spec.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}
