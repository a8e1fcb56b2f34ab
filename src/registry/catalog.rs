//! The three registries and name resolution across them.
use once_cell::sync::Lazy;
use tracing::debug;

use super::{Registry, RegistryItem, TypeRef};
use crate::branding::{self, BrandingType};
use crate::common::{Error, RegistryKind, Result};
use crate::components::{self, ComponentType};
use crate::slides::{self, SlideMasterType};

/// Every built-in type, for resolving direct type paths.
static BUILTIN_TYPES: Lazy<Vec<TypeRef>> = Lazy::new(|| {
    let mut types: Vec<TypeRef> = Vec::new();
    types.extend(slides::builtin_types().into_iter().map(TypeRef::from));
    types.extend(components::builtin_types().into_iter().map(TypeRef::from));
    types.extend(branding::builtin_types().into_iter().map(TypeRef::from));
    types
});

/// Slide master, component and branding registries.
///
/// A catalog is an explicit value: each presentation build resolves names
/// through the catalog it was given, so tests and hosts can run with
/// isolated sets of types.
#[derive(Debug, Default)]
pub struct Catalog {
    slide_masters: Registry<SlideMasterType>,
    components: Registry<ComponentType>,
    brandings: Registry<BrandingType>,
}

impl Catalog {
    /// Catalog with all three registries empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog populated with every built-in type.
    pub fn with_builtins() -> Self {
        let catalog = Self::empty();
        catalog.register(BUILTIN_TYPES.iter().cloned());
        catalog
    }

    pub fn slide_masters(&self) -> &Registry<SlideMasterType> {
        &self.slide_masters
    }

    pub fn components(&self) -> &Registry<ComponentType> {
        &self.components
    }

    pub fn brandings(&self) -> &Registry<BrandingType> {
        &self.brandings
    }

    /// Register each type in the registry of its kind.
    pub fn register(&self, types: impl IntoIterator<Item = TypeRef>) {
        for type_ref in types {
            match type_ref {
                TypeRef::SlideMaster(t) => self.slide_masters.register([t]),
                TypeRef::Component(t) => self.components.register([t]),
                TypeRef::Branding(t) => self.brandings.register([t]),
            }
        }
    }

    /// Find a type by its Rust path among registered and built-in types.
    pub fn find_type_path(&self, path: &str) -> Option<TypeRef> {
        let registered = self
            .slide_masters
            .entries()
            .into_iter()
            .map(TypeRef::from)
            .chain(self.components.entries().into_iter().map(TypeRef::from))
            .chain(self.brandings.entries().into_iter().map(TypeRef::from))
            .find(|t| t.type_path() == path);
        registered.or_else(|| BUILTIN_TYPES.iter().find(|t| t.type_path() == path).cloned())
    }

    /// Resolve a slide master by registry key or label, then by type path.
    pub fn resolve_slide_master(&self, name: &str, context: &str) -> Result<SlideMasterType> {
        if let Some(found) = self.slide_masters.get_type(name) {
            return Ok(found);
        }
        self.resolve_by_path(name, context, &self.slide_masters, |t| {
            t.as_slide_master().cloned()
        })
    }

    /// Resolve a component; a name containing `::` is always a type path.
    pub fn resolve_component(&self, name: &str, context: &str) -> Result<ComponentType> {
        if !is_type_path(name)
            && let Some(found) = self.components.get_type(name)
        {
            return Ok(found);
        }
        self.resolve_by_path(name, context, &self.components, |t| t.as_component().cloned())
    }

    /// Resolve a branding by registry key or label, then by type path.
    pub fn resolve_branding(&self, name: &str, context: &str) -> Result<BrandingType> {
        if let Some(found) = self.brandings.get_type(name) {
            return Ok(found);
        }
        self.resolve_by_path(name, context, &self.brandings, |t| t.as_branding().cloned())
    }

    fn resolve_by_path<T: RegistryItem>(
        &self,
        name: &str,
        context: &str,
        registry: &Registry<T>,
        pick: impl Fn(&TypeRef) -> Option<T>,
    ) -> Result<T> {
        let unknown = || Error::UnknownRegistryKey {
            kind: T::KIND,
            key: name.to_string(),
            context: context.to_string(),
            available: registry.names(),
        };

        if !is_type_path(name) {
            return Err(unknown());
        }
        let type_ref = self.find_type_path(name).ok_or_else(unknown)?;
        debug!(kind = %T::KIND, path = name, "resolved direct type path");
        pick(&type_ref).ok_or_else(|| Error::InvalidCapability {
            type_path: name.to_string(),
            capability: capability_name(T::KIND),
            context: context.to_string(),
        })
    }
}

/// Whether `name` looks like a fully qualified Rust type path.
pub fn is_type_path(name: &str) -> bool {
    name.contains("::")
}

fn capability_name(kind: RegistryKind) -> &'static str {
    match kind {
        RegistryKind::SlideMaster => "dynamic slide creation",
        RegistryKind::Component => "dynamic component creation",
        RegistryKind::Branding => "branding",
    }
}
