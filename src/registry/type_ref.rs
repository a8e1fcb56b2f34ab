//! A handle to any registrable type.
use crate::branding::BrandingType;
use crate::common::RegistryKind;
use crate::components::ComponentType;
use crate::slides::SlideMasterType;

use super::RegistryItem;

/// Handle to a slide master, component or branding type.
#[derive(Debug, Clone)]
pub enum TypeRef {
    SlideMaster(SlideMasterType),
    Component(ComponentType),
    Branding(BrandingType),
}

impl TypeRef {
    pub fn kind(&self) -> RegistryKind {
        match self {
            TypeRef::SlideMaster(_) => RegistryKind::SlideMaster,
            TypeRef::Component(_) => RegistryKind::Component,
            TypeRef::Branding(_) => RegistryKind::Branding,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            TypeRef::SlideMaster(t) => t.key(),
            TypeRef::Component(t) => t.key(),
            TypeRef::Branding(t) => t.key(),
        }
    }

    pub fn type_path(&self) -> &str {
        match self {
            TypeRef::SlideMaster(t) => t.type_path(),
            TypeRef::Component(t) => t.type_path(),
            TypeRef::Branding(t) => t.type_path(),
        }
    }

    pub fn as_slide_master(&self) -> Option<&SlideMasterType> {
        match self {
            TypeRef::SlideMaster(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&ComponentType> {
        match self {
            TypeRef::Component(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_branding(&self) -> Option<&BrandingType> {
        match self {
            TypeRef::Branding(t) => Some(t),
            _ => None,
        }
    }
}

impl From<SlideMasterType> for TypeRef {
    fn from(value: SlideMasterType) -> Self {
        TypeRef::SlideMaster(value)
    }
}

impl From<ComponentType> for TypeRef {
    fn from(value: ComponentType) -> Self {
        TypeRef::Component(value)
    }
}

impl From<BrandingType> for TypeRef {
    fn from(value: BrandingType) -> Self {
        TypeRef::Branding(value)
    }
}
