//! Drawable components placed on slides.
//!
//! A component is a positioned, sized, styled primitive: text, shapes,
//! images, tables and charts. Slide masters build components directly; the
//! `blank` masters build them from data through the [`ComponentFactory`],
//! which resolves component keys through the catalog's component registry.
//!
//! # Example
//!
//! ```rust
//! use longan::components::{Component, TextBox};
//!
//! let title = TextBox::new("Hello").paragraph_style("slideTitle").position(40.0, 40.0);
//! assert_eq!(title.key(), "text-box");
//! ```

pub mod bullet_point_box;
pub mod chart_shape;
pub mod factory;
pub mod fields;
pub mod image;
pub mod mixins;
pub mod shape;
pub mod table;
pub mod text_box;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

use serde_json::Value;

use crate::common::{RegistryKind, Result};
use crate::document::{Frame, ShapeId};
use crate::registry::RegistryItem;
use crate::schema::{Capability, Schema, build_schema};
use crate::slides::{SlideCanvas, SlideContext};

pub use bullet_point_box::BulletPointBox;
pub use chart_shape::ChartShape;
pub use factory::ComponentFactory;
pub use image::Image;
pub use mixins::{Alignment, Border, FontSettings, Link, Margins, Position, Size};
pub use shape::Shape;
pub use table::Table;
pub use text_box::TextBox;

/// Something that draws itself onto a slide.
pub trait Component {
    /// Registry key of the component type.
    fn key(&self) -> &'static str;

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()>;
}

/// Shape a component placed on the slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed {
    pub id: ShapeId,
    pub frame: Frame,
}

/// A component type that can be built from RawData.
pub trait DynamicComponent: Component + Sized + 'static {
    const KEY: &'static str;
    const LABEL: &'static str;
    /// Capabilities whose schema fragments are merged, in order.
    const CAPABILITIES: &'static [Capability];

    fn description() -> &'static str;

    /// Fields specific to this component.
    fn own_schema() -> Schema;

    fn example() -> Value;

    fn from_data(ctx: &SlideContext<'_>, data: &Value) -> Result<Self>;

    /// Complete schema: own fields plus capability fragments.
    fn schema() -> Schema {
        build_schema(Self::own_schema(), Self::CAPABILITIES)
    }
}

type BuildComponent = fn(&SlideContext<'_>, &Value) -> Result<Box<dyn Component>>;

/// Registry entry for a dynamically creatable component.
#[derive(Clone, Copy)]
pub struct ComponentType {
    key: &'static str,
    label: &'static str,
    type_path: &'static str,
    description: fn() -> &'static str,
    schema: fn() -> Schema,
    example: fn() -> Value,
    build: BuildComponent,
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentType")
            .field("key", &self.key)
            .field("type_path", &self.type_path)
            .finish()
    }
}

fn build_boxed<T: DynamicComponent>(ctx: &SlideContext<'_>, data: &Value) -> Result<Box<dyn Component>> {
    Ok(Box::new(T::from_data(ctx, data)?))
}

impl ComponentType {
    pub fn of<T: DynamicComponent>() -> Self {
        Self {
            key: T::KEY,
            label: T::LABEL,
            type_path: std::any::type_name::<T>(),
            description: T::description,
            schema: T::schema,
            example: T::example,
            build: build_boxed::<T>,
        }
    }

    pub fn data_schema(&self) -> Schema {
        (self.schema)()
    }

    pub fn example_data(&self) -> Value {
        (self.example)()
    }

    /// Construct a component from `data` for the slide described by `ctx`.
    pub fn build(&self, ctx: &SlideContext<'_>, data: &Value) -> Result<Box<dyn Component>> {
        (self.build)(ctx, data)
    }
}

impl RegistryItem for ComponentType {
    const KIND: RegistryKind = RegistryKind::Component;

    fn key(&self) -> &str {
        self.key
    }

    fn label(&self) -> &str {
        self.label
    }

    fn type_path(&self) -> &str {
        self.type_path
    }

    fn description(&self) -> String {
        (self.description)().to_string()
    }

    fn schema(&self) -> Option<Schema> {
        Some(self.data_schema())
    }

    fn example(&self) -> Option<Value> {
        Some(self.example_data())
    }
}

/// Built-in component types, in registration order.
pub fn builtin_types() -> Vec<ComponentType> {
    vec![
        ComponentType::of::<TextBox>(),
        ComponentType::of::<Shape>(),
        ComponentType::of::<Image>(),
        ComponentType::of::<BulletPointBox>(),
        ComponentType::of::<Table>(),
        ComponentType::of::<ChartShape>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;

    #[test]
    fn test_builtin_examples_match_their_schemas() {
        for component in builtin_types() {
            let schema = component.data_schema();
            assert!(schema.dangling_required().is_empty(), "{}", component.key());
            validate(&schema, &component.example_data(), component.key()).unwrap();
        }
    }

    #[test]
    fn test_text_box_schema_includes_capabilities() {
        let schema = ComponentType::of::<TextBox>().data_schema();
        for field in ["text", "lines", "x", "width", "fontSize", "backgroundColor", "url"] {
            assert!(schema.properties.contains(field), "missing {}", field);
        }
        assert_eq!(schema.required, vec!["text".to_string()]);
    }
}
