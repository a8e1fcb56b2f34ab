//! Construction of components from `{type, data}` definitions.
use serde_json::{Map, Value};
use tracing::debug;

use super::Component;
use crate::common::{Error, Result};
use crate::registry::Catalog;
use crate::slides::SlideContext;

/// Builds components by key or type path through a catalog.
///
/// Components are constructed, not rendered; the caller renders them.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFactory<'a> {
    catalog: &'a Catalog,
}

impl<'a> ComponentFactory<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Build the component `key` from `data` for the slide in `ctx`.
    pub fn create(&self, ctx: &SlideContext<'_>, key: &str, data: &Value) -> Result<Box<dyn Component>> {
        self.create_in(ctx, key, data, "")
    }

    fn create_in(
        &self,
        ctx: &SlideContext<'_>,
        key: &str,
        data: &Value,
        context: &str,
    ) -> Result<Box<dyn Component>> {
        let component_type = self.catalog.resolve_component(key, context)?;
        debug!(key, master = ctx.master, "creating component");
        component_type.build(ctx, data)
    }

    /// Build every `{type, data}` definition in order.
    ///
    /// A definition without `data` builds from an empty object.
    pub fn create_many(&self, ctx: &SlideContext<'_>, definitions: &[Value]) -> Result<Vec<Box<dyn Component>>> {
        let empty = Value::Object(Map::new());
        definitions
            .iter()
            .enumerate()
            .map(|(index, definition)| {
                let context = format!("Component definition at index {}", index);
                let key = definition
                    .get("type")
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::MissingKey {
                        key: "type",
                        context: context.clone(),
                    })?;
                let data = match definition.get("data") {
                    None | Some(Value::Null) => &empty,
                    Some(data) => data,
                };
                self.create_in(ctx, key, data, &format!(" in component definition at index {}", index))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TextBox;
    use crate::components::testing::with_canvas;
    use crate::slides::Title;
    use serde_json::json;

    #[test]
    fn test_create_many_keeps_order() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let factory = ComponentFactory::new(ctx.catalog);
            let components = factory
                .create_many(
                    &ctx,
                    &[
                        json!({"type": "text-box", "data": {"text": "Hi"}}),
                        json!({"type": "shape", "data": {"shape": "round"}}),
                    ],
                )
                .unwrap();
            let keys: Vec<_> = components.iter().map(|c| c.key()).collect();
            assert_eq!(keys, vec!["text-box", "shape"]);
        });
    }

    #[test]
    fn test_missing_type_names_index() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let factory = ComponentFactory::new(ctx.catalog);
            let err = factory
                .create_many(&ctx, &[json!({"type": "shape"}), json!({"data": {}})])
                .err()
                .unwrap();
            assert_eq!(
                err.to_string(),
                "Component definition at index 1 is missing required 'type' key"
            );
        });
    }

    #[test]
    fn test_unknown_key_lists_registered_components() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let err = ComponentFactory::new(ctx.catalog)
                .create(&ctx, "sparkline", &json!({}))
                .err()
                .unwrap();
            let message = err.to_string();
            assert!(message.starts_with("Unknown component 'sparkline'"));
            assert!(message.contains("text-box, shape, image, bullet-point-box, table, chart"));
        });
    }

    #[test]
    fn test_type_path_bypasses_registry() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            ctx.catalog.components().clear();
            let path = std::any::type_name::<TextBox>();
            let component = ComponentFactory::new(ctx.catalog)
                .create(&ctx, path, &json!({"text": "direct"}))
                .unwrap();
            assert_eq!(component.key(), "text-box");
        });
    }

    #[test]
    fn test_slide_master_path_is_not_a_component() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let err = ComponentFactory::new(ctx.catalog)
                .create(&ctx, std::any::type_name::<Title>(), &json!({}))
                .err()
                .unwrap();
            assert!(matches!(err, Error::InvalidCapability { .. }));
        });
    }
}
