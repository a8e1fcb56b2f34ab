//! Free-form slides filled with components.
use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster, render_title};
use crate::common::{HorizontalAlignment, Result, VerticalAlignment};
use crate::components::{ComponentFactory, TextBox};
use crate::schema::{FieldSchema, Properties, Schema};

/// Custom drawing code run before any data-defined components.
pub type Contents = Arc<dyn Fn(&mut SlideCanvas<'_>) -> Result<()> + Send + Sync>;

/// Space between a slide title and its subtitle.
const SUBTITLE_GAP: f64 = 5.0;

/// Schema of a `[{type, data}]` component list.
pub(crate) fn components_schema() -> FieldSchema {
    FieldSchema::array(FieldSchema::object_with(
        Properties::from_iter([
            (
                "type",
                FieldSchema::string().describe("Component key (e.g. 'text-box', 'shape') or type path"),
            ),
            ("data", FieldSchema::object().describe("Component-specific data")),
        ]),
        &["type"],
    ))
    .describe("Array of component definitions")
}

/// The custom contents, then every component built from the definitions.
#[derive(Clone, Default)]
struct Body {
    contents: Option<Contents>,
    components: Vec<Value>,
}

impl Body {
    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        if let Some(contents) = &self.contents {
            contents(canvas)?;
        }
        if self.components.is_empty() {
            return Ok(());
        }
        let ctx = canvas.ctx();
        for component in ComponentFactory::new(ctx.catalog).create_many(&ctx, &self.components)? {
            component.render(canvas)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("contents", &self.contents.as_ref().map(|_| "Fn"))
            .field("components", &self.components)
            .finish()
    }
}

/// An empty slide for arbitrary components.
#[derive(Debug, Clone, Default)]
pub struct Blank {
    body: Body,
}

impl Blank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `contents` against the canvas when the slide renders.
    pub fn with_contents<F>(mut self, contents: F) -> Self
    where
        F: Fn(&mut SlideCanvas<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.body.contents = Some(Arc::new(contents));
        self
    }

    /// Append a `{type, data}` component definition.
    pub fn component(mut self, definition: Value) -> Self {
        self.body.components.push(definition);
        self
    }
}

impl SlideMaster for Blank {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        self.body.render(canvas)
    }
}

impl DynamicSlide for Blank {
    const KEY: &'static str = "blank";
    const LABEL: &'static str = "Blank";
    const PARAMS: &'static [ParamSpec] = &[ParamSpec::optional("components", ParamKind::Components)];

    fn description() -> &'static str {
        "A blank slide for custom content using components"
    }

    fn data_schema() -> Schema {
        Schema::object(Properties::from_iter([("components", components_schema())]), &[])
    }

    fn example() -> Value {
        json!({
            "components": [
                {"type": "text-box", "data": {"text": "Custom content", "x": 100, "y": 100, "fontSize": 24}},
                {"type": "shape", "data": {"x": 100, "y": 200, "width": 200, "height": 100, "backgroundColor": "3B82F6"}}
            ]
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self {
            body: Body {
                contents: None,
                components: args.components("components")?,
            },
        })
    }
}

/// A slide title above custom components.
///
/// The title is drawn last so it stays on top of the contents.
#[derive(Debug, Clone, Default)]
pub struct BlankWithTitle {
    title: String,
    body: Body,
}

impl BlankWithTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Body::default(),
        }
    }

    pub fn with_contents<F>(mut self, contents: F) -> Self
    where
        F: Fn(&mut SlideCanvas<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.body.contents = Some(Arc::new(contents));
        self
    }

    pub fn component(mut self, definition: Value) -> Self {
        self.body.components.push(definition);
        self
    }
}

impl SlideMaster for BlankWithTitle {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        self.body.render(canvas)?;
        render_title(canvas, &self.title)?;
        Ok(())
    }
}

impl DynamicSlide for BlankWithTitle {
    const KEY: &'static str = "blank-with-title";
    const LABEL: &'static str = "Blank with Title";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("title", ParamKind::Text),
        ParamSpec::optional("components", ParamKind::Components),
    ];

    fn description() -> &'static str {
        "A slide with a title and space for custom content using components"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The slide title")),
                ("components", components_schema()),
            ]),
            &["title"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Custom Layout",
            "components": [
                {"type": "bullet-point-box", "data": {"bulletPoints": ["First", "Second"], "x": 40, "y": 120}}
            ]
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self {
            title: args.text("title")?,
            body: Body {
                contents: None,
                components: args.components("components")?,
            },
        })
    }
}

/// A slide title and subtitle above custom components.
#[derive(Debug, Clone, Default)]
pub struct BlankWithTitleSubtitle {
    title: String,
    subtitle: String,
    body: Body,
}

impl BlankWithTitleSubtitle {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            body: Body::default(),
        }
    }

    pub fn with_contents<F>(mut self, contents: F) -> Self
    where
        F: Fn(&mut SlideCanvas<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.body.contents = Some(Arc::new(contents));
        self
    }

    pub fn component(mut self, definition: Value) -> Self {
        self.body.components.push(definition);
        self
    }
}

impl SlideMaster for BlankWithTitleSubtitle {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        self.body.render(canvas)?;
        let title_height = render_title(canvas, &self.title)?;
        let ctx = canvas.ctx();
        TextBox::new(self.subtitle.as_str())
            .paragraph_style("slideSubtitle")
            .width(ctx.content_width())
            .lines(1)
            .position(
                ctx.horizontal_padding,
                ctx.vertical_padding + title_height + SUBTITLE_GAP,
            )
            .horizontal(HorizontalAlignment::Left)
            .vertical(VerticalAlignment::Top)
            .draw(canvas)?;
        Ok(())
    }
}

impl DynamicSlide for BlankWithTitleSubtitle {
    const KEY: &'static str = "blank-with-title-subtitle";
    const LABEL: &'static str = "Blank with Title and Subtitle";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("title", ParamKind::Text),
        ParamSpec::optional("subtitle", ParamKind::Text),
        ParamSpec::optional("components", ParamKind::Components),
    ];

    fn description() -> &'static str {
        "A slide with a title, a subtitle and space for custom content using components"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The slide title")),
                ("subtitle", FieldSchema::string().describe("The slide subtitle")),
                ("components", components_schema()),
            ]),
            &["title"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Product Roadmap",
            "subtitle": "What ships next quarter",
            "components": [
                {"type": "text-box", "data": {"text": "Beta launch in March", "x": 40, "y": 160}}
            ]
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self {
            title: args.text("title")?,
            subtitle: args.text("subtitle")?,
            body: Body {
                contents: None,
                components: args.components("components")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::components::testing::{with_canvas, with_geometry};
    use crate::components::{Component, Shape};
    use crate::document::ShapeKind;

    #[test]
    fn test_contents_then_components() {
        with_canvas("blank", |canvas| {
            Blank::new()
                .with_contents(|canvas| Shape::new().position(10.0, 10.0).size(50.0, 50.0).render(canvas))
                .component(json!({"type": "text-box", "data": {"text": "Later"}}))
                .render(canvas)
                .unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 2);
            assert!(matches!(shapes[0].kind, ShapeKind::AutoShape { .. }));
            assert_eq!(canvas.slide().texts(), vec!["Later"]);
        });
    }

    #[test]
    fn test_title_drawn_last() {
        with_geometry("blank-with-title", (1280.0, 720.0, 40.0, 30.0), |canvas| {
            BlankWithTitle::new("Heading")
                .component(json!({"type": "text-box", "data": {"text": "Body", "y": 200}}))
                .render(canvas)
                .unwrap();
            assert_eq!(canvas.slide().texts(), vec!["Body", "Heading"]);
            let title = &canvas.slide().shapes()[1];
            assert_eq!((title.frame.x, title.frame.y, title.frame.width), (40.0, 30.0, 1200.0));
        });
    }

    #[test]
    fn test_subtitle_below_title() {
        with_geometry("blank-with-title-subtitle", (1280.0, 720.0, 40.0, 30.0), |canvas| {
            BlankWithTitleSubtitle::new("Heading", "Sub").render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes[1].frame.y, 30.0 + 32.0 + 5.0);
            assert_eq!(shapes[1].frame.height, 20.0);
        });
    }

    #[test]
    fn test_bad_component_fails_slide() {
        with_canvas("blank", |canvas| {
            let err = Blank::new()
                .component(json!({"data": {}}))
                .render(canvas)
                .unwrap_err();
            assert!(matches!(err, Error::MissingKey { key: "type", .. }));
        });
    }
}
