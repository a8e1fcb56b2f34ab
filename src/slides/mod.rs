//! Slide masters: named layouts that turn data into components.
//!
//! A slide master is a pure function of the presentation geometry, the
//! branding and its own constructor arguments. Rendering issues component
//! draws in a fixed order onto a [`SlideCanvas`].
//!
//! Masters are built directly in code or from RawData through the
//! [`SlideFactory`], which binds payload fields to the master's declared
//! [`ParamSpec`]s.
//!
//! # Example
//!
//! ```rust
//! use longan::slides::{SlideFactory, SlideMasterType, Title};
//! use serde_json::json;
//!
//! let master = SlideFactory::create(&SlideMasterType::of::<Title>(), &json!({"title": "Hello"})).unwrap();
//! assert_eq!(master.key(), "title");
//! ```

pub mod args;
pub mod blank;
pub mod canvas;
pub mod chart;
pub mod columns;
pub mod factory;
pub mod grid;
pub mod lists;
pub mod params;
pub mod table;
pub mod text;
pub mod title;

use std::fmt;

use serde_json::Value;

use crate::common::{HorizontalAlignment, RegistryKind, Result, VerticalAlignment};
use crate::components::TextBox;
use crate::registry::RegistryItem;
use crate::schema::Schema;

pub use args::SlideArgs;
pub use blank::{Blank, BlankWithTitle, BlankWithTitleSubtitle, Contents};
pub use canvas::{SlideCanvas, SlideContext};
pub use chart::{Chart, ChartSquare, ChartText, ChartTextTitle, ChartTitle, ChartTitles, ChartTwoUp};
pub use columns::{ThreeColumn, TwoColumn};
pub use factory::SlideFactory;
pub use grid::{FourUp, GridBox, SixUp, ThreeUp, TwoUp};
pub use lists::{Agenda, BulletPoints};
pub use params::{ParamKind, ParamSpec};
pub use table::Table;
pub use text::{Quote, Text};
pub use title::{Title, TitleSubtitle};

/// Vertical space kept between a slide title and the content below it.
pub const TITLE_GAP: f64 = 75.0;

/// A slide layout.
pub trait SlideMaster {
    /// Registry key of the master.
    fn key(&self) -> &'static str;

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()>;
}

/// A slide master constructible from RawData.
pub trait DynamicSlide: SlideMaster + Sized + 'static {
    const KEY: &'static str;
    const LABEL: &'static str;
    /// Constructor parameters in declaration order.
    const PARAMS: &'static [ParamSpec];

    fn description() -> &'static str;

    fn data_schema() -> Schema;

    /// A payload that validates against [`DynamicSlide::data_schema`].
    fn example() -> Value;

    fn from_args(args: SlideArgs) -> Result<Self>;
}

type BuildSlide = fn(SlideArgs) -> Result<Box<dyn SlideMaster>>;

/// Registry entry for a dynamically creatable slide master.
#[derive(Clone, Copy)]
pub struct SlideMasterType {
    key: &'static str,
    label: &'static str,
    type_path: &'static str,
    description: fn() -> &'static str,
    params: &'static [ParamSpec],
    schema: fn() -> Schema,
    example: fn() -> Value,
    build: BuildSlide,
}

impl fmt::Debug for SlideMasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideMasterType")
            .field("key", &self.key)
            .field("type_path", &self.type_path)
            .finish()
    }
}

fn build_boxed<T: DynamicSlide>(args: SlideArgs) -> Result<Box<dyn SlideMaster>> {
    Ok(Box::new(T::from_args(args)?))
}

impl SlideMasterType {
    pub fn of<T: DynamicSlide>() -> Self {
        Self {
            key: T::KEY,
            label: T::LABEL,
            type_path: std::any::type_name::<T>(),
            description: T::description,
            params: T::PARAMS,
            schema: T::data_schema,
            example: T::example,
            build: build_boxed::<T>,
        }
    }

    pub fn params(&self) -> &'static [ParamSpec] {
        self.params
    }

    pub fn data_schema(&self) -> Schema {
        (self.schema)()
    }

    pub fn example_data(&self) -> Value {
        (self.example)()
    }

    /// Construct the master from bound arguments.
    pub fn build(&self, args: SlideArgs) -> Result<Box<dyn SlideMaster>> {
        (self.build)(args)
    }
}

impl RegistryItem for SlideMasterType {
    const KIND: RegistryKind = RegistryKind::SlideMaster;

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

/// Built-in slide masters, in registration order.
pub fn builtin_types() -> Vec<SlideMasterType> {
    vec![
        SlideMasterType::of::<Title>(),
        SlideMasterType::of::<TitleSubtitle>(),
        SlideMasterType::of::<Text>(),
        SlideMasterType::of::<Blank>(),
        SlideMasterType::of::<BlankWithTitle>(),
        SlideMasterType::of::<BlankWithTitleSubtitle>(),
        SlideMasterType::of::<BulletPoints>(),
        SlideMasterType::of::<Agenda>(),
        SlideMasterType::of::<TwoUp>(),
        SlideMasterType::of::<ThreeUp>(),
        SlideMasterType::of::<FourUp>(),
        SlideMasterType::of::<SixUp>(),
        SlideMasterType::of::<TwoColumn>(),
        SlideMasterType::of::<ThreeColumn>(),
        SlideMasterType::of::<Quote>(),
        SlideMasterType::of::<Table>(),
        SlideMasterType::of::<Chart>(),
        SlideMasterType::of::<ChartSquare>(),
        SlideMasterType::of::<ChartText>(),
        SlideMasterType::of::<ChartTextTitle>(),
        SlideMasterType::of::<ChartTitle>(),
        SlideMasterType::of::<ChartTitles>(),
        SlideMasterType::of::<ChartTwoUp>(),
    ]
}

/// Draw `title` in the `slideTitle` style at the top left and return its height.
///
/// An empty title draws nothing and has no height.
pub fn render_title(canvas: &mut SlideCanvas<'_>, title: &str) -> Result<f64> {
    let ctx = canvas.ctx();
    let placed = TextBox::new(title)
        .paragraph_style("slideTitle")
        .width(ctx.content_width())
        .lines(1)
        .position(ctx.horizontal_padding, ctx.vertical_padding)
        .horizontal(HorizontalAlignment::Left)
        .vertical(VerticalAlignment::Top)
        .draw(canvas)?;
    Ok(placed.map_or(0.0, |p| p.frame.height))
}

/// Top of the content area: below the title when one was drawn, else `fallback`.
pub(crate) fn content_top(title_height: f64, fallback: f64) -> f64 {
    if title_height > 0.0 { title_height + TITLE_GAP } else { fallback }
}
