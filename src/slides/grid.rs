//! N-up grids of titled text boxes.
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster, render_title};
use crate::common::{HorizontalAlignment, Result, VerticalAlignment};
use crate::components::TextBox;
use crate::schema::{FieldSchema, Properties, Schema};

/// One grid cell: a short heading over a description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridBox {
    pub title: String,
    pub description: String,
}

impl GridBox {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Space between a box heading and its description.
const DESCRIPTION_GAP: f64 = 5.0;

/// Where and how large a box is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    x: f64,
    y: f64,
    width: f64,
    /// Height of the description; `None` leaves it to the text box.
    description_height: Option<f64>,
}

/// Draw a heading in `nUpGridTitle` and the description below it.
fn render_box(canvas: &mut SlideCanvas<'_>, grid_box: &GridBox, cell: Cell) -> Result<()> {
    let heading = TextBox::new(grid_box.title.as_str())
        .paragraph_style("nUpGridTitle")
        .position(cell.x, cell.y)
        .width(cell.width)
        .horizontal(HorizontalAlignment::Left)
        .vertical(VerticalAlignment::Bottom)
        .draw(canvas)?;
    let heading_height = heading.map_or(0.0, |p| p.frame.height);

    let mut description = TextBox::new(grid_box.description.as_str())
        .paragraph_style("nUpGridBody")
        .position(cell.x, cell.y + heading_height + DESCRIPTION_GAP)
        .width(cell.width)
        .horizontal(HorizontalAlignment::Left)
        .vertical(VerticalAlignment::Top);
    if let Some(height) = cell.description_height {
        description = description.height(height);
    }
    description.draw(canvas)?;
    Ok(())
}

fn boxes_schema(count: usize) -> FieldSchema {
    FieldSchema::array(FieldSchema::object_with(
        Properties::from_iter([
            ("title", FieldSchema::string().describe("Box title")),
            ("description", FieldSchema::string().describe("Box description")),
        ]),
        &["title", "description"],
    ))
    .describe(format!("Array of exactly {} boxes with title and description", count))
    .min_items(count)
    .max_items(count)
}

fn grid_schema(count: usize) -> Schema {
    Schema::object(
        Properties::from_iter([
            ("title", FieldSchema::string().describe("The slide title")),
            ("boxes", boxes_schema(count)),
        ]),
        &["title", "boxes"],
    )
}

const GRID_PARAMS: &[ParamSpec] = &[
    ParamSpec::optional("title", ParamKind::Text),
    ParamSpec::optional("boxes", ParamKind::Boxes),
];

/// Declares a grid master: a slide title over up to `$count` boxes.
macro_rules! grid_master {
    ($(#[$doc:meta])* $name:ident, $key:literal, $label:literal, $count:literal, $description:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            title: String,
            boxes: Vec<GridBox>,
        }

        impl $name {
            /// Boxes past the grid's capacity are ignored.
            pub fn new(title: impl Into<String>, boxes: Vec<GridBox>) -> Self {
                Self {
                    title: title.into(),
                    boxes,
                }
            }
        }

        impl DynamicSlide for $name {
            const KEY: &'static str = $key;
            const LABEL: &'static str = $label;
            const PARAMS: &'static [ParamSpec] = GRID_PARAMS;

            fn description() -> &'static str {
                $description
            }

            fn data_schema() -> Schema {
                grid_schema($count)
            }

            fn example() -> Value {
                example_boxes($count)
            }

            fn from_args(args: SlideArgs) -> Result<Self> {
                Ok(Self::new(args.text("title")?, args.boxes("boxes")?))
            }
        }
    };
}

const EXAMPLE_BOXES: [(&str, &str); 6] = [
    ("Speed", "Pages load in under a second on every device."),
    ("Security", "Data is encrypted at rest and in transit."),
    ("Scale", "Handles millions of requests per day."),
    ("Support", "Round-the-clock help from real engineers."),
    ("Insights", "Dashboards that update in real time."),
    ("Integrations", "Connects with the tools your team already uses."),
];

fn example_boxes(count: usize) -> Value {
    let boxes: Vec<_> = EXAMPLE_BOXES
        .iter()
        .take(count)
        .map(|(title, description)| json!({"title": title, "description": description}))
        .collect();
    json!({"title": "Why Choose Us", "boxes": boxes})
}

grid_master!(
    /// Two boxes side by side below the title.
    TwoUp,
    "two-up",
    "Two Up",
    2,
    "A slide with a title and two boxes side by side"
);

grid_master!(
    /// Three equally wide boxes in a row.
    ThreeUp,
    "three-up",
    "Three Up",
    3,
    "A slide with a title and three boxes in a row"
);

grid_master!(
    /// Four boxes in a two by two grid.
    FourUp,
    "four-up",
    "Four Up",
    4,
    "A slide with a title and four boxes in a two by two grid"
);

grid_master!(
    /// Six boxes in two rows of three.
    SixUp,
    "six-up",
    "Six Up",
    6,
    "A slide with a title and six boxes in two rows of three"
);

const TWO_UP_WIDTH: f64 = 570.0;
const TWO_UP_COLUMNS: [f64; 2] = [40.0, 650.0];
const GRID_TOP: f64 = 150.0;

impl SlideMaster for TwoUp {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_title(canvas, &self.title)?;
        for (grid_box, x) in self.boxes.iter().zip(TWO_UP_COLUMNS) {
            let cell = Cell {
                x,
                y: GRID_TOP,
                width: TWO_UP_WIDTH,
                description_height: Some(400.0),
            };
            render_box(canvas, grid_box, cell)?;
        }
        Ok(())
    }
}

const THREE_UP_GAP: f64 = 30.0;

impl SlideMaster for ThreeUp {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_title(canvas, &self.title)?;
        let ctx = canvas.ctx();
        let width = ((ctx.content_width() - 2.0 * THREE_UP_GAP) / 3.0).floor();
        for (column, grid_box) in self.boxes.iter().take(3).enumerate() {
            let cell = Cell {
                x: ctx.horizontal_padding + column as f64 * (width + THREE_UP_GAP),
                y: GRID_TOP,
                width,
                description_height: None,
            };
            render_box(canvas, grid_box, cell)?;
        }
        Ok(())
    }
}

const FOUR_UP_ROWS: [f64; 2] = [120.0, 400.0];

impl SlideMaster for FourUp {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_title(canvas, &self.title)?;
        for (index, grid_box) in self.boxes.iter().take(4).enumerate() {
            let cell = Cell {
                x: TWO_UP_COLUMNS[index % 2],
                y: FOUR_UP_ROWS[index / 2],
                width: TWO_UP_WIDTH,
                description_height: None,
            };
            render_box(canvas, grid_box, cell)?;
        }
        Ok(())
    }
}

const SIX_UP_WIDTH: f64 = 350.0;
const SIX_UP_COLUMNS: [f64; 3] = [40.0, 430.0, 860.0];
const SIX_UP_ROWS: [f64; 2] = [100.0, 340.0];

impl SlideMaster for SixUp {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        render_title(canvas, &self.title)?;
        for (index, grid_box) in self.boxes.iter().take(6).enumerate() {
            let cell = Cell {
                x: SIX_UP_COLUMNS[index % 3],
                y: SIX_UP_ROWS[index / 3],
                width: SIX_UP_WIDTH,
                description_height: None,
            };
            render_box(canvas, grid_box, cell)?;
        }
        Ok(())
    }
}
