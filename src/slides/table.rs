//! Table slide.
use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster, TITLE_GAP, content_top, render_title};
use crate::common::Result;
use crate::components::Component;
use crate::components::table::Table as TableComponent;
use crate::schema::{FieldSchema, Kind, Properties, Schema};

/// A slide title above a table spanning the content width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    title: String,
    headers: Vec<String>,
    data: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(title: impl Into<String>, headers: I, data: Vec<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            data,
        }
    }
}

impl SlideMaster for Table {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let title_height = render_title(canvas, &self.title)?;
        let ctx = canvas.ctx();
        let y = content_top(title_height, TITLE_GAP);
        TableComponent::new(self.headers.iter().map(String::as_str))
            .rows(self.data.clone())
            .position(ctx.horizontal_padding, y)
            .width(ctx.content_width())
            .height(ctx.height - y - TITLE_GAP)
            .render(canvas)
    }
}

impl DynamicSlide for Table {
    const KEY: &'static str = "table";
    const LABEL: &'static str = "Table";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::optional("title", ParamKind::Text),
        ParamSpec::optional("headers", ParamKind::TextList),
        ParamSpec::optional("data", ParamKind::Rows),
    ];

    fn description() -> &'static str {
        "A slide with a title and a data table"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The slide title")),
                (
                    "headers",
                    FieldSchema::array(FieldSchema::string()).describe("Array of table header labels"),
                ),
                (
                    "data",
                    FieldSchema::array(FieldSchema::array(FieldSchema::any_of(&[Kind::String, Kind::Number])))
                        .describe("Array of table rows (each row is an array of cell values)"),
                ),
            ]),
            &["title", "headers", "data"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Quarterly Results",
            "headers": ["Quarter", "Revenue", "Growth"],
            "data": [
                ["Q1 2024", "$2.5M", "15%"],
                ["Q2 2024", "$3.2M", "28%"],
                ["Q3 2024", "$3.8M", "19%"],
                ["Q4 2024", "$4.1M", "8%"]
            ]
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(
            args.text("title")?,
            args.text_list("headers")?,
            args.rows("data")?,
        ))
    }
}
