//! Tables with a header row.
use serde_json::{Value, json};
use tracing::trace;

use super::mixins::{DEFAULT_FONT_SIZE, Position, Size};
use super::{Component, DynamicComponent, fields};
use crate::branding::StyleAttribute;
use crate::common::{Error, HorizontalAlignment, Result, VerticalAlignment};
use crate::document::{Frame, Insets, Outline, RunFont, ShapeKind, TableCell, TableData, TableRow};
use crate::schema::{Capability, FieldSchema, Kind, Properties, Schema};
use crate::slides::{SlideCanvas, SlideContext};

pub const HEADER_ROW_HEIGHT: f64 = 40.0;
pub const DATA_ROW_HEIGHT: f64 = 35.0;
/// Width of the rule drawn above the first data row.
pub const FIRST_ROW_BORDER_WIDTH: f64 = 2.0;

/// A table whose columns share the table width equally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
    pub(crate) font_size: Option<f64>,
    pub(crate) position: Position,
    pub(crate) size: Size,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.size.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.size.height = Some(height);
        self
    }

    /// Width of every column for a table `width` wide, truncated to whole pixels.
    pub fn column_width(&self, width: f64) -> f64 {
        if self.headers.is_empty() {
            0.0
        } else {
            (width / self.headers.len() as f64).floor()
        }
    }

    fn cell(&self, text: &str, width: f64, font: RunFont) -> TableCell {
        TableCell {
            text: text.to_string(),
            font,
            width,
            horizontal: HorizontalAlignment::Left,
            vertical: VerticalAlignment::Middle,
            insets: Insets::default(),
            fill: None,
            border_top: None,
        }
    }

    fn build(&self, ctx: &SlideContext<'_>, width: f64) -> TableData {
        let column_width = self.column_width(width);
        let size = self
            .font_size
            .or_else(|| {
                ctx.branding
                    .paragraph_style_value("bodyText", StyleAttribute::Size)
                    .and_then(|v| v.as_f64())
            })
            .unwrap_or(DEFAULT_FONT_SIZE);
        let font = RunFont {
            name: ctx.branding.base_font().to_string(),
            size,
            bold: false,
            underline: false,
            character_spacing: 0.0,
            color: ctx.theme.text_color,
        };

        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        let header_cells = self
            .headers
            .iter()
            .map(|header| {
                let mut cell = self.cell(
                    header,
                    column_width,
                    RunFont {
                        bold: true,
                        ..font.clone()
                    },
                );
                cell.insets.top = 2.5;
                cell.insets.bottom = 2.5;
                cell
            })
            .collect();
        rows.push(TableRow {
            height: HEADER_ROW_HEIGHT,
            cells: header_cells,
        });

        for (index, row) in self.rows.iter().enumerate() {
            let cells = row
                .iter()
                .map(|text| {
                    let mut cell = self.cell(text, column_width, font.clone());
                    if index == 0 {
                        cell.border_top = Some(Outline {
                            color: ctx.theme.text_color,
                            width: FIRST_ROW_BORDER_WIDTH,
                        });
                    }
                    cell
                })
                .collect();
            rows.push(TableRow {
                height: DATA_ROW_HEIGHT,
                cells,
            });
        }

        TableData {
            columns: self.headers.len(),
            rows,
        }
    }
}

impl Component for Table {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        if self.headers.is_empty() || self.rows.is_empty() {
            return Ok(());
        }
        let ctx = canvas.ctx();
        let width = self
            .size
            .width
            .unwrap_or(ctx.width - self.position.x * 2.0);
        let data = self.build(&ctx, width);
        let height = self
            .size
            .height
            .unwrap_or_else(|| data.rows.iter().map(|r| r.height).sum());
        let shape = canvas.add_shape(
            Frame::new(self.position.x, self.position.y, width, height),
            ShapeKind::Table(data),
        );
        trace!(id = shape.id, columns = self.headers.len(), rows = self.rows.len(), "drew table");
        Ok(())
    }
}

/// Read an array of rows, each an array of scalar cells.
pub(crate) fn read_rows(data: &Value, field: &str, owner: &str) -> Result<Vec<Vec<String>>> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(rows)) => rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = row.as_array().ok_or_else(|| {
                    Error::invalid_field(format!("{}[{}]", field, i), owner, "an array", row)
                })?;
                cells
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| {
                        fields::scalar_text(cell).ok_or_else(|| {
                            Error::invalid_field(format!("{}[{}][{}]", field, i, j), owner, "a string or number", cell)
                        })
                    })
                    .collect()
            })
            .collect(),
        Some(other) => Err(Error::invalid_field(field, owner, "an array of rows", other)),
    }
}

impl DynamicComponent for Table {
    const KEY: &'static str = "table";
    const LABEL: &'static str = "Table";
    const CAPABILITIES: &'static [Capability] = &[Capability::Position, Capability::Size];

    fn description() -> &'static str {
        "A table with a header row and equally wide columns"
    }

    fn own_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                (
                    "headers",
                    FieldSchema::array(FieldSchema::string()).describe("Array of table header labels"),
                ),
                (
                    "rows",
                    FieldSchema::array(FieldSchema::array(FieldSchema::any_of(&[Kind::String, Kind::Number])))
                        .describe("Array of table rows (each row is an array of cell values)"),
                ),
                (
                    "fontSize",
                    FieldSchema::number().describe("Font size of every cell").minimum(1.0),
                ),
            ]),
            &["headers", "rows"],
        )
    }

    fn example() -> Value {
        json!({
            "headers": ["Region", "Sales"],
            "rows": [["North", 120], ["South", 95]],
            "x": 40,
            "y": 150,
            "width": 600
        })
    }

    fn from_data(_ctx: &SlideContext<'_>, data: &Value) -> Result<Self> {
        let owner = Self::KEY;
        let mut table = Table::new(fields::string_list(data, "headers", owner)?.unwrap_or_default());
        table.rows = read_rows(data, "rows", owner)?;
        table.font_size = fields::number(data, "fontSize", owner)?;
        table.position.read(data, owner)?;
        table.size.read(data, owner)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::with_canvas;

    fn quarterly() -> Table {
        Table::new(["Quarter", "Revenue", "Growth"])
            .row(["Q1", "$2.5M", "15%"])
            .row(["Q2", "$3.2M", "28%"])
    }

    #[test]
    fn test_columns_share_width() {
        with_canvas("table", |canvas| {
            quarterly().position(40.0, 100.0).width(1000.0).render(canvas).unwrap();
            let table = canvas.slide().shapes()[0].table().unwrap();
            assert_eq!(table.columns, 3);
            assert_eq!(table.row_count(), 3);
            for row in &table.rows {
                for cell in &row.cells {
                    assert_eq!(cell.width, 333.0);
                }
            }
        });
    }

    #[test]
    fn test_header_and_first_row_styling() {
        with_canvas("table", |canvas| {
            let ctx = canvas.ctx();
            quarterly().render(canvas).unwrap();
            let shape = &canvas.slide().shapes()[0];
            let table = shape.table().unwrap();
            assert_eq!(table.rows[0].height, HEADER_ROW_HEIGHT);
            assert!(table.rows[0].cells.iter().all(|c| c.font.bold && c.insets.top == 2.5));
            assert!(table.rows[0].cells.iter().all(|c| c.border_top.is_none()));
            assert_eq!(
                table.rows[1].cells[0].border_top,
                Some(Outline {
                    color: ctx.theme.text_color,
                    width: 2.0
                })
            );
            assert!(table.rows[2].cells.iter().all(|c| c.border_top.is_none()));
            assert_eq!(shape.frame.height, 40.0 + 35.0 * 2.0);
            assert_eq!(shape.frame.width, 1280.0);
        });
    }

    #[test]
    fn test_empty_table_draws_nothing() {
        with_canvas("table", |canvas| {
            Table::new(["A"]).render(canvas).unwrap();
            Table::new(Vec::<String>::new()).row(["x"]).render(canvas).unwrap();
            assert!(canvas.slide().shapes().is_empty());
        });
    }

    #[test]
    fn test_numeric_cells_from_data() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            Table::from_data(&ctx, &Table::example()).unwrap().render(canvas).unwrap();
            let table = canvas.slide().shapes()[0].table().unwrap();
            assert_eq!(table.cell_text(1, 1), Some("120"));
            assert_eq!(table.rows[1].cells[0].font.size, 16.0);
        });
    }

    #[test]
    fn test_ragged_rows_rejected() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let err = Table::from_data(&ctx, &json!({"headers": ["a"], "rows": ["x"]})).unwrap_err();
            assert!(err.to_string().contains("rows[0]"));
        });
    }
}
