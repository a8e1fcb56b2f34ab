//! List slides: bullet points and numbered agendas.
use serde_json::{Value, json};

use super::params::{ParamKind, ParamSpec};
use super::{DynamicSlide, SlideArgs, SlideCanvas, SlideMaster, TITLE_GAP, render_title};
use crate::common::{HorizontalAlignment, Result, VerticalAlignment};
use crate::components::bullet_point_box::{ListFormat, append_item, format_item};
use crate::components::{Alignment, BulletPointBox, Component, TextBox};
use crate::document::{Bullet, RunFont, ShapeId};
use crate::schema::{FieldSchema, Properties, Schema};

/// Space left below the bullet list, including the title area.
const BULLET_BOTTOM_RESERVE: f64 = 200.0;

/// A slide title above a bulleted list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulletPoints {
    title: String,
    bullet_points: Vec<String>,
}

impl BulletPoints {
    pub fn new<I, S>(title: impl Into<String>, bullet_points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            bullet_points: bullet_points.into_iter().map(Into::into).collect(),
        }
    }
}

impl SlideMaster for BulletPoints {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let title_height = render_title(canvas, &self.title)?;
        let ctx = canvas.ctx();
        BulletPointBox::new(self.bullet_points.iter().map(String::as_str))
            .paragraph_style("bulletPoint")
            .position(ctx.horizontal_padding, title_height + TITLE_GAP)
            .width(ctx.content_width())
            .height(ctx.height - title_height - BULLET_BOTTOM_RESERVE)
            .alignment(Alignment {
                horizontal: Some(HorizontalAlignment::Left),
                vertical: Some(VerticalAlignment::Top),
                ..Alignment::default()
            })
            .render(canvas)
    }
}

impl DynamicSlide for BulletPoints {
    const KEY: &'static str = "bullet-points";
    const LABEL: &'static str = "Bullet Points";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::required("title", ParamKind::Text),
        ParamSpec::optional("bulletPoints", ParamKind::TextList),
    ];

    fn description() -> &'static str {
        "A slide with a title and a list of bullet points"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The slide title")),
                (
                    "bulletPoints",
                    FieldSchema::array(FieldSchema::string()).describe("Array of bullet point texts"),
                ),
            ]),
            &["title", "bulletPoints"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Key Features",
            "bulletPoints": ["Easy to use interface", "Powerful analytics", "Secure data storage"]
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.text("title")?, args.text_list("bulletPoints")?))
    }
}

const AGENDA_TITLE_FONT_SIZE: f64 = 100.0;
/// Height of the rotated title box, which becomes its visual width.
const AGENDA_TITLE_BAND: f64 = 200.0;
const AGENDA_ITEM_FONT_SIZE: f64 = 24.0;
/// Offset of the item list from the left padding, clear of the title band.
const AGENDA_ITEMS_OFFSET: f64 = 150.0;
const AGENDA_MARGIN: f64 = 75.0;

/// A rotated title running up the left edge beside a numbered list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Agenda {
    title: String,
    items: Vec<String>,
}

impl Agenda {
    pub fn new<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    fn render_items(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        let x = ctx.horizontal_padding + AGENDA_ITEMS_OFFSET;
        let format = ListFormat {
            bullet: Bullet::Numeric {
                color: ctx.theme.text_color,
            },
            spacing_after: 25.0,
            indent: -40.0,
            margin_left: 60.0,
        };
        let font = RunFont {
            name: ctx.branding.base_font().to_string(),
            size: AGENDA_ITEM_FONT_SIZE,
            bold: false,
            underline: false,
            character_spacing: 0.0,
            color: ctx.theme.text_color,
        };

        let mut target: Option<ShapeId> = None;
        for item in &self.items {
            let id = match target {
                Some(id) => {
                    append_item(canvas, id, item, font.clone())?;
                    id
                }
                None => {
                    let first = TextBox::new(item.as_str())
                        .paragraph_style("bodyText")
                        .font_size(AGENDA_ITEM_FONT_SIZE)
                        .position(x, AGENDA_MARGIN)
                        .width(ctx.width - x - ctx.horizontal_padding)
                        .height(ctx.height - 2.0 * AGENDA_MARGIN)
                        .horizontal(HorizontalAlignment::Left)
                        .vertical(VerticalAlignment::Top)
                        .draw(canvas)?;
                    match first {
                        Some(placed) => placed.id,
                        None => continue,
                    }
                }
            };
            format_item(canvas, id, &format)?;
            target = Some(id);
        }
        Ok(())
    }
}

impl SlideMaster for Agenda {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        TextBox::new(self.title.as_str())
            .bold(true)
            .font_size(AGENDA_TITLE_FONT_SIZE)
            .uppercase(true)
            .rotate(270)
            .width(ctx.content_height())
            .height(AGENDA_TITLE_BAND)
            .x(ctx.vertical_padding)
            .center_vertically()
            .draw(canvas)?;
        self.render_items(canvas)
    }
}

impl DynamicSlide for Agenda {
    const KEY: &'static str = "agenda";
    const LABEL: &'static str = "Agenda";
    const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::optional("title", ParamKind::Text),
        ParamSpec::optional("items", ParamKind::TextList),
    ];

    fn description() -> &'static str {
        "An agenda slide with a vertical title and a numbered list of items"
    }

    fn data_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                ("title", FieldSchema::string().describe("The agenda title")),
                (
                    "items",
                    FieldSchema::array(FieldSchema::string()).describe("Array of agenda items"),
                ),
            ]),
            &["title", "items"],
        )
    }

    fn example() -> Value {
        json!({
            "title": "Agenda",
            "items": ["Introduction", "Market Overview", "Financial Results", "Q&A"]
        })
    }

    fn from_args(args: SlideArgs) -> Result<Self> {
        Ok(Self::new(args.text("title")?, args.text_list("items")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{with_canvas, with_geometry};

    #[test]
    fn test_bullets_below_title() {
        with_geometry("bullet-points", (1280.0, 720.0, 40.0, 0.0), |canvas| {
            BulletPoints::new("Features", ["Fast", "Safe"]).render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 2);
            let list = &shapes[1];
            assert_eq!((list.frame.x, list.frame.y), (40.0, 32.0 + 75.0));
            assert_eq!(list.frame.width, 1200.0);
            assert_eq!(list.frame.height, 720.0 - 32.0 - 200.0);
            let frame = list.text_frame().unwrap();
            assert_eq!(frame.paragraphs.len(), 2);
            assert!(frame.paragraphs.iter().all(|p| matches!(p.bullet, Some(Bullet::Character { .. }))));
        });
    }

    #[test]
    fn test_bullets_without_items() {
        with_canvas("bullet-points", |canvas| {
            BulletPoints::new("Only", Vec::<String>::new()).render(canvas).unwrap();
            assert_eq!(canvas.slide().texts(), vec!["Only"]);
        });
    }

    #[test]
    fn test_agenda_numbered_items() {
        with_canvas("agenda", |canvas| {
            Agenda::new("Agenda", ["One", "Two", "Three"]).render(canvas).unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 2);

            let title = &shapes[0];
            assert_eq!(title.frame.rotation, 270);
            assert_eq!(title.frame.y, (720.0 - 200.0) / 2.0);
            assert_eq!(title.text_frame().unwrap().text(), "AGENDA");

            let items = &shapes[1];
            assert_eq!((items.frame.x, items.frame.y), (150.0, 75.0));
            assert_eq!(items.frame.width, 1280.0 - 150.0);
            assert_eq!(items.frame.height, 720.0 - 150.0);
            let frame = items.text_frame().unwrap();
            assert_eq!(frame.paragraphs.len(), 3);
            for paragraph in &frame.paragraphs {
                assert!(matches!(paragraph.bullet, Some(Bullet::Numeric { .. })));
                assert_eq!(paragraph.margin_left, 60.0);
                assert_eq!(paragraph.runs[0].font.size, 24.0);
            }
        });
    }

    #[test]
    fn test_agenda_without_items_draws_title_only() {
        with_canvas("agenda", |canvas| {
            Agenda::new("Agenda", Vec::<String>::new()).render(canvas).unwrap();
            assert_eq!(canvas.slide().shapes().len(), 1);
        });
    }
}
