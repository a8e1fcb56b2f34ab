//! Bulleted and numbered lists drawn into a single text box.
use serde_json::{Value, json};
use tracing::trace;

use super::mixins::{Alignment, Position, Size};
use super::{Component, DynamicComponent, TextBox, fields};
use crate::branding::StyleAttribute;
use crate::common::{Error, RGBColor, Result};
use crate::document::{Bullet, RunFont, ShapeId, TextRun};
use crate::schema::{Capability, FieldSchema, Properties, Schema, hex_color};
use crate::slides::{SlideCanvas, SlideContext};

/// Paragraph formatting applied to every list item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFormat {
    pub bullet: Bullet,
    pub spacing_after: f64,
    pub indent: f64,
    pub margin_left: f64,
}

/// Start a new paragraph in text box `id` holding `text`.
pub(crate) fn append_item(canvas: &mut SlideCanvas<'_>, id: ShapeId, text: &str, font: RunFont) -> Result<()> {
    let frame = canvas
        .text_frame_mut(id)
        .ok_or_else(|| Error::Other(format!("Shape {} is not a text box", id)))?;
    frame.create_paragraph().add_run(TextRun::new(text, font));
    Ok(())
}

/// Apply list formatting to the active paragraph of text box `id`.
pub(crate) fn format_item(canvas: &mut SlideCanvas<'_>, id: ShapeId, format: &ListFormat) -> Result<()> {
    let frame = canvas
        .text_frame_mut(id)
        .ok_or_else(|| Error::Other(format!("Shape {} is not a text box", id)))?;
    let paragraph = frame.active_paragraph_mut();
    paragraph.bullet = Some(format.bullet.clone());
    paragraph.spacing_after = format.spacing_after;
    paragraph.indent = format.indent;
    paragraph.margin_left = format.margin_left;
    Ok(())
}

/// A list of bullet points styled by a named paragraph style.
///
/// The first item creates the text box; later items are appended to it as
/// new paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletPointBox {
    pub(crate) items: Vec<String>,
    pub(crate) position: Position,
    pub(crate) size: Size,
    pub(crate) alignment: Alignment,
    pub(crate) paragraph_style: String,
    pub(crate) bullet_character: String,
    pub(crate) bullet_color: Option<RGBColor>,
    pub(crate) spacing_after: f64,
}

impl BulletPointBox {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            position: Position::default(),
            size: Size::default(),
            alignment: Alignment::default(),
            paragraph_style: "bulletPoint".to_string(),
            bullet_character: "•".to_string(),
            bullet_color: None,
            spacing_after: 20.0,
        }
    }

    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        self.items.push(text.into());
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

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn paragraph_style(mut self, name: impl Into<String>) -> Self {
        self.paragraph_style = name.into();
        self
    }

    pub fn bullet_character(mut self, character: impl Into<String>) -> Self {
        self.bullet_character = character.into();
        self
    }

    pub fn bullet_color(mut self, color: RGBColor) -> Self {
        self.bullet_color = Some(color);
        self
    }

    pub fn spacing_after(mut self, spacing: f64) -> Self {
        self.spacing_after = spacing;
        self
    }

    /// Font of items after the first, read attribute by attribute from the style.
    fn continuation_font(&self, ctx: &SlideContext<'_>) -> RunFont {
        let value = |attribute| ctx.branding.paragraph_style_value(&self.paragraph_style, attribute);
        RunFont {
            name: value(StyleAttribute::Font)
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| ctx.branding.base_font().to_string()),
            size: value(StyleAttribute::Size)
                .and_then(|v| v.as_f64())
                .unwrap_or(super::mixins::DEFAULT_FONT_SIZE),
            bold: value(StyleAttribute::Bold)
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            underline: false,
            character_spacing: value(StyleAttribute::LetterSpacing)
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
            color: ctx.theme.text_color,
        }
    }
}

impl Component for BulletPointBox {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn render(&self, canvas: &mut SlideCanvas<'_>) -> Result<()> {
        let ctx = canvas.ctx();
        let format = ListFormat {
            bullet: Bullet::Character {
                character: self.bullet_character.clone(),
                color: self.bullet_color.unwrap_or(ctx.theme.text_color),
            },
            spacing_after: self.spacing_after,
            indent: -40.0,
            margin_left: 40.0,
        };

        let mut target: Option<ShapeId> = None;
        for item in &self.items {
            let id = match target {
                Some(id) => {
                    append_item(canvas, id, item, self.continuation_font(&ctx))?;
                    id
                }
                None => {
                    let mut text_box = TextBox::new(item.as_str())
                        .paragraph_style(self.paragraph_style.as_str())
                        .position(self.position.x, self.position.y);
                    text_box.size = self.size;
                    text_box.alignment = self.alignment;
                    match text_box.draw(canvas)? {
                        Some(placed) => placed.id,
                        None => continue,
                    }
                }
            };
            format_item(canvas, id, &format)?;
            target = Some(id);
        }
        trace!(items = self.items.len(), "drew bullet point box");
        Ok(())
    }
}

impl DynamicComponent for BulletPointBox {
    const KEY: &'static str = "bullet-point-box";
    const LABEL: &'static str = "Bullet Point Box";
    const CAPABILITIES: &'static [Capability] = &[Capability::Position, Capability::Size, Capability::Alignment];

    fn description() -> &'static str {
        "A component for displaying bulleted lists"
    }

    fn own_schema() -> Schema {
        Schema::object(
            Properties::from_iter([
                (
                    "bulletPoints",
                    FieldSchema::array(FieldSchema::string()).describe("Array of bullet point text items"),
                ),
                (
                    "paragraphStyle",
                    FieldSchema::string().describe("Named paragraph style from branding"),
                ),
                (
                    "bulletCharacter",
                    FieldSchema::string().describe("Character to use for bullets (e.g., \"•\", \"-\", \">\")"),
                ),
                ("bulletColor", hex_color("Bullet color as hex code")),
                (
                    "spacingAfter",
                    FieldSchema::integer()
                        .describe("Spacing after each bullet point in pixels")
                        .minimum(0.0),
                ),
            ]),
            &["bulletPoints"],
        )
    }

    fn example() -> Value {
        json!({
            "bulletPoints": ["First point", "Second point", "Third point"],
            "x": 100,
            "y": 150,
            "width": 800,
            "height": 300,
            "horizontalAlignment": "left"
        })
    }

    fn from_data(_ctx: &SlideContext<'_>, data: &Value) -> Result<Self> {
        let owner = Self::KEY;
        let mut list = BulletPointBox::new(fields::string_list(data, "bulletPoints", owner)?.unwrap_or_default());
        list.position.read(data, owner)?;
        list.size.read(data, owner)?;
        list.alignment.read(data, owner)?;
        if let Some(style) = fields::string(data, "paragraphStyle", owner)? {
            list.paragraph_style = style;
        }
        if let Some(character) = fields::string(data, "bulletCharacter", owner)? {
            list.bullet_character = character;
        }
        list.bullet_color = fields::color(data, "bulletColor", owner)?;
        if let Some(spacing) = fields::number(data, "spacingAfter", owner)? {
            list.spacing_after = spacing;
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::with_canvas;

    #[test]
    fn test_items_share_one_text_box() {
        with_canvas("text", |canvas| {
            BulletPointBox::new(["One", "Two", "Three"])
                .position(40.0, 100.0)
                .width(600.0)
                .render(canvas)
                .unwrap();
            let shapes = canvas.slide().shapes();
            assert_eq!(shapes.len(), 1);
            let frame = shapes[0].text_frame().unwrap();
            assert_eq!(frame.text(), "One\nTwo\nThree");
            for paragraph in &frame.paragraphs {
                assert_eq!(paragraph.spacing_after, 20.0);
                assert_eq!(paragraph.indent, -40.0);
                assert_eq!(paragraph.margin_left, 40.0);
                assert!(matches!(&paragraph.bullet, Some(Bullet::Character { character, .. }) if character == "•"));
            }
        });
    }

    #[test]
    fn test_continuation_runs_use_style_values() {
        with_canvas("text", |canvas| {
            let ctx = canvas.ctx();
            BulletPointBox::new(["One", "Two"]).render(canvas).unwrap();
            let frame = canvas.slide().shapes()[0].text_frame().unwrap();
            let second = &frame.paragraphs[1].runs[0];
            assert_eq!(second.font.size, 20.0);
            assert!(!second.font.bold);
            assert_eq!(second.font.name, ctx.branding.base_font());
            assert_eq!(second.font.color, ctx.theme.text_color);
        });
    }

    #[test]
    fn test_bullet_color_override_from_data() {
        with_canvas("blank", |canvas| {
            let ctx = canvas.ctx();
            let data = json!({"bulletPoints": ["a"], "bulletColor": "FF0000", "bulletCharacter": "-"});
            BulletPointBox::from_data(&ctx, &data).unwrap().render(canvas).unwrap();
            let paragraph = &canvas.slide().shapes()[0].text_frame().unwrap().paragraphs[0];
            assert_eq!(
                paragraph.bullet,
                Some(Bullet::Character {
                    character: "-".into(),
                    color: RGBColor::new(255, 0, 0)
                })
            );
        });
    }

    #[test]
    fn test_empty_list_draws_nothing() {
        with_canvas("blank", |canvas| {
            BulletPointBox::new(Vec::<String>::new()).render(canvas).unwrap();
            assert!(canvas.slide().shapes().is_empty());
        });
    }
}
