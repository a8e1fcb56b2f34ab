//! Style capabilities shared by components.
//!
//! Each struct holds the state of one [`Capability`](crate::schema::Capability)
//! and knows how to read its own fields from a RawData payload. Fields are
//! only applied when present.
use serde_json::Value;

use super::fields;
use crate::branding::ParagraphStyle;
use crate::common::{HorizontalAlignment, RGBColor, Result, VerticalAlignment};
use crate::document::{Hyperlink, Insets, Outline};

/// Font size used when neither the component nor its style sets one.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Offset from the slide's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn read(&mut self, data: &Value, owner: &str) -> Result<()> {
        match (
            fields::number(data, "x", owner)?,
            fields::number(data, "y", owner)?,
        ) {
            (Some(x), Some(y)) => *self = Position { x, y },
            (Some(x), None) => self.x = x,
            (None, Some(y)) => self.y = y,
            (None, None) => {}
        }
        Ok(())
    }
}

/// Explicit size; unset dimensions are computed by the component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Size {
    pub fn read(&mut self, data: &Value, owner: &str) -> Result<()> {
        if let Some(width) = fields::number(data, "width", owner)? {
            self.width = Some(width);
        }
        if let Some(height) = fields::number(data, "height", owner)? {
            self.height = Some(height);
        }
        Ok(())
    }
}

/// Text alignment plus optional centering of the whole box on the slide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Alignment {
    pub horizontal: Option<HorizontalAlignment>,
    pub vertical: Option<VerticalAlignment>,
    pub center_horizontally: bool,
    pub center_vertically: bool,
}

impl Alignment {
    pub fn read(&mut self, data: &Value, owner: &str) -> Result<()> {
        if let Some(h) = fields::horizontal(data, "horizontalAlignment", owner)? {
            self.horizontal = Some(h);
        }
        if let Some(v) = fields::vertical(data, "verticalAlignment", owner)? {
            self.vertical = Some(v);
        }
        Ok(())
    }

    /// Box origin after centering a `width` x `height` box on the slide.
    pub fn place(&self, x: f64, y: f64, width: f64, height: f64, slide: (f64, f64)) -> (f64, f64) {
        let x = if self.center_horizontally { (slide.0 - width) / 2.0 } else { x };
        let y = if self.center_vertically { (slide.1 - height) / 2.0 } else { y };
        (x, y)
    }
}

/// Inner margins of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn read(&mut self, data: &Value, owner: &str) -> Result<()> {
        for (field, slot) in [
            ("marginTop", &mut self.top),
            ("marginRight", &mut self.right),
            ("marginBottom", &mut self.bottom),
            ("marginLeft", &mut self.left),
        ] {
            if let Some(value) = fields::number(data, field, owner)? {
                *slot = value;
            }
        }
        Ok(())
    }

    pub fn insets(&self) -> Insets {
        Insets {
            top: self.top,
            right: self.right,
            bottom: self.bottom,
            left: self.left,
        }
    }
}

/// Font settings of a text component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSettings {
    pub size: Option<f64>,
    pub color: Option<RGBColor>,
    pub font: Option<String>,
    pub bold: Option<bool>,
    pub underlined: bool,
    pub uppercase: Option<bool>,
    pub letter_spacing: Option<f64>,
    /// Line height in percent
    pub line_height: Option<u32>,
}

impl FontSettings {
    pub fn read(&mut self, data: &Value, owner: &str) -> Result<()> {
        if let Some(size) = fields::number(data, "fontSize", owner)? {
            self.size = Some(size);
        }
        if let Some(color) = fields::color(data, "color", owner)? {
            self.color = Some(color);
        }
        if let Some(font) = fields::string(data, "font", owner)? {
            self.font = Some(font);
        }
        if let Some(bold) = fields::boolean(data, "bold", owner)? {
            self.bold = Some(bold);
        }
        if let Some(underlined) = fields::boolean(data, "underlined", owner)? {
            self.underlined = underlined;
        }
        if let Some(uppercase) = fields::boolean(data, "uppercase", owner)? {
            self.uppercase = Some(uppercase);
        }
        if let Some(spacing) = fields::number(data, "letterSpacing", owner)? {
            self.letter_spacing = Some(spacing);
        }
        if let Some(height) = fields::integer(data, "lineHeight", owner)? {
            self.line_height = Some(height.max(0) as u32);
        }
        Ok(())
    }

    /// Take unset attributes from a paragraph style.
    pub fn fill_from(&mut self, style: &ParagraphStyle) {
        self.size = self.size.or(style.size);
        self.color = self.color.or(style.color);
        if self.font.is_none() {
            self.font = style.font.clone();
        }
        self.bold = self.bold.or(style.bold);
        self.uppercase = self.uppercase.or(style.uppercase);
        self.letter_spacing = self.letter_spacing.or(style.letter_spacing);
        self.line_height = self.line_height.or(style.line_height);
    }

    pub fn size_or_default(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_FONT_SIZE)
    }
}

/// Solid border around a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Border {
    pub color: Option<RGBColor>,
    pub width: f64,
}

impl Border {
    pub fn read(&mut self, data: &Value, owner: &str) -> Result<()> {
        if let Some(color) = fields::color(data, "borderColor", owner)? {
            self.color = Some(color);
        }
        if let Some(width) = fields::number(data, "borderWidth", owner)? {
            self.width = width;
        }
        Ok(())
    }

    /// Outline to draw; none unless a border color is set.
    pub fn outline(&self) -> Option<Outline> {
        self.color.map(|color| Outline {
            color,
            width: if self.width > 0.0 { self.width } else { 1.0 },
        })
    }
}

/// Hyperlink to a URL or to another slide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub url: Option<String>,
    pub slide_number: Option<u32>,
}

impl Link {
    pub fn read(&mut self, data: &Value, owner: &str) -> Result<()> {
        if let Some(url) = fields::string(data, "url", owner)? {
            self.url = Some(url);
        }
        if let Some(number) = fields::integer(data, "slideNumberAnchor", owner)? {
            self.slide_number = Some(number.max(1) as u32);
        }
        Ok(())
    }

    /// A URL wins over a slide anchor.
    pub fn hyperlink(&self) -> Option<Hyperlink> {
        match (&self.url, self.slide_number) {
            (Some(url), _) => Some(Hyperlink::Url { url: url.clone() }),
            (None, Some(number)) => Some(Hyperlink::Slide { number }),
            (None, None) => None,
        }
    }
}

pub fn read_background(data: &Value, owner: &str) -> Result<Option<RGBColor>> {
    fields::color(data, "backgroundColor", owner)
}

pub fn read_rotation(data: &Value, owner: &str) -> Result<Option<i32>> {
    Ok(fields::integer(data, "rotation", owner)?.map(|r| r.rem_euclid(360) as i32))
}

pub fn read_paragraph_style(data: &Value, owner: &str) -> Result<Option<String>> {
    fields::string(data, "paragraphStyle", owner)
}
