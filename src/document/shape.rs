//! Shapes placed on a document slide.
use serde::Serialize;

use super::chart::ChartData;
use super::paragraph::TextFrame;
use super::table::TableData;
use super::types::{Frame, Hyperlink, Outline, ShapeId};
use crate::common::RGBColor;

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoShapeType {
    #[default]
    Rectangle,
    Oval,
    RoundedRectangle,
}

/// What a shape contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeKind {
    RichText(TextFrame),
    AutoShape { geometry: AutoShapeType },
    Picture { path: String, name: String },
    Table(TableData),
    Chart(ChartData),
}

/// A shape on a slide (text box, image, etc.).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocShape {
    /// Shape ID
    pub id: ShapeId,
    pub frame: Frame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<RGBColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,
    pub kind: ShapeKind,
}

impl DocShape {
    pub fn new(id: ShapeId, frame: Frame, kind: ShapeKind) -> Self {
        Self {
            id,
            frame,
            fill: None,
            outline: None,
            hyperlink: None,
            kind,
        }
    }

    /// Builder method: set solid fill.
    pub fn fill(&mut self, color: Option<RGBColor>) -> &mut Self {
        self.fill = color;
        self
    }

    /// Builder method: set outline.
    pub fn outline(&mut self, outline: Option<Outline>) -> &mut Self {
        self.outline = outline;
        self
    }

    /// Builder method: set hyperlink.
    pub fn hyperlink(&mut self, link: Option<Hyperlink>) -> &mut Self {
        self.hyperlink = link;
        self
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::RichText(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.kind {
            ShapeKind::RichText(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&TableData> {
        match &self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn chart(&self) -> Option<&ChartData> {
        match &self.kind {
            ShapeKind::Chart(chart) => Some(chart),
            _ => None,
        }
    }
}
