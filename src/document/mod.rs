//! Presentation document model.
//!
//! This is the backend the construction pipeline draws into: slide masters
//! and components add shapes, text runs, tables and charts to a
//! [`Document`], which a [`DocumentWriter`] later serializes for a given
//! [`WriterFormat`].
//!
//! # Architecture
//!
//! - `Document`: slides, layout and document properties
//! - `DocSlide`: one slide with its shapes
//! - `DocShape`: a positioned shape with a `ShapeKind` payload
//! - `TextFrame` / `Paragraph` / `TextRun`: rich text
//! - `TableData`, `ChartData`: table and chart payloads
//!
//! # Example
//!
//! ```rust
//! use longan::document::{Document, Frame, ShapeKind, TextFrame};
//!
//! let mut doc = Document::new();
//! let slide = doc.add_slide("blank");
//! let shape = slide.add_shape(
//!     Frame::new(10.0, 10.0, 200.0, 40.0),
//!     ShapeKind::RichText(TextFrame::default()),
//! );
//! assert_eq!(shape.id, 2);
//! ```
pub mod chart;
pub mod doc;
pub mod paragraph;
pub mod shape;
pub mod slide;
pub mod table;
pub mod types;
pub mod writer;

pub use chart::{ChartData, ChartFamily, ChartGrouping, ChartSeries, Marker, MarkerSymbol};
pub use doc::{Document, Layout};
pub use paragraph::{Bullet, Paragraph, RunFont, TextFrame, TextRun};
pub use shape::{AutoShapeType, DocShape, ShapeKind};
pub use slide::DocSlide;
pub use table::{TableCell, TableData, TableRow};
pub use types::{Frame, Hyperlink, Insets, Outline, ShapeId};
pub use writer::{DocumentWriter, SerializedWriter, WriterFormat, WriterSet};
