//! Longan - declarative slide-deck generation
//!
//! This library turns structured data (JSON or YAML "RawData") into
//! presentations. Slide masters, components and brandings are registered in
//! a [`registry::Catalog`]; factories resolve them by key, label or Rust type
//! path, bind the data to constructor parameters and render the result into
//! an in-memory [`document::Document`] that a writer serializes.
//!
//! # Features
//!
//! - **Registries**: Slide masters, components and brandings by key, label or type path
//! - **Schemas**: JSON-schema-like data contracts merged from component capabilities
//! - **Factories**: Components, charts, slides and whole presentations from RawData
//! - **Slide masters**: 23 built-in layouts, from title slides to chart grids
//! - **Brandings**: Fonts, chart palettes and paragraph styles, loadable from YAML
//!
//! # Example - Building a deck
//!
//! ```rust
//! use longan::presentation::PresentationFactory;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), longan::Error> {
//! let factory = PresentationFactory::new();
//! let slides = [
//!     json!({"master": "title-subtitle", "data": {"title": "Q3", "subtitle": "Results"}}),
//!     json!({"master": "chart-title", "data": {
//!         "title": "Revenue",
//!         "chartType": "StackedBar",
//!         "chartData": {"series": [{"label": "2024", "data": {"Q1": 100, "Q2": 120}}]}
//!     }}),
//! ];
//! let prs = factory.create("Quarterly Review", Some("default"), &slides, None, None, None)?;
//! assert_eq!(prs.slide_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a master's data contract
//!
//! ```rust
//! use longan::registry::Catalog;
//!
//! let catalog = Catalog::with_builtins();
//! let agenda = catalog.slide_masters().get_type("agenda").unwrap();
//! let schema = agenda.data_schema();
//! assert!(schema.required.contains(&"items".to_string()));
//! ```

/// Branding capability, paragraph styles and themes
pub mod branding;

/// Chart components and the chart factory
pub mod charts;

/// Errors, colors, units and document properties
pub mod common;

/// Renderable components and the component factory
pub mod components;

/// In-memory document model and output writers
pub mod document;

/// Presentations, their factory and output storage
pub mod presentation;

/// Type registries and the catalog bundling them
pub mod registry;

/// Data schemas, capability fragments and validation
pub mod schema;

/// Slide masters and the slide factory
pub mod slides;

pub use common::{Error, Result};
pub use presentation::{Presentation, PresentationFactory};
