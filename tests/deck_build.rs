//! End-to-end deck builds through the presentation factory.
//!
//! These tests go from RawData slide definitions to a saved, serialized
//! document on a temporary disk.

use std::sync::Arc;

use longan::document::{Document, DocumentWriter, WriterFormat};
use longan::presentation::{
    Author, DeckDefinition, PresentationConfig, PresentationFactory, SaveOptions, sample,
};
use longan::registry::{Catalog, RegistryItem};
use longan::schema::validate;
use longan::{Error, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::tempdir;

fn factory_in(dir: &std::path::Path) -> PresentationFactory {
    let config = PresentationConfig {
        writer_format: WriterFormat::Serialized,
        ..PresentationConfig::default()
    }
    .with_disk("local", dir);
    PresentationFactory::with_config(Arc::new(Catalog::with_builtins()), config)
}

fn revenue() -> Value {
    json!({"series": [
        {"label": "2024", "data": {"Q1": 100, "Q2": 120}},
        {"label": "2025", "data": {"Q1": 110, "Q2": 150}}
    ]})
}

#[test]
fn single_title_slide() -> Result<()> {
    let factory = PresentationFactory::new();
    let prs = factory.create(
        "T",
        Some("default"),
        &[json!({"master": "title", "data": {"title": "Hello"}})],
        None,
        None,
        None,
    )?;
    assert_eq!(prs.slide_count(), 1);
    let slide = &prs.document().slides()[0];
    assert_eq!(slide.master(), "title");
    assert_eq!(slide.texts(), vec!["Hello".to_string()]);
    Ok(())
}

#[test]
fn missing_master_names_index_zero() {
    let factory = PresentationFactory::new();
    let err = factory
        .create("T", None, &[json!({"data": {"title": "Hello"}})], None, None, None)
        .unwrap_err();
    assert!(matches!(err, Error::MissingKey { key: "master", .. }));
    assert_eq!(
        err.to_string(),
        "Slide definition at index 0 is missing required 'master' key"
    );
}

#[test]
fn mixed_deck_renders_in_order() -> Result<()> {
    let factory = PresentationFactory::new();
    let deck = DeckDefinition::new("Quarterly Review")
        .slide("title-subtitle", json!({"title": "Q3", "subtitle": "Results"}))
        .slide(
            "blank-with-title",
            json!({
                "title": "Components",
                "components": [
                    {"type": "text-box", "data": {"text": "Hi"}},
                    {"type": "shape", "data": {"shape": "round"}}
                ]
            }),
        )
        .slide(
            "six-up",
            json!({
                "title": "Pillars",
                "boxes": [
                    {"title": "One", "description": "a"},
                    {"title": "Two", "description": "b"},
                    {"title": "Three", "description": "c"},
                    {"title": "Four", "description": "d"}
                ]
            }),
        )
        .slide(
            "table",
            json!({
                "title": "Units",
                "headers": ["Region", "Q1", "Q2"],
                "data": [["North", "10", "12"], ["South", "8", "9"]]
            }),
        )
        .slide(
            "chart-two-up",
            json!({
                "title": "Compare",
                "leftChartType": "Line",
                "leftChartData": revenue(),
                "rightChartType": "StackedColumn",
                "rightChartData": revenue()
            }),
        );

    let prs = factory.create_deck(&deck)?;
    let slides = prs.document().slides();
    let masters: Vec<_> = slides.iter().map(|s| s.master()).collect();
    assert_eq!(
        masters,
        vec!["title-subtitle", "blank-with-title", "six-up", "table", "chart-two-up"]
    );

    // components first, then the title
    assert_eq!(slides[1].shapes().len(), 3);
    assert_eq!(slides[1].texts()[0], "Hi");

    // title plus four heading/description pairs
    assert_eq!(slides[2].shapes().len(), 1 + 4 * 2);

    let table = slides[3]
        .shapes()
        .iter()
        .find_map(|s| s.table())
        .expect("table shape");
    assert_eq!(table.row_count(), 3);
    let width = (1280.0_f64 / 3.0).floor();
    assert!(table.rows.iter().flat_map(|r| &r.cells).all(|c| c.width == width));

    let charts: Vec<_> = slides[4].shapes().iter().filter_map(|s| s.chart()).collect();
    assert_eq!(charts.len(), 2);
    Ok(())
}

#[test]
fn every_master_example_validates_and_builds() -> Result<()> {
    let catalog = Catalog::with_builtins();
    for master in catalog.slide_masters().entries() {
        validate(&master.data_schema(), &master.example_data(), master.key())?;
    }
    let deck = sample::sample_deck(&catalog);
    let prs = PresentationFactory::new().create_deck(&deck)?;
    assert_eq!(prs.slide_count(), catalog.slide_masters().len());
    Ok(())
}

#[test]
fn saves_serialized_deck_to_disk() -> Result<()> {
    let dir = tempdir().expect("create temp dir");
    let factory = factory_in(dir.path()).with_author(Author::new("Ada Lovelace"));
    let deck = DeckDefinition::new("Saved").slide("text", json!({"text": "Body"}));

    let info = factory.create_and_save(&deck, SaveOptions::default().filename("saved"))?;
    assert_eq!(info.filename, "saved.phppt");
    assert_eq!(info.relative_path, "ppt/saved.phppt");
    assert_eq!(info.absolute_path, std::path::absolute(dir.path().join("ppt/saved.phppt"))?);

    let written: Value = serde_json::from_slice(&std::fs::read(&info.absolute_path)?)?;
    assert_eq!(written["properties"]["title"], "Saved");
    assert_eq!(written["properties"]["creator"], "Ada Lovelace");
    assert_eq!(written["slides"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[test]
fn deck_file_round_trip_through_yaml() -> Result<()> {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("deck.yaml");
    std::fs::write(
        &path,
        "title: From YAML\nslides:\n  - master: agenda\n    data:\n      title: Agenda\n      items: [Intro, Numbers, Outlook]\n  - master: quote\n    data:\n      quote: Simplicity is prerequisite for reliability.\n      attribution: Dijkstra\n",
    )?;
    let deck = DeckDefinition::from_path(&path)?;
    let prs = factory_in(dir.path()).create_deck(&deck)?;
    assert_eq!(prs.slide_count(), 2);
    assert!(
        prs.document().slides()[1]
            .texts()
            .iter()
            .any(|t| t.contains("Dijkstra"))
    );
    Ok(())
}

#[test]
fn unavailable_writer_leaves_no_file() {
    let dir = tempdir().expect("create temp dir");
    let factory = factory_in(dir.path());
    let mut prs = factory
        .create("T", None, &[], None, None, Some(WriterFormat::Pdf))
        .expect("create presentation");
    let err = factory
        .build_and_save(&mut prs, SaveOptions::default().filename("nope"))
        .unwrap_err();
    assert_eq!(err.to_string(), "No document writer registered for format PDF");
    assert!(!dir.path().join("ppt").exists());
}

/// Stand-in for a host's HTML exporter: one heading per slide.
struct OutlineWriter;

impl DocumentWriter for OutlineWriter {
    fn format(&self) -> WriterFormat {
        WriterFormat::Html
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>> {
        let body: String = document
            .slides()
            .iter()
            .map(|s| format!("<h1>{}</h1>", s.texts().join(" ")))
            .collect();
        Ok(body.into_bytes())
    }
}

#[test]
fn host_writer_and_extra_disk() -> Result<()> {
    let dir = tempdir().expect("create temp dir");
    let mut factory = factory_in(dir.path());
    factory.install_writer(OutlineWriter);
    factory.disks_mut().insert("public", dir.path().join("public"));

    let deck = DeckDefinition::new("Html").slide("title", json!({"title": "Hello"}));
    let info = factory.create_and_save(
        &deck,
        SaveOptions::default()
            .filename("outline")
            .disk("public")
            .directory("exports/")
            .writer_format(WriterFormat::Html),
    )?;
    assert_eq!(info.relative_path, "exports/outline.html");
    assert_eq!(std::fs::read_to_string(&info.absolute_path)?, "<h1>Hello</h1>");

    let err = factory
        .create_and_save(&deck, SaveOptions::default().disk("s3"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown storage disk 's3'. Available disks: local, public"
    );
    Ok(())
}

#[test]
fn document_outlives_presentation() -> Result<()> {
    let prs = PresentationFactory::new().create(
        "T",
        None,
        &[json!({"master": "text", "data": {"text": "Kept"}})],
        None,
        None,
        None,
    )?;
    let document = prs.into_document();
    assert_eq!(document.slide_count(), 1);
    assert_eq!(document.slides()[0].texts(), vec!["Kept".to_string()]);
    Ok(())
}
