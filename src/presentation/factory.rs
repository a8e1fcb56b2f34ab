//! Building and saving whole presentations from slide definitions.
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use super::config::PresentationConfig;
use super::deck::DeckDefinition;
use super::prs::Presentation;
use super::storage::Disks;
use super::types::{Author, FileInfo};
use crate::common::{Error, Result};
use crate::document::{DocumentWriter, WriterFormat, WriterSet};
use crate::registry::{Catalog, RegistryItem};
use crate::schema::validate;
use crate::slides::SlideFactory;

/// Where and how [`PresentationFactory::build_and_save`] writes a file.
///
/// Unset fields fall back to the factory's [`PresentationConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// File name without extension; a random UUID when unset
    pub filename: Option<String>,
    pub disk: Option<String>,
    pub directory: Option<String>,
    /// Write to the disk root instead of `directory`
    pub in_root_folder: bool,
    /// Overrides the presentation's own writer format
    pub writer_format: Option<WriterFormat>,
}

impl SaveOptions {
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn disk(mut self, disk: impl Into<String>) -> Self {
        self.disk = Some(disk.into());
        self
    }

    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn in_root_folder(mut self) -> Self {
        self.in_root_folder = true;
        self
    }

    pub fn writer_format(mut self, format: WriterFormat) -> Self {
        self.writer_format = Some(format);
        self
    }
}

/// Creates presentations from `{master, data}` slide definitions.
///
/// ```rust
/// use longan::presentation::PresentationFactory;
/// use serde_json::json;
///
/// let factory = PresentationFactory::new();
/// let prs = factory
///     .create("Deck", None, &[json!({"master": "title", "data": {"title": "Hello"}})], None, None, None)
///     .unwrap();
/// assert_eq!(prs.slide_count(), 1);
/// ```
#[derive(Debug)]
pub struct PresentationFactory {
    catalog: Arc<Catalog>,
    config: PresentationConfig,
    writers: WriterSet,
    disks: Disks,
    author: Option<Author>,
}

impl Default for PresentationFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationFactory {
    /// A factory over the built-in catalog and default config.
    pub fn new() -> Self {
        Self::with_config(Arc::new(Catalog::with_builtins()), PresentationConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: PresentationConfig) -> Self {
        let disks = Disks::new(config.disks.clone());
        Self {
            catalog,
            config,
            writers: WriterSet::default(),
            disks,
            author: None,
        }
    }

    /// Builder method: stamp `author` on every presentation created.
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Install a writer for one output format.
    pub fn install_writer(&mut self, writer: impl DocumentWriter + 'static) -> &mut Self {
        self.writers.install(writer);
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn disks_mut(&mut self) -> &mut Disks {
        &mut self.disks
    }

    /// Create a presentation and render every slide definition in order.
    ///
    /// `branding` falls back to the configured branding, `width`/`height`
    /// to the configured size and `format` to the configured writer format.
    /// The first failing slide aborts the whole build.
    pub fn create(
        &self,
        title: &str,
        branding: Option<&str>,
        slides: &[Value],
        width: Option<f64>,
        height: Option<f64>,
        format: Option<WriterFormat>,
    ) -> Result<Presentation> {
        let branding_name = branding.unwrap_or(self.config.branding.as_str());
        let branding_type = self.catalog.resolve_branding(branding_name, "")?;
        debug!(title, branding = branding_type.key(), slides = slides.len(), "creating presentation");

        let mut prs = Presentation::new(title, Arc::clone(&self.catalog), branding_type.instantiate())
            .with_size(
                width.unwrap_or(self.config.width),
                height.unwrap_or(self.config.height),
            )
            .with_padding(self.config.horizontal_padding, self.config.vertical_padding)
            .with_writer_format(format.unwrap_or(self.config.writer_format));
        if let Some(author) = &self.author {
            prs = prs.with_author(author.clone());
        }

        for (index, definition) in slides.iter().enumerate() {
            let context = format!("Slide definition at index {index}");
            let master = definition.get("master").ok_or_else(|| Error::MissingKey {
                key: "master",
                context: context.clone(),
            })?;
            let data = definition
                .get("data")
                .ok_or_else(|| Error::MissingKey { key: "data", context: context.clone() })?;
            let master = master
                .as_str()
                .ok_or_else(|| Error::invalid_field("master", context.as_str(), "a string", master))?;

            let slide_type = self
                .catalog
                .resolve_slide_master(master, &format!(" at index {index}"))?;
            if self.config.validate_input {
                validate(&slide_type.data_schema(), data, slide_type.key())?;
            }
            let slide = SlideFactory::create(&slide_type, data)?;
            prs.add_slide(slide.as_ref())?;
        }
        Ok(prs)
    }

    /// Create a presentation from a loaded [`DeckDefinition`].
    pub fn create_deck(&self, deck: &DeckDefinition) -> Result<Presentation> {
        self.create(
            &deck.title,
            deck.branding.as_deref(),
            &deck.slides,
            deck.width,
            deck.height,
            deck.writer,
        )
    }

    /// Finalize, serialize and store a presentation.
    pub fn build_and_save(&self, prs: &mut Presentation, options: SaveOptions) -> Result<FileInfo> {
        if let Some(format) = options.writer_format {
            prs.set_writer_format(format);
        }
        let filename = options
            .filename
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let disk = options.disk.unwrap_or_else(|| self.config.output.disk.clone());
        let directory = options
            .directory
            .unwrap_or_else(|| self.config.output.directory.clone());

        let bytes = prs.write(&self.writers)?;
        let filename = format!("{filename}.{}", prs.writer_format().extension());
        let relative_path = if options.in_root_folder {
            filename.clone()
        } else {
            format!("{}/{filename}", directory.trim_end_matches('/'))
        };
        let absolute_path = self.disks.put(&disk, &relative_path, &bytes)?;
        info!(presentation = prs.title(), path = %absolute_path.display(), "saved presentation");

        Ok(FileInfo {
            filename,
            relative_path,
            absolute_path,
            disk,
        })
    }

    /// [`create`](Self::create) then [`build_and_save`](Self::build_and_save).
    pub fn create_and_save(&self, deck: &DeckDefinition, options: SaveOptions) -> Result<FileInfo> {
        let mut prs = self.create_deck(deck)?;
        self.build_and_save(&mut prs, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RegistryKind;
    use serde_json::json;

    fn title_slide(title: &str) -> Value {
        json!({"master": "title", "data": {"title": title}})
    }

    #[test]
    fn test_create_uses_config_defaults() {
        let factory = PresentationFactory::new();
        let prs = factory
            .create("T", None, &[title_slide("Hello")], None, Some(1080.0), None)
            .unwrap();
        assert_eq!(prs.slide_count(), 1);
        assert_eq!((prs.width(), prs.height()), (1280.0, 1080.0));
        assert_eq!(prs.writer_format(), WriterFormat::PowerPoint2007);
    }

    #[test]
    fn test_missing_keys_name_index() {
        let factory = PresentationFactory::new();
        let err = factory
            .create("T", None, &[title_slide("ok"), json!({"master": "title"})], None, None, None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Slide definition at index 1 is missing required 'data' key");
    }

    #[test]
    fn test_unknown_master_and_branding() {
        let factory = PresentationFactory::new();
        let err = factory
            .create("T", None, &[json!({"master": "nope", "data": {}})], None, None, None)
            .unwrap_err();
        match err {
            Error::UnknownRegistryKey { kind, context, available, .. } => {
                assert_eq!(kind, RegistryKind::SlideMaster);
                assert_eq!(context, " at index 0");
                assert_eq!(available.len(), 23);
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = factory.create("T", Some("acme"), &[], None, None, None).unwrap_err();
        assert!(err.to_string().starts_with("Unknown branding 'acme'"));
    }

    #[test]
    fn test_validate_input_rejects_bad_payload() {
        let config = PresentationConfig {
            validate_input: true,
            ..PresentationConfig::default()
        };
        let factory = PresentationFactory::with_config(Arc::new(Catalog::with_builtins()), config);
        let err = factory
            .create("T", None, &[json!({"master": "title", "data": {"title": 5}})], None, None, None)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_build_and_save_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = PresentationConfig::default().with_disk("local", dir.path());
        let factory = PresentationFactory::with_config(Arc::new(Catalog::with_builtins()), config);
        let mut prs = factory.create("T", None, &[title_slide("Hi")], None, None, None).unwrap();

        let info = factory
            .build_and_save(
                &mut prs,
                SaveOptions::default().filename("deck").writer_format(WriterFormat::Serialized),
            )
            .unwrap();
        assert_eq!(info.filename, "deck.phppt");
        assert_eq!(info.relative_path, "ppt/deck.phppt");
        assert_eq!(info.disk, "local");
        assert!(info.absolute_path.is_file());
        assert!(prs.is_finalized());
    }

    #[test]
    fn test_build_and_save_random_name_in_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = PresentationConfig::default().with_disk("local", dir.path());
        let factory = PresentationFactory::with_config(Arc::new(Catalog::with_builtins()), config);
        let mut prs = factory
            .create("T", None, &[], None, None, Some(WriterFormat::Serialized))
            .unwrap();
        let info = factory
            .build_and_save(&mut prs, SaveOptions::default().in_root_folder())
            .unwrap();
        assert_eq!(info.relative_path, info.filename);
        assert_eq!(info.filename.len(), 36 + ".phppt".len());
    }
}
