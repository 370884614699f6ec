//! Input manager: validates resume files and turns them into text

use crate::config::InputConfig;
use crate::error::{Result, ResumeParserError};
use crate::input::decoder::{decode_to_text, DocumentDecoder, PdfDecoder};
use crate::input::file_detector::FileType;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    allowed_extensions: Vec<String>,
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            allowed_extensions: config
                .allowed_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            cache: HashMap::new(),
            enable_cache: config.enable_cache,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read and decode one resume file.
    ///
    /// Fails with `MissingFile` when the path does not exist, `UnsupportedType`
    /// when its extension is not allowed, and `Decode` when the content cannot
    /// be turned into text.
    pub async fn load_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeParserError::MissingFile(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.check_file_type(path)?;
        let bytes = fs::read(path).await?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                // CPU-bound and synchronous; keep it off the async workers
                tokio::task::spawn_blocking(move || PdfDecoder.decode(&bytes))
                    .await
                    .map_err(|e| {
                        ResumeParserError::Decode(format!("PDF decoding task failed: {}", e))
                    })??
            }
            other => {
                info!("Reading {:?} file: {}", other, path.display());
                decode_to_text(other, &bytes)?
            }
        };

        if text.trim().is_empty() {
            warn!("No text decoded from {}; it may be a scanned image", path.display());
        }

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn check_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                ResumeParserError::UnsupportedType(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        let file_type = FileType::from_extension(&extension);
        if file_type == FileType::Unknown || !self.allowed_extensions.contains(&extension) {
            return Err(ResumeParserError::UnsupportedType(format!(
                ".{} (allowed: {})",
                extension,
                self.allowed_extensions.join(", ")
            )));
        }

        Ok(file_type)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
