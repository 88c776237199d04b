//! Direction registry for discovery and selection
//!
//! Provides a centralized registry of the available conversion directions.
//! Directions can be registered, retrieved by name, or looked up by their
//! source/target format pair.

use crate::direction::Direction;
use crate::error::ConvertError;
use std::collections::HashMap;

/// Registry of conversion directions
///
/// # Examples
///
/// ```ignore
/// let registry = DirectionRegistry::default();
/// let html = registry.convert("# Title", "markdown", "html")?;
/// ```
pub struct DirectionRegistry {
    directions: HashMap<String, Box<dyn Direction>>,
}

impl DirectionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        DirectionRegistry {
            directions: HashMap::new(),
        }
    }

    /// Register a direction
    ///
    /// If a direction with the same name already exists, it will be replaced.
    pub fn register<D: Direction + 'static>(&mut self, direction: D) {
        self.directions
            .insert(direction.name().to_string(), Box::new(direction));
    }

    /// Get a direction by name
    pub fn get(&self, name: &str) -> Result<&dyn Direction, ConvertError> {
        self.directions
            .get(name)
            .map(|d| d.as_ref())
            .ok_or_else(|| ConvertError::DirectionNotFound(name.to_string()))
    }

    /// Check if a direction exists
    pub fn has(&self, name: &str) -> bool {
        self.directions.contains_key(name)
    }

    /// List all available direction names (sorted)
    pub fn list_directions(&self) -> Vec<String> {
        let mut names: Vec<_> = self.directions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Find the direction that converts `source` into `target`
    pub fn find(&self, source: &str, target: &str) -> Result<&dyn Direction, ConvertError> {
        self.directions
            .values()
            .find(|d| d.source() == source && d.target() == target)
            .map(|d| d.as_ref())
            .ok_or_else(|| ConvertError::DirectionNotFound(format!("{source} -> {target}")))
    }

    /// Detect the source format from a filename based on its extension
    ///
    /// Returns the format name if a registered direction consumes the
    /// extension, or None otherwise.
    pub fn detect_source_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for direction in self.directions.values() {
            if direction.source_extensions().contains(&extension) {
                return Some(direction.source().to_string());
            }
        }

        None
    }

    /// Convert input text from `source` to `target`
    pub fn convert(
        &self,
        input: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ConvertError> {
        Ok(self.find(source, target)?.convert(input))
    }

    /// Create a registry with the built-in directions
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::html::MarkdownToHtml);
        registry.register(crate::markdown::HtmlToMarkdown);

        registry
    }
}

impl Default for DirectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
