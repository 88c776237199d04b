//! Direction trait definition
//!
//! A [`Direction`] is a one-way conversion between two named formats. Unlike
//! a full parse/serialize format abstraction, directions are infallible:
//! both built-in transforms render unrecognized input as best-effort literal
//! text instead of rejecting it, so `convert` returns a plain `String`.

/// Trait for one-way document conversions
///
/// Implementors convert the full source text in one pass and hold no state
/// between calls, so a single instance is safe to share across threads.
pub trait Direction: Send + Sync {
    /// Registry name of this direction (e.g., "markdown-to-html")
    fn name(&self) -> &str;

    /// Optional description of this direction
    fn description(&self) -> &str {
        ""
    }

    /// Name of the format this direction consumes (e.g., "markdown")
    fn source(&self) -> &str;

    /// Name of the format this direction produces (e.g., "html")
    fn target(&self) -> &str;

    /// File extensions associated with the source format, without the dot
    ///
    /// Used for automatic source-format detection from filenames.
    fn source_extensions(&self) -> &[&str] {
        &[]
    }

    /// Convert the entire input text
    fn convert(&self, input: &str) -> String;
}
