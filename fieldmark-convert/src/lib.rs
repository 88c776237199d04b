//! Markdown ↔ HTML conversion for survey rich text
//!
//!     Survey authors write styled text (headings, bold/italic, lists,
//!     blockquotes) in a small markdown subset. The survey definition stores
//!     that text as an equally small HTML subset, and editing an existing
//!     definition requires converting the stored HTML back into markdown.
//!     This crate is both halves of that round trip.
//!
//!     This is a pure lib, that is, it powers the fieldmark CLI but is shell
//!     agnostic: no code here reads files, touches env vars or prints to std
//!     streams. Both transforms are plain string-in/string-out functions with
//!     no state between calls.
//!
//! The file structure:
//!     .
//!     ├── error.rs        # ConvertError for registry lookups
//!     ├── direction.rs    # Direction trait definition
//!     ├── registry.rs     # DirectionRegistry for discovery and selection
//!     ├── block.rs        # Transient block model shared by scanner and renderer
//!     ├── html            # markdown → HTML (scanner, inline rules, renderer)
//!     └── markdown        # HTML → markdown (substitution pipeline)
//!
//! Core algorithms
//!
//!     The forward transform is a line-oriented state machine: each input line
//!     is classified (blank, heading, blockquote, list item, plain text) and
//!     either emitted immediately or accumulated into the in-progress
//!     paragraph or list, which is flushed when the line pattern changes. See
//!     html/scanner.rs. Inline emphasis is resolved per block at emission
//!     time, bold before italic (html/inline.rs).
//!
//!     The reverse transform is deliberately not a parser. It is a fixed,
//!     ordered sequence of whole-string substitutions (block rules before
//!     inline rules, newline normalization last) and is documented as
//!     best-effort: only the tag subset the forward direction produces is
//!     guaranteed to convert back. Foreign tags pass through as literal text.
//!     See markdown/mod.rs.
//!
//! Subset boundaries
//!
//!     No links, images, code spans, tables or nested lists. Unrecognized
//!     markdown degrades to literal paragraph text; unrecognized HTML passes
//!     through verbatim. Neither transform sanitizes its input — callers
//!     feeding untrusted HTML to [`to_markdown`] need an external
//!     sanitization step.

pub mod block;
pub mod direction;
pub mod error;
pub mod html;
pub mod markdown;
pub mod registry;

pub use block::{Block, ListKind};
pub use direction::Direction;
pub use error::ConvertError;
pub use html::to_html;
pub use markdown::to_markdown;
pub use registry::DirectionRegistry;
