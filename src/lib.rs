//! wsstego - Whitespace Steganography Analyzer
//!
//! Inspects a text file for a payload hidden in its spaces, tabs, newlines
//! and carriage returns, and reports every candidate decoding side by side.
//! No attempt is made to decide which candidate is the real one.
//!
//! ## Decoders
//!
//! ```text
//!                 ┌─> Classify ──────────────────────────> CategoryCounts
//!                 │
//! Text ───────────┼─> Map bits (space=0) ─> 7-bit ASCII ─> Extraction
//!                 ├─> Map bits (space=1) ─> 7-bit ASCII ─> Extraction
//!                 │
//!                 └─> Push lines ─> Stack ─> Render ─────> StackOutcome
//! ```
//!
//! - **Classify**: count space, tab, lf, cr and everything else
//! - **Map bits**: drop newlines, map space/tab to 0/1 under each polarity
//! - **7-bit ASCII**: keep groups decoding to printable ASCII (32..=126)
//! - **Stack**: lines indented by three spaces are pushes of a binary operand
//!
//! Single groups or lines that fail to decode never abort a run; they are
//! skipped or recorded as observations.
//!
//! ## Example
//!
//! ```
//! use wsstego::pipeline::StackOutcome;
//! use wsstego::analyze;
//!
//! let text = "   \t  \t   \n   \t\t \t  \t\n";
//! let report = analyze(text.len(), text);
//!
//! assert_eq!(report.push_commands, 2);
//! assert_eq!(report.stack, StackOutcome::Rendered("Hi".into()));
//! ```

pub mod assignment;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;

pub use assignment::BitAssignment;
pub use error::{Result, WsStegoError};
pub use report::{analyze, AnalysisReport};
