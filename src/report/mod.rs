//! Report generation from IRRUT100 listings
//!
//! [`Engine`] splits a listing into per-profile sections and classifies each
//! line by the [`CategoryRegistry`]; [`ReportRenderer`] turns each finished
//! category into report files, optionally cleaned up by [`RedactionRules`].

pub mod category;
pub mod engine;
pub mod redact;
pub mod render;

pub use category::{Category, CategoryRegistry, HEADER_PLACEHOLDER};
pub use engine::{Engine, ProcessSummary, SECTION_MARKER, SectionSink, SectionSpan};
pub use redact::RedactionRules;
pub use render::{RenderConfig, RenderOutcome, ReportFormat, ReportRenderer, RunTag, WrittenReport};
