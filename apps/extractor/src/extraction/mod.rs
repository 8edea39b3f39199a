// Deterministic skill matrix extraction.
// Pure, synchronous stages: normalizer → title → seniority → skills → lists → salary → summary.
// No I/O here; this is the baseline every other producer falls back to.

pub mod lists;
pub mod normalizer;
pub mod pipeline;
pub mod salary;
pub mod seniority;
pub mod skills;
pub mod summary;
pub mod title;
pub mod vocabulary;

pub use pipeline::fallback_extract;
