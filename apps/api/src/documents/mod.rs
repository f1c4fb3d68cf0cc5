// Brochure documents: the fixed catalog, PDF text extraction, and the
// readiness-aware store the master suggestion endpoint reads from.
// Loading happens once at startup; nothing here mutates after publish.

pub mod catalog;
pub mod extract;
pub mod loader;
pub mod store;
