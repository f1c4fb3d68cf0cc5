use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::documents::catalog::DocumentSpec;
use crate::documents::extract::{PdfError, PdfExtractor};
use crate::documents::store::{DocumentMap, DocumentStore};

/// A catalog entry that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub name: String,
    pub error: PdfError,
}

/// Outcome of loading the catalog. Every spec ends up in exactly one of the two.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub documents: DocumentMap,
    pub failures: Vec<LoadFailure>,
}

/// Loads every spec independently: a missing or unreadable file is recorded
/// and logged, and the remaining specs are still loaded.
pub async fn load_documents(
    specs: &[DocumentSpec],
    dir: &Path,
    extractor: Arc<dyn PdfExtractor>,
) -> LoadReport {
    let mut report = LoadReport::default();

    for spec in specs {
        let path = spec.path_in(dir);
        match load_one(&path, extractor.clone()).await {
            Ok(text) => {
                info!(name = %spec.name, chars = text.chars().count(), "Loaded brochure");
                report.documents.insert(spec.name.clone(), text);
            }
            Err(error) => {
                let failure = LoadFailure {
                    name: spec.name.clone(),
                    error,
                };
                warn!(
                    name = %failure.name,
                    path = %path.display(),
                    "Failed to load brochure: {}",
                    failure.error
                );
                report.failures.push(failure);
            }
        }
    }

    report
}

async fn load_one(path: &Path, extractor: Arc<dyn PdfExtractor>) -> Result<String, PdfError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| PdfError::Read {
        path: path.display().to_string(),
        source,
    })?;

    // pdf-extract is CPU bound and may panic on malformed input.
    tokio::task::spawn_blocking(move || extractor.extract_text(&bytes))
        .await
        .map_err(|e| PdfError::Panicked(e.to_string()))?
}

/// Loads the catalog and publishes whatever succeeded to `store`.
pub async fn load_into_store(
    store: &DocumentStore,
    specs: &[DocumentSpec],
    dir: &Path,
    extractor: Arc<dyn PdfExtractor>,
) -> LoadReport {
    let mut report = load_documents(specs, dir, extractor).await;
    let loaded = report.documents.len();
    store.publish(std::mem::take(&mut report.documents));

    info!(
        loaded,
        failed = report.failures.len(),
        "Brochure content loaded"
    );
    report
}
