use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{error, info, warn};

use crate::{FaqItem, errors::Result};

/// File name used when `FAQ_DATA_PATH` is not configured.
pub const DEFAULT_FAQ_PATH: &str = "faq_data.json";

/// Immutable, ordered FAQ dataset.
///
/// Populated once at startup and shared read-only afterwards (wrap in `Arc`).
#[derive(Debug, Clone, Default)]
pub struct FaqStore {
    items: Vec<FaqItem>,
    path: Option<PathBuf>,
}

impl FaqStore {
    /// Builds a store from in-memory items, keeping their order.
    pub fn from_items(items: Vec<FaqItem>) -> Self {
        Self { items, path: None }
    }

    /// Loads the FAQ array from `path`, recovering from every data error.
    ///
    /// - readable and well-formed → items in file order (incomplete rows dropped)
    /// - malformed or unreadable → logged, empty store
    /// - missing → file created with an empty array, empty store
    pub fn load_or_init(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            error!(path = %path.display(), "FAQ dataset not found, creating empty FAQ data");
            if let Err(e) = write_empty(path) {
                error!(path = %path.display(), error = %e, "failed to create FAQ file");
            }
            return Self {
                items: Vec::new(),
                path: Some(path.to_path_buf()),
            };
        }

        let items = match read_items(path) {
            Ok(items) => {
                info!(
                    path = %path.display(),
                    count = items.len(),
                    "Loaded {} FAQ items",
                    items.len()
                );
                items
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error reading FAQ file");
                Vec::new()
            }
        };

        Self {
            items,
            path: Some(path.to_path_buf()),
        }
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Source file, if the store was loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Dataset as pretty JSON (2-space indent), the form embedded in prompts.
    pub fn to_pretty_json(&self) -> String {
        // Serializing plain string pairs cannot fail.
        serde_json::to_string_pretty(&self.items).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Strictly parses a JSON array of `{question, answer}` objects.
fn read_items(path: &Path) -> Result<Vec<FaqItem>> {
    let raw = fs::read_to_string(path)?;
    let parsed: Vec<FaqItem> = serde_json::from_str(&raw)?;

    let total = parsed.len();
    let items: Vec<FaqItem> = parsed.into_iter().filter(FaqItem::is_complete).collect();
    if items.len() != total {
        warn!(
            dropped = total - items.len(),
            "skipped FAQ rows with an empty question or answer"
        );
    }
    Ok(items)
}

fn write_empty(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let empty: Vec<FaqItem> = Vec::new();
    fs::write(path, serde_json::to_string_pretty(&empty)?)?;
    Ok(())
}
