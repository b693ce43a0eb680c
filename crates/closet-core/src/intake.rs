//! Intake: turning image files into closet entries.
//!
//! Two flows are supported:
//!
//! - an [`IntakeQueue`] of pending files categorized one at a time, the way
//!   a user tags uploads;
//! - [`load_closet_dir`], a bulk load from `<root>/<category>/<image>`.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::category::Category;
use crate::closet::{CatalogEntry, ClosetStore, ImageRef};
use crate::config::Config;
use crate::error::{ClosetError, Result};

/// An image waiting to be categorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub path: PathBuf,
}

impl PendingImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name without extension, used when no item name is given.
    pub fn default_name(&self) -> String {
        self.path
            .file_stem()
            .or_else(|| self.path.file_name())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn image_ref(&self) -> ImageRef {
        ImageRef::new(self.path.to_string_lossy())
    }
}

/// Whether the path has one of the accepted image extensions.
pub fn is_image(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
}

/// Expand files and directories into a sorted, de-duplicated list of images.
///
/// Directories are walked recursively; non-image files are dropped.
pub fn collect_images(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(ClosetError::PathNotFound { path: path.clone() });
        }

        if path.is_dir() {
            let walker = WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));
            for entry in walker {
                let entry = entry?;
                if entry.file_type().is_file() && is_image(entry.path(), extensions) {
                    images.push(entry.into_path());
                }
            }
        } else if is_image(path, extensions) {
            images.push(path.clone());
        } else {
            tracing::debug!(path = %path.display(), "skipping non-image file");
        }
    }

    images.sort();
    images.dedup();
    Ok(images)
}

/// Dot-prefixed names (`.thumbnails`, `.DS_Store`) are never closet content.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Pending uploads, categorized front to back.
#[derive(Debug, Clone, Default)]
pub struct IntakeQueue {
    pending: VecDeque<PendingImage>,
    added: usize,
    skipped: usize,
}

impl IntakeQueue {
    pub fn new(files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            pending: files.into_iter().map(PendingImage::new).collect(),
            added: 0,
            skipped: 0,
        }
    }

    /// The image currently awaiting a category.
    pub fn current(&self) -> Option<&PendingImage> {
        self.pending.front()
    }

    /// Add the current image to the closet and advance.
    ///
    /// A blank `name` falls back to the file name.
    pub fn categorize(
        &mut self,
        store: &mut ClosetStore,
        category: Category,
        name: Option<&str>,
    ) -> Result<CatalogEntry> {
        let image = self.pending.pop_front().ok_or(ClosetError::NoPendingImage)?;
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| image.default_name());

        let entry = store.insert(category, name, image.image_ref()).clone();
        self.added += 1;
        Ok(entry)
    }

    /// Drop the current image without adding it.
    pub fn skip(&mut self) -> Result<PendingImage> {
        let image = self.pending.pop_front().ok_or(ClosetError::NoPendingImage)?;
        self.skipped += 1;
        Ok(image)
    }

    /// Discard everything still pending.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn added(&self) -> usize {
        self.added
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Summary of a directory load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub added: usize,
    pub categories: Vec<Category>,
}

/// Load `<root>/<category>/**/<image>` into the store.
///
/// Each immediate subdirectory name is resolved through the vocabulary;
/// files directly under `root` and hidden directories are ignored.
pub fn load_closet_dir(
    store: &mut ClosetStore,
    root: &Path,
    config: &Config,
) -> Result<LoadSummary> {
    if !root.is_dir() {
        return Err(ClosetError::PathNotFound {
            path: root.to_path_buf(),
        });
    }

    let vocabulary = config.vocabulary();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() && !is_hidden(&path) {
            dirs.push(path);
        }
    }
    dirs.sort();

    let mut summary = LoadSummary::default();
    for dir in dirs {
        let dir_name = dir
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let Some(category) = vocabulary.resolve(&dir_name) else {
            continue;
        };

        let images = collect_images(std::slice::from_ref(&dir), &config.intake.extensions)?;
        let mut queue = IntakeQueue::new(images);
        while !queue.is_done() {
            queue.categorize(store, category.clone(), None)?;
        }

        tracing::info!(category = %category, count = queue.added(), "loaded category directory");
        summary.added += queue.added();
        if !summary.categories.contains(&category) {
            summary.categories.push(category);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        Config::default().intake.extensions
    }

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"img").unwrap();
    }

    #[test]
    fn test_is_image() {
        let exts = exts();
        assert!(is_image(Path::new("a/shirt.JPG"), &exts));
        assert!(is_image(Path::new("shoe.webp"), &exts));
        assert!(!is_image(Path::new("notes.txt"), &exts));
        assert!(!is_image(Path::new("README"), &exts));
    }

    #[test]
    fn test_collect_images_walks_and_filters() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("b.png"));
        touch(&root.join("nested/a.jpg"));
        touch(&root.join("nested/readme.md"));

        let images = collect_images(&[root.to_path_buf(), root.join("b.png")], &exts()).unwrap();
        assert_eq!(images, vec![root.join("b.png"), root.join("nested/a.jpg")]);
    }

    #[test]
    fn test_collect_images_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            collect_images(&[missing], &exts()),
            Err(ClosetError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_queue_categorize_and_skip() {
        let mut store = ClosetStore::new();
        let mut queue = IntakeQueue::new(vec![
            PathBuf::from("up/blue-shirt.jpg"),
            PathBuf::from("up/blurry.jpg"),
            PathBuf::from("up/IMG_001.png"),
        ]);
        assert_eq!(queue.remaining(), 3);
        assert_eq!(
            queue.current().unwrap().path,
            PathBuf::from("up/blue-shirt.jpg")
        );

        let entry = queue
            .categorize(&mut store, Category::Shirts, Some("   "))
            .unwrap();
        assert_eq!(entry.name, "blue-shirt");
        assert_eq!(entry.image.as_str(), "up/blue-shirt.jpg");

        let skipped = queue.skip().unwrap();
        assert_eq!(skipped.path, PathBuf::from("up/blurry.jpg"));

        let entry = queue
            .categorize(&mut store, Category::Shoes, Some(" Red boots "))
            .unwrap();
        assert_eq!(entry.name, "Red boots");

        assert!(queue.is_done());
        assert_eq!(queue.added(), 2);
        assert_eq!(queue.skipped(), 1);
        assert_eq!(store.len(), 2);
        assert!(matches!(
            queue.categorize(&mut store, Category::Shoes, None),
            Err(ClosetError::NoPendingImage)
        ));
    }

    #[test]
    fn test_queue_clear() {
        let mut queue = IntakeQueue::new(vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
        queue.clear();
        assert!(queue.is_done());
        assert!(queue.current().is_none());
        assert!(queue.skip().is_err());
    }

    #[test]
    fn test_load_closet_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("Tops/linen.jpg"));
        touch(&root.join("Tops/polo.png"));
        touch(&root.join("jeans/501.jpg"));
        touch(&root.join("shoes/loafer.jpg"));
        touch(&root.join("shoes/receipt.pdf"));
        touch(&root.join("hats/beanie.jpg"));
        touch(&root.join("stray.jpg"));

        let config = Config::default();
        let mut store = config.new_store();
        let summary = load_closet_dir(&mut store, root, &config).unwrap();

        assert_eq!(summary.added, 5);
        assert_eq!(store.bucket_len(&Category::Shirts), 2);
        assert_eq!(store.bucket_len(&Category::Trousers), 1);
        assert_eq!(store.bucket_len(&Category::Shoes), 1);
        assert_eq!(store.bucket_len(&Category::Other("hats".into())), 1);
        assert!(store.has_bucket(&Category::Dresses));
        assert!(!store.has_items(&Category::Dresses));
        assert_eq!(summary.categories.len(), 4);
    }

    #[test]
    fn test_load_closet_dir_skips_hidden() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join(".thumbnails/x.jpg"));
        touch(&root.join(".git/objects/blob.png"));
        touch(&root.join("shirts/oxford.jpg"));
        touch(&root.join("shirts/.cache/oxford-small.jpg"));

        let config = Config::default();
        let mut store = config.new_store();
        let summary = load_closet_dir(&mut store, root, &config).unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(summary.categories, vec![Category::Shirts]);
        assert_eq!(store.len(), 1);
        assert!(!store.has_bucket(&Category::Other(".thumbnails".into())));
        assert!(store.categories().iter().all(|c| !c.as_str().contains("thumbnails")));
    }

    #[test]
    fn test_load_closet_dir_missing_root() {
        let temp = TempDir::new().unwrap();
        let mut store = ClosetStore::new();
        let result = load_closet_dir(&mut store, &temp.path().join("none"), &Config::default());
        assert!(matches!(result, Err(ClosetError::PathNotFound { .. })));
    }
}
