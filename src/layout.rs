//! On-disk layout: where images live and where their label files go.
//!
//! The core never decodes pixels; discovery only needs each image's path
//! and header-reported dimensions. Label files sit in their own directory
//! (commonly a `labels/` tree parallel to `images/`), one per image,
//! sharing the image's relative path with the label extension.

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::error::BoxmarkError;

/// Extensions recognized as images during discovery.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// One discovered image: its path and pixel dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageEntry {
    /// Dimensions as the `(width, height)` pair the session consumes.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Paired images and labels directories.
#[derive(Clone, Debug)]
pub struct DatasetLayout {
    images_dir: PathBuf,
    labels_dir: PathBuf,
    label_extension: String,
}

impl DatasetLayout {
    /// Creates a layout from explicit directories.
    pub fn new(
        images_dir: impl Into<PathBuf>,
        labels_dir: impl Into<PathBuf>,
        label_extension: impl Into<String>,
    ) -> Self {
        Self {
            images_dir: images_dir.into(),
            labels_dir: labels_dir.into(),
            label_extension: label_extension.into(),
        }
    }

    /// Creates the conventional layout: `images/` and `labels/` under one
    /// root, `.txt` label files.
    pub fn under_root(root: &Path) -> Self {
        Self::new(root.join("images"), root.join("labels"), "txt")
    }

    /// The directory images are discovered in.
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// The directory label files are written to.
    pub fn labels_dir(&self) -> &Path {
        &self.labels_dir
    }

    /// The label file corresponding to an image path.
    ///
    /// Images inside the images directory keep their relative path (so
    /// nested trees map to nested label trees); anything else maps by
    /// filename alone.
    pub fn label_path(&self, image_path: &Path) -> PathBuf {
        let rel = image_path
            .strip_prefix(&self.images_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| {
                image_path
                    .file_name()
                    .map(PathBuf::from)
                    .unwrap_or_default()
            });
        self.labels_dir
            .join(rel)
            .with_extension(&self.label_extension)
    }

    /// Walks the images directory and returns the recognized images with
    /// their header-reported dimensions, sorted by path.
    ///
    /// Files whose headers cannot be read are skipped with a warning; one
    /// corrupt file should not abort a labeling session over the rest of
    /// the directory.
    pub fn discover(&self) -> Result<Vec<ImageEntry>, BoxmarkError> {
        if !self.images_dir.is_dir() {
            return Err(BoxmarkError::LayoutInvalid {
                path: self.images_dir.clone(),
                message: "images directory does not exist".to_string(),
            });
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.images_dir).follow_links(true) {
            let entry = entry.map_err(|source| BoxmarkError::LayoutInvalid {
                path: self.images_dir.clone(),
                message: format!("failed while traversing directory: {source}"),
            })?;

            if !entry.file_type().is_file() || !has_extension(entry.path(), &IMAGE_EXTENSIONS) {
                continue;
            }

            match image_dimensions(entry.path()) {
                Ok((width, height)) => entries.push(ImageEntry {
                    path: entry.path().to_path_buf(),
                    width,
                    height,
                }),
                Err(message) => {
                    warn!("skipping {}: {message}", entry.path().display());
                }
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}

/// Collects every label file under `dir`, sorted by path.
pub fn collect_label_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BoxmarkError> {
    if !dir.is_dir() {
        return Err(BoxmarkError::LayoutInvalid {
            path: dir.to_path_buf(),
            message: "labels directory does not exist".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|source| BoxmarkError::LayoutInvalid {
            path: dir.to_path_buf(),
            message: format!("failed while traversing directory: {source}"),
        })?;

        if entry.file_type().is_file() && has_extension(entry.path(), &[extension]) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    allowed
        .iter()
        .any(|allowed_ext| ext.eq_ignore_ascii_case(allowed_ext))
}

fn image_dimensions(path: &Path) -> Result<(u32, u32), String> {
    let size =
        imagesize::size(path).map_err(|source| format!("unreadable image header: {source}"))?;

    let width: u32 = size
        .width
        .try_into()
        .map_err(|_| format!("image width {} does not fit in u32", size.width))?;
    let height: u32 = size
        .height
        .try_into()
        .map_err(|_| format!("image height {} does not fit in u32", size.height))?;

    Ok((width, height))
}
