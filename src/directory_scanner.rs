// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module scans a directory for files whose extension is in the fixed
//! allow-list (case-insensitive) and sorts them by file name.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Extensions the viewer accepts, lower-case and without the leading dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "bmp"];

/// Represents the images of one directory together with the current position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    directory: Option<PathBuf>,
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a directory for allowed image files and sorts them by file name.
    /// Sets current_index to 0 (first file) if any image files are found.
    ///
    /// Returns [`Error::InvalidPath`] if `directory` does not exist or is not a
    /// directory, and [`Error::Io`] if it cannot be read.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::InvalidPath(directory.to_path_buf()));
        }

        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_allowed_extension(&path) {
                image_files.push(path);
            }
        }

        image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let current_index = if image_files.is_empty() { None } else { Some(0) };

        Ok(Self {
            directory: Some(directory.to_path_buf()),
            image_files,
            current_index,
        })
    }

    /// Directory this list was scanned from.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Returns the current image path.
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.image_files.get(idx))
            .map(|p| p.as_path())
    }

    /// Index following the current one, wrapping around to the start.
    pub fn next_index(&self) -> Option<usize> {
        let len = self.image_files.len();
        self.current_index.map(|idx| (idx + 1) % len)
    }

    /// Index preceding the current one, wrapping around to the end.
    pub fn previous_index(&self) -> Option<usize> {
        let len = self.image_files.len();
        self.current_index.map(|idx| (idx + len - 1) % len)
    }

    /// Position of the entry whose file name equals the file name of `path`.
    pub fn position_of_file_name(&self, path: &Path) -> Option<usize> {
        let wanted = path.file_name()?;
        self.image_files
            .iter()
            .position(|p| p.file_name() == Some(wanted))
    }

    /// Returns the total number of image files in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Returns the current index if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(|p| p.as_path())
    }

    /// All image paths in display order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.image_files
    }

    /// Sets the current index directly. Out-of-range indices are ignored.
    pub fn set_current_index(&mut self, index: usize) {
        if index < self.image_files.len() {
            self.current_index = Some(index);
        }
    }
}

/// Checks whether `path` carries an allowed image extension, ignoring case.
pub fn is_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_fake_image as create_test_image;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn scan_directory_finds_allowed_images_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "c.gif");
        create_test_image(temp_dir.path(), "d.bmp");
        create_test_image(temp_dir.path(), "e.jpeg");
        create_test_image(temp_dir.path(), "not_image.txt");

        let list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(list.len(), 4);
        assert_eq!(list.current_index(), Some(0));
        assert_eq!(list.directory(), Some(temp_dir.path()));
    }

    #[test]
    fn scan_directory_sorts_by_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(list.paths(), &[img_a, img_b, img_c]);
    }

    #[test]
    fn scan_directory_matches_extensions_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "UPPER.JPG");
        create_test_image(temp_dir.path(), "Mixed.Png");

        let list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn scan_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("folder.jpg")).expect("failed to create dir");
        create_test_image(temp_dir.path(), "a.jpg");

        let list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn scan_directory_returns_empty_for_no_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "readme.txt");

        let list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");

        assert!(list.is_empty());
        assert_eq!(list.current_index(), None);
        assert_eq!(list.current(), None);
        assert_eq!(list.next_index(), None);
        assert_eq!(list.previous_index(), None);
    }

    #[test]
    fn scan_directory_rejects_missing_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");

        let result = ImageList::scan_directory(&missing);
        assert!(matches!(result, Err(Error::InvalidPath(p)) if p == missing));
    }

    #[test]
    fn scan_directory_rejects_file_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = create_test_image(temp_dir.path(), "a.jpg");

        assert!(matches!(
            ImageList::scan_directory(&file),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn next_and_previous_indices_wrap_around() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.jpg");
        create_test_image(temp_dir.path(), "c.jpg");

        let mut list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        assert_eq!(list.previous_index(), Some(2));
        assert_eq!(list.next_index(), Some(1));

        list.set_current_index(2);
        assert_eq!(list.next_index(), Some(0));
        assert_eq!(list.previous_index(), Some(1));
    }

    #[test]
    fn position_of_file_name_ignores_parent_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");
        create_test_image(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        assert_eq!(
            list.position_of_file_name(Path::new("/elsewhere/b.jpg")),
            Some(1)
        );
        assert_eq!(list.position_of_file_name(Path::new("z.jpg")), None);
    }

    #[test]
    fn set_current_index_ignores_out_of_range() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.jpg");

        let mut list = ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        list.set_current_index(5);
        assert_eq!(list.current_index(), Some(0));
    }

    #[test]
    fn is_allowed_extension_checks_allow_list() {
        assert!(is_allowed_extension(Path::new("test.jpg")));
        assert!(is_allowed_extension(Path::new("test.PNG")));
        assert!(is_allowed_extension(Path::new("test.Gif")));
        assert!(is_allowed_extension(Path::new("test.bmp")));
        assert!(!is_allowed_extension(Path::new("test.jpeg")));
        assert!(!is_allowed_extension(Path::new("test.txt")));
        assert!(!is_allowed_extension(Path::new("jpg")));
    }
}
