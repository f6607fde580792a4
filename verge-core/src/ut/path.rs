// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::constant::MASK_SUFFIX_RULES;
use crate::error::VergeError;

/// Ensure a directory exists, creating it (and any parents) if missing
///
/// Existing directories are reused rather than incremented because the mask
/// outputs live in fixed folder names that the rename command depends on.
///
/// # Arguments
///
/// * `directory` - Path to the directory
pub fn ensure_directory<P: AsRef<Path>>(directory: P) -> Result<PathBuf, VergeError> {
    let directory = directory.as_ref();

    if !directory.is_dir() {
        std::fs::create_dir_all(directory)
            .map_err(|err| VergeError::DirError(err.to_string()))?;
    }

    Ok(directory.to_path_buf())
}

/// Collect file paths from a directory with an optional substring filter
///
/// # Arguments
///
/// * `directory` - Path to directory containing files
/// * `valid_ext` - Only include files with one of these extensions
/// * `substring` - Only include files containing this substring
///
/// # Examples
///
/// ```no_run
/// use verge_core::ut::path::collect_file_paths;
/// use verge_core::constant::SUPPORTED_IMAGE_FORMATS;
/// let files = collect_file_paths("directory/", SUPPORTED_IMAGE_FORMATS.as_slice(), None);
/// ```
pub fn collect_file_paths<P>(
    directory: P,
    valid_ext: &[&str],
    substring: Option<String>,
) -> Result<Vec<PathBuf>, VergeError>
where
    P: AsRef<Path> + ToString,
{
    let message = directory.to_string();
    let substring = substring.unwrap_or_default();

    let files: Vec<PathBuf> = std::fs::read_dir(directory)
        .map_err(|_| VergeError::DirError(message))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| valid_ext.contains(&ext))
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.contains(&substring))
        })
        .collect();

    Ok(files)
}

/// Collect file pairs that share a matching stem
///
/// # Arguments
///
/// * `files_a` - List of file paths
/// * `files_b` - List of file paths
/// * `substring_a` - Optionally remove a substring from the first set of stems
/// * `substring_b` - Optionally remove a substring from the second set of stems
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use verge_core::ut::path::collect_file_pairs;
///
/// let files_a: [PathBuf; 2] = [
///     PathBuf::from("annotations/frame_1.xml"),
///     PathBuf::from("annotations/frame_2.xml"),
/// ];
///
/// let files_b: [PathBuf; 2] = [
///     PathBuf::from("images/frame_1.jpg"),
///     PathBuf::from("images/frame_3.jpg"),
/// ];
///
/// let pairs = collect_file_pairs(&files_a, &files_b, None, None);
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].0, "frame_1");
/// ```
pub fn collect_file_pairs(
    files_a: &[PathBuf],
    files_b: &[PathBuf],
    substring_a: Option<String>,
    substring_b: Option<String>,
) -> Vec<(String, PathBuf, PathBuf)> {
    let substring_a = substring_a.unwrap_or_default();
    let substring_b = substring_b.unwrap_or_default();

    let file_map: HashMap<String, &PathBuf> = files_a
        .iter()
        .filter_map(|file| {
            file.file_stem().map(|stem| {
                let name = stem.to_string_lossy().replace(&substring_a, "");
                (name, file)
            })
        })
        .collect();

    files_b
        .par_iter()
        .filter_map(|file_b| {
            file_b.file_stem().and_then(|stem| {
                let name = stem.to_string_lossy().replace(&substring_b, "");
                file_map
                    .get(&name)
                    .map(|file_a| (name, (*file_a).clone(), file_b.clone()))
            })
        })
        .collect()
}

/// Clean a filename stem back to its canonical key
///
/// Applies a small ordered list of (suffix, replacement) rules once, so mask
/// visualization files like `frame_1_colored` resolve to the same key as the
/// source image `frame_1`.
///
/// # Examples
///
/// ```
/// use verge_core::ut::path::canonical_stem;
///
/// assert_eq!(canonical_stem("frame_1"), "frame_1");
/// assert_eq!(canonical_stem("frame_1_colored"), "frame_1");
/// assert_eq!(canonical_stem("frame_1_visual"), "frame_1");
/// ```
pub fn canonical_stem(stem: &str) -> String {
    for (suffix, replacement) in MASK_SUFFIX_RULES {
        if let Some(base) = stem.strip_suffix(suffix) {
            return format!("{}{}", base, replacement);
        }
    }

    stem.to_string()
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_canonical_stem_suffix_variants() {
        assert_eq!(canonical_stem("train_12"), "train_12");
        assert_eq!(canonical_stem("train_12_colored"), "train_12");
        assert_eq!(canonical_stem("train_12_visual"), "train_12");
        assert_eq!(canonical_stem("_colored"), "");
    }

    #[test]
    fn test_canonical_stem_applies_one_rule() {
        // Rules apply once, never repeatedly
        assert_eq!(canonical_stem("a_colored_colored"), "a_colored");
        assert_eq!(canonical_stem("a_visual_colored"), "a_visual");
    }

    #[test]
    fn test_collect_file_paths() {
        const TEST_DIR: &str = "TEST_COLLECT_FILE_PATHS";

        std::fs::create_dir(TEST_DIR).unwrap();
        std::fs::write(format!("{}/a.xml", TEST_DIR), "<annotation/>").unwrap();
        std::fs::write(format!("{}/b.xml", TEST_DIR), "<annotation/>").unwrap();
        std::fs::write(format!("{}/c.txt", TEST_DIR), "skip").unwrap();

        let files = collect_file_paths(TEST_DIR, &["xml"], None).unwrap();
        assert_eq!(files.len(), 2);

        let files = collect_file_paths(TEST_DIR, &["xml"], Some("a".to_string())).unwrap();
        assert_eq!(files.len(), 1);

        std::fs::remove_dir_all(TEST_DIR).unwrap();
    }

    #[test]
    fn test_collect_file_paths_missing_directory() {
        assert!(collect_file_paths("does_not_exist/", &["xml"], None).is_err());
    }

    #[test]
    fn test_ensure_directory() {
        const TEST_DIR: &str = "TEST_ENSURE_DIRECTORY/nested";

        let first = ensure_directory(TEST_DIR).unwrap();
        let second = ensure_directory(TEST_DIR).unwrap();

        assert!(first.is_dir());
        assert_eq!(first, second);

        std::fs::remove_dir_all("TEST_ENSURE_DIRECTORY").unwrap();
    }
}
