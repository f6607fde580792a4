// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Args;
use colored::*;

use verge_core::error::VergeError;
use verge_core::ut;

#[derive(Debug, Args)]
#[command(about = "Sequentially rename files across the parallel folders of a dataset split.")]
pub struct RenameArgs {
    #[arg(short = 'r', long, help = "Dataset root directory.", required = true)]
    pub root: Option<String>,

    #[arg(
        short = 's',
        long,
        help = "Dataset splits to process.",
        value_delimiter = ',',
        default_value = "train,test"
    )]
    pub splits: Vec<String>,

    #[arg(
        long,
        help = "Folder used as the source of truth for the name mapping.",
        default_value = "images"
    )]
    pub source: Option<String>,

    #[arg(
        short = 'f',
        long,
        help = "Subfolders to rename.",
        value_delimiter = ',',
        default_value = "images,annotations,masks,masks_colored,masks_overlay"
    )]
    pub folders: Vec<String>,

    #[arg(short = 'n', long, help = "Print planned renames without renaming.")]
    pub dry_run: bool,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,
}

pub fn rename(args: &RenameArgs) {
    let root = PathBuf::from(args.root.to_owned().unwrap());
    let source = args.source.to_owned().unwrap_or("images".to_string());

    if !root.is_dir() {
        eprintln!("[verge::rename] ERROR: Dataset root is not a directory.");
        std::process::exit(1);
    }

    if !args.folders.contains(&source) {
        eprintln!(
            "[verge::rename] ERROR: The source folder '{}' must be included in the folders to rename.",
            source
        );
        std::process::exit(1);
    }

    for split in &args.splits {
        let source_dir = root.join(split).join(&source);

        let name_map = match build_name_map(&source_dir, split) {
            Ok(name_map) => name_map,
            Err(_) => {
                ut::track::progress_log(
                    &format!(
                        "Source directory '{}' not found. Skipping split '{}'.",
                        source_dir.display(),
                        split
                    ),
                    args.verbose,
                );
                continue;
            }
        };

        ut::track::progress_log(
            &format!(
                "Mapped {} file names for split '{}'.",
                ut::track::thousands_format(name_map.len()),
                split
            ),
            args.verbose,
        );

        for folder in &args.folders {
            let target_dir = root.join(split).join(folder);

            if !target_dir.is_dir() {
                ut::track::progress_log(
                    &format!("Subfolder '{}' not found. Skipping.", folder),
                    args.verbose,
                );
                continue;
            }

            let (renamed, collisions) =
                rename_folder(&target_dir, &name_map, args.dry_run).unwrap_or_else(|err| {
                    eprintln!("{}", err);
                    std::process::exit(1);
                });

            for collision in &collisions {
                eprintln!(
                    "[verge::rename] {}: Destination '{}' already exists. Skipping.",
                    "WARNING".yellow(),
                    collision
                );
            }

            ut::track::progress_log(
                &format!(
                    "Renamed {} files in '{}'.",
                    ut::track::thousands_format(renamed),
                    folder
                ),
                args.verbose,
            );
        }
    }
}

/// Map old filename stems to sequential `{split}_{n}` stems
///
/// The mapping is built from the lexicographically sorted filenames of the
/// source-of-truth folder so corresponding files across parallel folders
/// receive the same number.
fn build_name_map(source_dir: &Path, split: &str) -> Result<HashMap<String, String>, VergeError> {
    let mut filenames: Vec<String> = std::fs::read_dir(source_dir)
        .map_err(|_| VergeError::DirError(source_dir.display().to_string()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .collect();

    filenames.sort_unstable();

    Ok(filenames
        .iter()
        .enumerate()
        .filter_map(|(counter, filename)| {
            Path::new(filename)
                .file_stem()
                .map(|stem| (stem.to_string_lossy().into_owned(), format!("{}_{}", split, counter + 1)))
        })
        .collect())
}

/// Apply the name map to every file in a folder
///
/// Filename stems are cleaned with the known visualization suffix rules
/// before lookup, and the cleaned stem's new name is used as-is (suffixes
/// are dropped, exactly like the original outputs keep folders apart).
/// Renames whose destination already exists are skipped and reported.
fn rename_folder(
    target_dir: &Path,
    name_map: &HashMap<String, String>,
    dry_run: bool,
) -> Result<(usize, Vec<String>), VergeError> {
    let files: Vec<PathBuf> = std::fs::read_dir(target_dir)
        .map_err(|_| VergeError::DirError(target_dir.display().to_string()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    let mut renamed = 0usize;
    let mut collisions: Vec<String> = Vec::new();

    for file in files {
        let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let Some(new_base) = name_map.get(&ut::path::canonical_stem(stem)) else {
            continue;
        };

        let new_file = match file.extension().and_then(|s| s.to_str()) {
            Some(extension) => target_dir.join(format!("{}.{}", new_base, extension)),
            None => target_dir.join(new_base),
        };

        if new_file == file {
            continue;
        }

        if new_file.exists() {
            collisions.push(new_file.display().to_string());
            continue;
        }

        if dry_run {
            println!("{} -> {}", file.display(), new_file.display());
        } else {
            std::fs::rename(&file, &new_file)
                .map_err(|err| VergeError::OtherError(err.to_string()))?;
        }

        renamed += 1;
    }

    Ok((renamed, collisions))
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_build_name_map_sorted() {
        const TEST_DIR: &str = "TEST_BUILD_NAME_MAP";

        std::fs::create_dir(TEST_DIR).unwrap();
        std::fs::write(format!("{}/b.png", TEST_DIR), "x").unwrap();
        std::fs::write(format!("{}/a.png", TEST_DIR), "x").unwrap();

        let name_map = build_name_map(Path::new(TEST_DIR), "train").unwrap();

        assert_eq!(name_map.get("a"), Some(&"train_1".to_string()));
        assert_eq!(name_map.get("b"), Some(&"train_2".to_string()));

        std::fs::remove_dir_all(TEST_DIR).unwrap();
    }

    #[test]
    fn test_rename_folder_with_suffixes() {
        const TEST_DIR: &str = "TEST_RENAME_FOLDER";

        std::fs::create_dir(TEST_DIR).unwrap();
        std::fs::write(format!("{}/frame_colored.png", TEST_DIR), "x").unwrap();
        std::fs::write(format!("{}/other.png", TEST_DIR), "x").unwrap();

        let name_map = HashMap::from([("frame".to_string(), "train_1".to_string())]);

        let (renamed, collisions) =
            rename_folder(Path::new(TEST_DIR), &name_map, false).unwrap();

        assert_eq!(renamed, 1);
        assert!(collisions.is_empty());
        assert!(Path::new(TEST_DIR).join("train_1.png").is_file());
        assert!(Path::new(TEST_DIR).join("other.png").is_file());

        std::fs::remove_dir_all(TEST_DIR).unwrap();
    }

    #[test]
    fn test_rename_folder_collision_skipped() {
        const TEST_DIR: &str = "TEST_RENAME_COLLISION";

        std::fs::create_dir(TEST_DIR).unwrap();
        std::fs::write(format!("{}/frame.png", TEST_DIR), "old").unwrap();
        std::fs::write(format!("{}/train_1.png", TEST_DIR), "existing").unwrap();

        let name_map = HashMap::from([("frame".to_string(), "train_1".to_string())]);

        let (renamed, collisions) =
            rename_folder(Path::new(TEST_DIR), &name_map, false).unwrap();

        assert_eq!(renamed, 0);
        assert_eq!(collisions.len(), 1);
        assert_eq!(
            std::fs::read_to_string(format!("{}/train_1.png", TEST_DIR)).unwrap(),
            "existing"
        );

        std::fs::remove_dir_all(TEST_DIR).unwrap();
    }

    #[test]
    fn test_rename_folder_dry_run() {
        const TEST_DIR: &str = "TEST_RENAME_DRY_RUN";

        std::fs::create_dir(TEST_DIR).unwrap();
        std::fs::write(format!("{}/frame.png", TEST_DIR), "x").unwrap();

        let name_map = HashMap::from([("frame".to_string(), "train_1".to_string())]);

        let (renamed, _) = rename_folder(Path::new(TEST_DIR), &name_map, true).unwrap();

        assert_eq!(renamed, 1);
        assert!(Path::new(TEST_DIR).join("frame.png").is_file());
        assert!(!Path::new(TEST_DIR).join("train_1.png").exists());

        std::fs::remove_dir_all(TEST_DIR).unwrap();
    }
}
