// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::path::{Path, PathBuf};

use clap::Args;
use colored::*;
use kdam::BarExt;

use verge_core::config::DatasetConfig;
use verge_core::constant;
use verge_core::cv;
use verge_core::error::VergeError;
use verge_core::im;
use verge_core::ut;

#[derive(Debug, Args)]
#[command(about = "Rasterize polygon annotations into class-index masks and visualizations.")]
pub struct MasksArgs {
    #[arg(short = 'i', long, help = "Image directory.", required = true)]
    pub images: Option<String>,

    #[arg(short = 'a', long, help = "Annotation (xml) directory.", required = true)]
    pub annotations: Option<String>,

    #[arg(short = 'o', long, help = "Output directory.", required = true)]
    pub output: Option<String>,

    #[arg(
        short = 'c',
        long,
        help = "Dataset config (json) with class map, drawing order, and colors."
    )]
    pub config: Option<String>,

    #[arg(long, help = "Blend weight for the overlay visualization.")]
    pub alpha: Option<f32>,

    #[arg(long, help = "Substring specifying images (e.g. _image).")]
    pub image_substring: Option<String>,

    #[arg(long, help = "Substring specifying annotations (e.g. _annotation).")]
    pub annotation_substring: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,
}

pub fn masks(args: &MasksArgs) {
    let mut config = if let Some(config_path) = args.config.to_owned() {
        DatasetConfig::open(&config_path).unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(1);
        })
    } else {
        DatasetConfig::default()
    };

    if let Some(alpha) = args.alpha {
        config.alpha = alpha;
        config.validate().unwrap_or_else(|err| {
            eprintln!("{}", err);
            std::process::exit(1);
        });
    }

    let image_path = args.images.to_owned().unwrap();
    let annotation_path = args.annotations.to_owned().unwrap();

    let image_files = ut::path::collect_file_paths(
        &image_path,
        constant::SUPPORTED_IMAGE_FORMATS.as_slice(),
        args.image_substring.to_owned(),
    )
    .unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    let annotation_files = ut::path::collect_file_paths(
        &annotation_path,
        constant::SUPPORTED_ANNOTATION_FORMATS.as_slice(),
        args.annotation_substring.to_owned(),
    )
    .unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if image_files.is_empty() {
        eprintln!(
            "[verge::masks] ERROR: No image files were detected. Please check your path and/or substring identifier."
        );
        std::process::exit(1);
    }

    if annotation_files.is_empty() {
        eprintln!(
            "[verge::masks] ERROR: No annotation files were detected. Please check your path and/or substring identifier."
        );
        std::process::exit(1);
    }

    let mut pairs = ut::path::collect_file_pairs(
        &image_files,
        &annotation_files,
        args.image_substring.to_owned(),
        args.annotation_substring.to_owned(),
    );

    pairs.sort_unstable();

    ut::track::progress_log(
        &format!(
            "Detected {} image and annotation pairs.",
            ut::track::thousands_format(pairs.len())
        ),
        args.verbose,
    );

    let output = PathBuf::from(args.output.to_owned().unwrap());

    let output = ut::path::ensure_directory(&output).unwrap_or_else(|_| {
        eprintln!("[verge::masks] ERROR: Could not create directory.");
        std::process::exit(1);
    });

    for subdirectory in ["masks", "masks_colored", "masks_overlay"] {
        ut::path::ensure_directory(output.join(subdirectory)).unwrap_or_else(|_| {
            eprintln!("[verge::masks] ERROR: Could not create directory.");
            std::process::exit(1);
        });
    }

    let mut pb = ut::track::progress_bar(pairs.len(), "Rasterizing", args.verbose);

    let mut n_masks = 0usize;
    let mut failure: Vec<String> = Vec::new();

    for (id, image, annotation) in &pairs {
        match generate(id, image, annotation, &config, &output) {
            Ok(unmapped) => {
                n_masks += 1;

                for class_name in unmapped {
                    eprintln!(
                        "[verge::masks] {}: Class '{}' not found in class map for {}.",
                        "WARNING".yellow(),
                        class_name,
                        id
                    );
                }
            }
            Err(err) => {
                failure.push(format!("{}\t{}", id, err));
            }
        }

        if args.verbose {
            pb.update(1).unwrap();
        }
    }

    if args.verbose {
        println!();
    }

    ut::track::progress_log(
        &format!(
            "Complete. {} masks written across {} pairs.",
            ut::track::thousands_format(n_masks),
            ut::track::thousands_format(pairs.len())
        ),
        args.verbose,
    );

    if !failure.is_empty() {
        std::fs::write(output.join("mask_errors.tsv"), failure.join("\n")).unwrap();
    }
}

/// Rasterize one image and annotation pair into the three mask outputs
fn generate(
    id: &str,
    image_path: &Path,
    annotation_path: &Path,
    config: &DatasetConfig,
    output: &Path,
) -> Result<Vec<String>, VergeError> {
    let image = im::open_rgb(image_path)?;
    let annotation = im::Annotation::open(annotation_path)?;

    let (mask, unmapped) = cv::rasterize(
        &annotation.objects_by_name(),
        &config.class_map,
        &config.drawing_order,
        image.width(),
        image.height(),
    )?;

    mask.save(
        output
            .join("masks")
            .join(format!("{}.{}", id, constant::MASK_EXTENSION)),
    )?;

    let colorized = cv::colorize(&mask, &config.class_colors);

    colorized
        .save(output.join("masks_colored").join(format!(
            "{}{}.{}",
            id,
            constant::COLORED_SUFFIX,
            constant::MASK_EXTENSION
        )))
        .map_err(|_| VergeError::ImageWriteError)?;

    let overlay = cv::blend(&image, &colorized, config.alpha);

    overlay
        .save(output.join("masks_overlay").join(format!(
            "{}{}.{}",
            id,
            constant::VISUAL_SUFFIX,
            constant::MASK_EXTENSION
        )))
        .map_err(|_| VergeError::ImageWriteError)?;

    Ok(unmapped)
}
