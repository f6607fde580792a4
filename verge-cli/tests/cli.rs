// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

use verge_core::im::{LabelMask, open_rgb};

fn test_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("verge_cli_{}_{}", name, std::process::id()));

    if root.exists() {
        std::fs::remove_dir_all(&root).unwrap();
    }

    std::fs::create_dir_all(&root).unwrap();
    root
}

const TEST_XML: &str = r#"
<annotation>
  <object>
    <name>road</name>
    <polygon>
      <x1>0</x1><y1>0</y1>
      <x2>5</x2><y2>0</y2>
      <x3>5</x3><y3>9</y3>
      <x4>0</x4><y4>9</y4>
    </polygon>
  </object>
  <object>
    <name>sky</name>
    <polygon>
      <x1>6</x1><y1>0</y1>
      <x2>11</x2><y2>0</y2>
      <x3>11</x3><y3>9</y3>
    </polygon>
  </object>
</annotation>"#;

#[test]
fn test_masks_end_to_end() {
    let root = test_root("masks");

    let images = root.join("images");
    let annotations = root.join("annotations");
    let output = root.join("output");

    std::fs::create_dir(&images).unwrap();
    std::fs::create_dir(&annotations).unwrap();

    // A blank 12x10 grayscale source image is enough for the pipeline
    LabelMask::from_raw(12, 10, vec![0u8; 120])
        .unwrap()
        .save(images.join("frame_1.png"))
        .unwrap();

    std::fs::write(annotations.join("frame_1.xml"), TEST_XML).unwrap();

    Command::cargo_bin("verge")
        .unwrap()
        .args([
            "masks",
            "-i",
            images.to_str().unwrap(),
            "-a",
            annotations.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Class 'sky' not found in class map"));

    let mask = LabelMask::open(output.join("masks").join("frame_1.png")).unwrap();

    assert_eq!(mask.width(), 12);
    assert_eq!(mask.height(), 10);
    assert_eq!(mask.get(0, 0), 1);
    assert_eq!(mask.get(5, 9), 1);

    // The unmapped sky class contributed zero pixels
    assert_eq!(mask.get(11, 0), 0);
    assert_eq!(mask.get(8, 2), 0);

    let colorized = open_rgb(output.join("masks_colored").join("frame_1_colored.png")).unwrap();

    assert_eq!(colorized.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(colorized.get_pixel(11, 0).0, [0, 0, 0]);

    // Default alpha of 0.5 over a black source halves the class color
    let overlay = open_rgb(output.join("masks_overlay").join("frame_1_visual.png")).unwrap();

    assert_eq!(overlay.get_pixel(0, 0).0, [128, 0, 0]);
    assert_eq!(overlay.get_pixel(11, 0).0, [0, 0, 0]);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_masks_missing_arguments() {
    Command::cargo_bin("verge")
        .unwrap()
        .arg("masks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_masks_missing_image_directory() {
    let root = test_root("masks_missing");

    let annotations = root.join("annotations");
    std::fs::create_dir(&annotations).unwrap();
    std::fs::write(annotations.join("frame_1.xml"), TEST_XML).unwrap();

    Command::cargo_bin("verge")
        .unwrap()
        .args([
            "masks",
            "-i",
            root.join("does_not_exist").to_str().unwrap(),
            "-a",
            annotations.to_str().unwrap(),
            "-o",
            root.join("output").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DirError"));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_rename_end_to_end() {
    let root = test_root("rename");

    let images = root.join("train").join("images");
    let annotations = root.join("train").join("annotations");
    let colored = root.join("train").join("masks_colored");

    std::fs::create_dir_all(&images).unwrap();
    std::fs::create_dir_all(&annotations).unwrap();
    std::fs::create_dir_all(&colored).unwrap();

    std::fs::write(images.join("b.png"), "x").unwrap();
    std::fs::write(images.join("a.png"), "x").unwrap();
    std::fs::write(annotations.join("a.xml"), "x").unwrap();
    std::fs::write(annotations.join("b.xml"), "x").unwrap();
    std::fs::write(colored.join("a_colored.png"), "x").unwrap();

    Command::cargo_bin("verge")
        .unwrap()
        .args([
            "rename",
            "-r",
            root.to_str().unwrap(),
            "-s",
            "train",
        ])
        .assert()
        .success();

    // Lexicographic order of the source folder drives the numbering
    assert!(images.join("train_1.png").is_file());
    assert!(images.join("train_2.png").is_file());
    assert!(annotations.join("train_1.xml").is_file());
    assert!(annotations.join("train_2.xml").is_file());

    // Visualization suffixes are stripped before the key lookup
    assert!(colored.join("train_1.png").is_file());
    assert!(!colored.join("a_colored.png").exists());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_rename_missing_root() {
    Command::cargo_bin("verge")
        .unwrap()
        .args(["rename", "-r", "does_not_exist_root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
