// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::fmt;

#[derive(Debug, Clone)]
pub enum VergeError {
    BufferSizeError,
    MaskError(&'static str),
    ImageReadError,
    ImageWriteError,
    ImageExtensionError,
    AnnotationReadError(String),
    AnnotationParseError(String),
    ConfigReadError(String),
    ConfigParseError(String),
    ConfigError(String),
    NoFileError(String),
    DirError(String),
    OtherError(String),
}

impl fmt::Display for VergeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VergeError::BufferSizeError => {
                write!(
                    f,
                    "[verge::BufferSizeError] The buffer does not match provided size."
                )
            }
            VergeError::MaskError(message) => {
                write!(f, "[verge::MaskError] Failed to create mask. {}", message)
            }
            VergeError::ImageReadError => {
                write!(f, "[verge::ImageReadError] Failed to read image.")
            }
            VergeError::ImageWriteError => {
                write!(f, "[verge::ImageWriteError] Failed to write image.")
            }
            VergeError::ImageExtensionError => {
                write!(
                    f,
                    "[verge::ImageExtensionError] Could not detect a valid image extension for input."
                )
            }
            VergeError::AnnotationReadError(message) => {
                write!(
                    f,
                    "[verge::AnnotationReadError] Annotation could not be read. {}.",
                    message
                )
            }
            VergeError::AnnotationParseError(message) => {
                write!(
                    f,
                    "[verge::AnnotationParseError] Annotation could not be parsed. {}.",
                    message
                )
            }
            VergeError::ConfigReadError(message) => {
                write!(
                    f,
                    "[verge::ConfigReadError] Config could not be read. {}.",
                    message
                )
            }
            VergeError::ConfigParseError(message) => {
                write!(
                    f,
                    "[verge::ConfigParseError] Config could not be parsed. {}.",
                    message
                )
            }
            VergeError::ConfigError(message) => {
                write!(f, "[verge::ConfigError] Invalid config. {}.", message)
            }
            VergeError::NoFileError(message) => {
                write!(
                    f,
                    "[verge::NoFileError] File could not be found. {}.",
                    message
                )
            }
            VergeError::DirError(message) => {
                write!(
                    f,
                    "[verge::DirError] Directory could not be read. {}.",
                    message
                )
            }
            VergeError::OtherError(message) => {
                write!(f, "[verge::OtherError] Error: {}.", message)
            }
        }
    }
}

impl std::error::Error for VergeError {}
