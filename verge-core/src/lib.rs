// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

pub mod config;
pub mod constant;
pub mod cv;
pub mod error;
pub mod im;
pub mod ut;
