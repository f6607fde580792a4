// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

pub mod masks;
pub mod rename;
