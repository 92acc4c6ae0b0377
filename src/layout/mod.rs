// SPDX-FileCopyrightText: 2026 Statewalk Contributors
// SPDX-License-Identifier: MIT

//! Layout passes for diagrams.
//!
//! The parser applies the cascade pass so every emitted node carries a
//! deterministic position; a rendering collaborator may relayout freely.

pub mod cascade;

pub use cascade::{layout_cascade, CASCADE_ORIGIN_X, CASCADE_ROW_Y, CASCADE_STEP_X};
