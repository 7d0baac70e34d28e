//! Core module - The sort/aggregate engine
//!
//! This module provides:
//! - Element model (Element, ElementKind, Collection)
//! - Classification of raw lines into elements
//! - Natural and by-count reports
//! - Rendering functions for text and JSON output
//! - Input/output selection

pub mod classify;
pub mod io;
pub mod model;
pub mod render;
pub mod report;
