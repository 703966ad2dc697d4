//! somgeo-cli
//! ==========
//!
//! Command-line interface for the `somgeo-core` Somalia geography dataset.
//!
//! The binary (`somgeo-cli`) is the deliverable; this library target only
//! exists so docs.rs renders an overview page.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! somgeo-cli stats
//! somgeo-cli search xamar
//! somgeo-cli districts --region Hiiraan
//! somgeo-cli airports --type international --json
//! somgeo-cli generate 2.0469 45.3182
//! somgeo-cli resolve SOM-BNR:6HJ728W9+Q7
//! ```
//!
//! `--input` (or `SOMGEO_DATA`) points at another dataset; `--region-table`
//! swaps the bounding boxes used to infer region prefixes.
#![cfg_attr(docsrs, feature(doc_cfg))]
