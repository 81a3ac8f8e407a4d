//! opsdash-core: sample-data pipeline for the operations dashboard.
//!
//! Two components, composed linearly:
//!   - `dataset` builds the eleven named tables of one snapshot (monthly
//!     series resampled from daily draws, category fixtures, prediction
//!     grids) from a single captured date and an injected random source.
//!   - `export` converts that output to plain JSON and writes the public
//!     artifact plus its legacy mirror.

pub mod calendar;
pub mod dataset;
pub mod error;
pub mod export;
pub mod fixtures;
pub mod rng;
pub mod series;
pub mod types;
