//! Stateless computational core of a mass-spectrometry data viewer.
//!
//! Architecture:
//! ```text
//!   raw `|`/`;` peak text
//!           │
//!           ▼
//!   ┌───────────────┐
//!   │ peaks/spectra  │  parse text → Vec<RtPeak> / Vec<Peak>
//!   └───────────────┘
//!           │
//!           ▼
//!   ┌───────────────┐
//!   │ spectra/mirror │  similarity score, mirror-plot stick series
//!   └───────────────┘
//!
//!   loose EIC JSON payload ──▶ eic ──▶ validated params, Vec<EicTrace>
//! ```
//!
//! Every function is pure and synchronous: inputs are never mutated, there is
//! no shared state, and calls are safe from any number of threads.

pub mod eic;
pub mod mirror;
pub mod model;
pub mod peaks;
pub mod spectra;

pub use eic::{normalize_eic_traces, parse_mz_list, EicError};
pub use mirror::mirror_series;
pub use model::{EicTrace, MirrorSeries, Peak, RtPeak, StickSeries};
pub use peaks::{parse_rt_intensity_pairs, to_peak_csv};
pub use spectra::{cosine_similarity_tolerance, parse_spectrum};
