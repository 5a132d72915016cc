//! Recode Core - A video conversion library behind a single facade
//!
//! This library models a small conversion subsystem and the facade that
//! drives it:
//! - Media file descriptors with extension-derived codec types
//! - Source codec detection (MPEG-4 or Ogg)
//! - Bitrate read and convert passes
//! - Audio fixing that produces the final output handle
//! - A conversion facade sequencing all of the above behind one entry point
//!
//! The subsystem operations are structural stubs: each reports its stage
//! through the progress sink and passes its input through unchanged. The
//! interesting part is the orchestration, not the processing.

pub mod codec;
pub mod facade;
pub mod media;
pub mod processing;

// Re-export commonly used types at the crate root
pub use codec::{Codec, CodecDetector};
pub use facade::{ConversionFacade, ConversionStage};
pub use media::{MediaFile, OutputHandle};
pub use processing::{AudioAdjuster, BitrateProcessor};

use thiserror::Error;

/// Errors surfaced by the conversion subsystem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The file name carries no '.' separator (or nothing after it), so no
    /// codec type can be derived.
    #[error("file name {name:?} has no extension to derive a codec type from")]
    MissingExtension { name: String },
}
