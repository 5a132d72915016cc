use std::fmt;

use crate::ConversionError;
use crate::codec::{Codec, CodecDetector};
use crate::media::{MediaFile, OutputHandle};
use crate::processing::{AudioAdjuster, BitrateProcessor};

/// One diagnostic event in the conversion sequence.
///
/// A successful conversion emits exactly six stages, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStage {
    Started { file: String },
    CodecDetected(Codec),
    BitrateRead(Codec),
    BitrateConverted(Codec),
    AudioFixed,
    Completed,
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionStage::Started { file } => write!(f, "conversion started: {file}"),
            ConversionStage::CodecDetected(codec) => write!(f, "detected {codec} source codec"),
            ConversionStage::BitrateRead(codec) => write!(f, "reading bitrate with {codec} codec"),
            ConversionStage::BitrateConverted(codec) => write!(f, "converting bitrate to {codec}"),
            ConversionStage::AudioFixed => write!(f, "fixing audio track"),
            ConversionStage::Completed => write!(f, "conversion completed"),
        }
    }
}

/// Single entry point over the conversion subsystem.
///
/// Owns the detector, bitrate processor, and audio adjuster so callers
/// never touch the individual components. Each call runs the full sequence
/// start to finish; no state survives between calls.
#[derive(Debug, Default)]
pub struct ConversionFacade {
    detector: CodecDetector,
    bitrate: BitrateProcessor,
    audio: AudioAdjuster,
}

impl ConversionFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a video, emitting each stage through the `log` crate.
    pub fn convert_video(
        &self,
        file_name: &str,
        target_format: &str,
    ) -> Result<OutputHandle, ConversionError> {
        self.convert_video_with_progress(file_name, target_format, |stage| {
            log::info!("{stage}");
        })
    }

    /// Convert a video, delivering each [`ConversionStage`] to `progress`.
    ///
    /// The sequence is fixed: started, codec detection, bitrate read,
    /// bitrate convert, audio fix, completed. There is no branching beyond
    /// codec selection.
    pub fn convert_video_with_progress<F>(
        &self,
        file_name: &str,
        target_format: &str,
        mut progress: F,
    ) -> Result<OutputHandle, ConversionError>
    where
        F: FnMut(ConversionStage),
    {
        progress(ConversionStage::Started {
            file: file_name.to_string(),
        });

        let file = MediaFile::new(file_name)?;
        let source_codec = self.detector.detect(&file, &mut progress);
        let destination_codec = Codec::for_target(target_format);

        let buffer = self.bitrate.read(file, source_codec, &mut progress);
        let intermediate = self
            .bitrate
            .convert(buffer, destination_codec, &mut progress);
        let output = self.audio.fix(intermediate, &mut progress);

        progress(ConversionStage::Completed);
        Ok(output)
    }
}
