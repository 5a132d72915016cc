use crate::codec::Codec;
use crate::facade::ConversionStage;
use crate::media::{MediaFile, OutputHandle};

/// Bitrate read and convert passes.
///
/// Both operations are structural stubs: they report their stage and hand
/// the file back unchanged.
#[derive(Debug, Default)]
pub struct BitrateProcessor;

impl BitrateProcessor {
    /// Read the source bitrate with the given codec.
    pub fn read(
        &self,
        file: MediaFile,
        codec: Codec,
        progress: &mut dyn FnMut(ConversionStage),
    ) -> MediaFile {
        progress(ConversionStage::BitrateRead(codec));
        file
    }

    /// Transcode the bitrate to the destination codec.
    pub fn convert(
        &self,
        file: MediaFile,
        codec: Codec,
        progress: &mut dyn FnMut(ConversionStage),
    ) -> MediaFile {
        progress(ConversionStage::BitrateConverted(codec));
        file
    }
}

/// Final audio pass producing the output handle.
#[derive(Debug, Default)]
pub struct AudioAdjuster;

impl AudioAdjuster {
    /// The handle always points at the fixed placeholder path "tmp"; the
    /// input file only marks its place in the sequence.
    pub fn fix(
        &self,
        _file: MediaFile,
        progress: &mut dyn FnMut(ConversionStage),
    ) -> OutputHandle {
        progress(ConversionStage::AudioFixed);
        OutputHandle::new("tmp")
    }
}
