use std::fmt;

use crate::facade::ConversionStage;
use crate::media::MediaFile;

/// Encoding format tag. Carries no behavior beyond identifying the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Mpeg4,
    Ogg,
}

impl Codec {
    /// Select the destination codec for a requested target format.
    ///
    /// Anything other than "mp4" falls through to Ogg; an unrecognized
    /// format is worth a warning but not a failure.
    pub fn for_target(format: &str) -> Self {
        match format {
            "mp4" => Codec::Mpeg4,
            "ogg" => Codec::Ogg,
            other => {
                log::warn!("unrecognized target format {other:?}, using Ogg");
                Codec::Ogg
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Codec::Mpeg4 => "MPEG-4",
            Codec::Ogg => "Ogg",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Determines which codec a media file was encoded with.
///
/// Detection is a pure function of the file's codec type: "mp4" means
/// MPEG-4, everything else is classified as Ogg.
#[derive(Debug, Default)]
pub struct CodecDetector;

impl CodecDetector {
    pub fn detect(
        &self,
        file: &MediaFile,
        progress: &mut dyn FnMut(ConversionStage),
    ) -> Codec {
        let codec = if file.codec_type() == "mp4" {
            Codec::Mpeg4
        } else {
            Codec::Ogg
        };
        progress(ConversionStage::CodecDetected(codec));
        codec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(name: &str) -> Codec {
        let file = MediaFile::new(name).unwrap();
        CodecDetector::default().detect(&file, &mut |_| {})
    }

    #[test]
    fn mp4_extension_detects_mpeg4() {
        assert_eq!(detect("clip.mp4"), Codec::Mpeg4);
    }

    #[test]
    fn any_other_extension_detects_ogg() {
        assert_eq!(detect("clip.ogg"), Codec::Ogg);
        assert_eq!(detect("clip.avi"), Codec::Ogg);
        assert_eq!(detect("clip.mkv"), Codec::Ogg);
    }

    #[test]
    fn detection_reports_the_branch_taken() {
        let file = MediaFile::new("clip.mp4").unwrap();
        let mut stages = Vec::new();
        CodecDetector::default().detect(&file, &mut |stage| stages.push(stage));
        assert_eq!(stages, vec![ConversionStage::CodecDetected(Codec::Mpeg4)]);
    }

    #[test]
    fn target_format_selection_defaults_to_ogg() {
        assert_eq!(Codec::for_target("mp4"), Codec::Mpeg4);
        assert_eq!(Codec::for_target("ogg"), Codec::Ogg);
        assert_eq!(Codec::for_target("webm"), Codec::Ogg);
    }

    #[test]
    fn codec_names() {
        assert_eq!(Codec::Mpeg4.to_string(), "MPEG-4");
        assert_eq!(Codec::Ogg.to_string(), "Ogg");
    }
}
