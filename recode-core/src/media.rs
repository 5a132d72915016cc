use std::fmt;
use std::path::{Path, PathBuf};

use crate::ConversionError;

/// Immutable descriptor for a media file handed to the conversion pipeline.
///
/// The codec type is parsed once at construction from the portion of the
/// name after the first '.'; a name without one is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    name: String,
    codec_type: String,
}

impl MediaFile {
    pub fn new(name: impl Into<String>) -> Result<Self, ConversionError> {
        let name = name.into();
        let codec_type = match name.split_once('.') {
            Some((_, rest)) if !rest.is_empty() => rest.to_string(),
            _ => return Err(ConversionError::MissingExtension { name }),
        };
        Ok(Self { name, codec_type })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension-derived codec type, e.g. "ogg" for "video.ogg".
    pub fn codec_type(&self) -> &str {
        &self.codec_type
    }
}

/// Opaque handle to the result of a conversion.
///
/// No file is written to disk; the path stands in for where a real
/// transcoder would have placed its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputHandle {
    path: PathBuf,
}

impl OutputHandle {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for OutputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_type_is_taken_after_the_first_dot() {
        let file = MediaFile::new("youtubevideo.ogg").unwrap();
        assert_eq!(file.name(), "youtubevideo.ogg");
        assert_eq!(file.codec_type(), "ogg");

        let file = MediaFile::new("archive.tar.gz").unwrap();
        assert_eq!(file.codec_type(), "tar.gz");
    }

    #[test]
    fn name_without_extension_is_rejected() {
        assert_eq!(
            MediaFile::new("youtubevideo"),
            Err(ConversionError::MissingExtension {
                name: "youtubevideo".to_string()
            })
        );
    }

    #[test]
    fn trailing_dot_counts_as_missing_extension() {
        assert!(matches!(
            MediaFile::new("video."),
            Err(ConversionError::MissingExtension { .. })
        ));
    }

    #[test]
    fn output_handle_displays_its_path() {
        let handle = OutputHandle::new("tmp");
        assert_eq!(handle.to_string(), "tmp");
        assert_eq!(handle.path(), Path::new("tmp"));
    }
}
