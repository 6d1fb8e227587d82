//! Image container classification from leading bytes.

/// The 8-byte PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// GIF header prefixes (version 87a and 89a).
const GIF_SIGNATURES: [&[u8; 6]; 2] = [b"GIF87a", b"GIF89a"];

/// Image container format recognized by signature classification.
///
/// Only PNG and GIF are recognized; everything else, including buffers too
/// short to carry a signature, classifies as [`ImageFormat::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageFormat {
    /// PNG container (full 8-byte signature)
    #[display("png")]
    Png,
    /// GIF container (GIF87a or GIF89a header)
    #[display("gif")]
    Gif,
    /// Unrecognized content
    #[display("unknown")]
    Unknown,
}

impl ImageFormat {
    /// Classify a byte buffer by its leading bytes.
    ///
    /// Total over all inputs and performs no I/O. The full 8-byte PNG
    /// signature is required; trailing content beyond the signature is
    /// irrelevant.
    ///
    /// # Examples
    ///
    /// ```
    /// use skinss_core::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::sniff(b"GIF89a...."), ImageFormat::Gif);
    /// assert_eq!(ImageFormat::sniff(b""), ImageFormat::Unknown);
    /// ```
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.len() >= PNG_SIGNATURE.len() && bytes[..PNG_SIGNATURE.len()] == PNG_SIGNATURE {
            return ImageFormat::Png;
        }
        if bytes.len() >= 6 && GIF_SIGNATURES.iter().any(|sig| &bytes[..6] == *sig) {
            return ImageFormat::Gif;
        }
        ImageFormat::Unknown
    }

    /// MIME type for recognized formats, `None` for unknown content.
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            ImageFormat::Png => Some("image/png"),
            ImageFormat::Gif => Some("image/gif"),
            ImageFormat::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn png_signature_classifies_regardless_of_trailing_content() {
        let mut buf = PNG_HEADER.to_vec();
        assert_eq!(ImageFormat::sniff(&buf), ImageFormat::Png);

        buf.extend_from_slice(b"trailing garbage of any shape");
        assert_eq!(ImageFormat::sniff(&buf), ImageFormat::Png);
    }

    #[test]
    fn truncated_png_signature_is_unknown() {
        // A 4-byte prefix alone must not classify as PNG.
        assert_eq!(ImageFormat::sniff(&PNG_HEADER[..4]), ImageFormat::Unknown);
        assert_eq!(ImageFormat::sniff(&PNG_HEADER[..7]), ImageFormat::Unknown);
    }

    #[test]
    fn gif_variants_classify() {
        assert_eq!(ImageFormat::sniff(b"GIF87a"), ImageFormat::Gif);
        assert_eq!(ImageFormat::sniff(b"GIF89a and pixels"), ImageFormat::Gif);
    }

    #[test]
    fn unknown_gif_version_is_unknown() {
        assert_eq!(ImageFormat::sniff(b"GIF88a"), ImageFormat::Unknown);
        assert_eq!(ImageFormat::sniff(b"GIF89"), ImageFormat::Unknown);
    }

    #[test]
    fn empty_and_short_buffers_are_unknown() {
        assert_eq!(ImageFormat::sniff(b""), ImageFormat::Unknown);
        assert_eq!(ImageFormat::sniff(&[0x89]), ImageFormat::Unknown);
    }

    #[test]
    fn jpeg_signature_is_unknown() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(ImageFormat::sniff(&jpeg), ImageFormat::Unknown);
    }

    #[test]
    fn mime_types() {
        assert_eq!(ImageFormat::Png.mime_type(), Some("image/png"));
        assert_eq!(ImageFormat::Gif.mime_type(), Some("image/gif"));
        assert_eq!(ImageFormat::Unknown.mime_type(), None);
    }
}
