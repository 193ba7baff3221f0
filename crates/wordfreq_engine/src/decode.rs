use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
    /// Some byte sequences were malformed and replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode raw file bytes into a string using: BOM -> strict UTF-8 -> chardetng fallback.
///
/// Decoding never fails; malformed sequences become U+FFFD, which
/// normalization strips like any other non-letter.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    // 1) BOM aware decode; the BOM itself is stripped by encoding_rs
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(&bytes[bom_len..], encoding);
    }

    // 2) Plain UTF-8, which also covers ASCII and empty files
    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_string(),
            encoding_label: UTF_8.name().to_string(),
            had_errors: false,
        };
    }

    // 3) Legacy single/multi-byte encodings
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, false);
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedText {
    let (text, had_errors) = enc.decode_without_bom_handling(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
        had_errors,
    }
}
