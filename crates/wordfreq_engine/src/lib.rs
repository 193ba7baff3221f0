//! Wordfreq engine: document validation, decoding and word counting.
mod counter;
mod decode;
mod document;
mod frequency;
mod normalize;
mod persist;

pub use counter::{ProcessError, WordCounter, WordStatistics};
pub use decode::{decode_text, DecodedText};
pub use document::{has_accepted_extension, DocumentHandle, InvalidSource, ACCEPTED_EXTENSION};
pub use frequency::{count_text, CountSummary, FrequencyTable};
pub use normalize::{normalize_token, tokens};
pub use persist::{PersistError, ReportWriter};
