mod analyze;
mod cert_parser;
mod config;
mod fields;
mod format;
mod matcher;
mod profile_decoder;
mod search;

pub use analyze::{AnalysisOptions, AnalyzeProfilesUseCase};
pub use cert_parser::decode_certificate;
pub use config::Config;
pub use fields::{format_date, FieldOptions, FieldProvider};
pub use format::{FieldSource, FieldValue, FormatSpec, Segment, DEFAULT_FORMAT, MAX_FIELD_WIDTH};
pub use matcher::IdentityMatcher;
pub use profile_decoder::decode_profile;
pub use search::{collect_profiles, ContentFilter, SearchIndex};
