//! Plain-text extractor.
//!
//! Decodes raw document bytes as UTF-8, lossily: undecodable regions
//! degrade to replacement characters instead of failing the whole
//! ingestion. PDF and other binary formats are handled by an external
//! extraction collaborator implementing the same trait.

use groundbot_core::error::GatewayError;
use groundbot_core::gateway::TextExtractor;

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, GatewayError> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
