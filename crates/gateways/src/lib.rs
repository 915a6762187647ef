//! Concrete collaborator implementations for Groundbot.
//!
//! Everything the core defines as a trait gets a working implementation
//! here:
//! - [`OpenAiGateway`] — completion + embeddings over any
//!   OpenAI-compatible `/v1` endpoint.
//! - [`InMemoryVectorStore`] — cosine-ranked, tenant-filtered index for
//!   tests and single-process deployments. Production vector databases
//!   live behind the same trait.
//! - [`HashEmbedder`] — deterministic offline embedder, no network.
//! - [`PlainTextExtractor`] — lossy UTF-8 byte decoding. PDF decoding
//!   is an external collaborator behind the same trait.

pub mod embed;
pub mod extract;
pub mod openai;
pub mod store;

pub use embed::HashEmbedder;
pub use extract::PlainTextExtractor;
pub use openai::OpenAiGateway;
pub use store::InMemoryVectorStore;
