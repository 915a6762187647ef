//! Knowledge pipeline for Groundbot: chunking, ingestion, retrieval,
//! and the scope gate.
//!
//! Documents flow in one direction: extract → [`chunker::chunk`] →
//! embed → upsert ([`IngestPipeline`]). Questions flow the other way:
//! embed → tenant-filtered query ([`RetrievalService`]) →
//! [`retrieval::is_within_scope`].

pub mod chunker;
pub mod ingest;
pub mod retrieval;

pub use chunker::chunk;
pub use ingest::IngestPipeline;
pub use retrieval::{RetrievalService, is_within_scope};
