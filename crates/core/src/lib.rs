//! # Groundbot Core
//!
//! Domain types, traits, and error definitions for the Groundbot
//! grounded-answering runtime. No framework dependencies live here;
//! every other crate depends inward on this one.
//!
//! Each external collaborator (completion model, embedder, vector
//! store, text extractor) is a trait in [`gateway`], implemented
//! elsewhere and injected at construction. That keeps the runtime
//! swappable by configuration and testable with scripted doubles.

pub mod document;
pub mod error;
pub mod gateway;
pub mod tool;
pub use document::{Chunk, DocumentId, IngestReceipt, ScoredChunk, TenantId};
pub use error::{Error, GatewayError, Result, ToolError};
pub use gateway::{
    CompletionGateway, EmbeddingGateway, TextExtractor, VectorRecord, VectorStoreGateway,
};
pub use tool::{Tool, ToolContext, ToolRegistry, ToolSpec};
