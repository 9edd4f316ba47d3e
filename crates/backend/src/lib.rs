//! Search-backend integration for rankeval
//!
//! This crate owns everything between a query string and a canonical
//! scored-document list:
//!
//! - **Query formulation**: mode-specific YQL-style request construction
//! - **Client**: the HTTP transport and the [`SearchBackend`] trait seam
//! - **Normalization**: dedup and document-id canonicalization of raw hits

pub mod client;
pub mod normalize;
pub mod request;
pub mod response;

pub use client::{HttpBackend, SearchBackend};
pub use normalize::normalize;
pub use request::SearchRequest;
pub use response::{HitFields, RawHit, ResponseRoot, SearchResponse};
