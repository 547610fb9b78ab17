//! Data Transfer Objects for the server's edges.
//!
//! WebSocket wire types live in `marubatsu_shared::protocol` (shared
//! with the client); this module holds the HTTP API DTOs and the
//! conversions from domain state to wire messages.

pub mod conversion;
pub mod http;
