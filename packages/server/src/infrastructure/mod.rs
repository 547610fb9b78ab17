//! Infrastructure layer: concrete implementations of the domain
//! interfaces plus the DTOs spoken at the edges.

pub mod dto;
pub mod message_pusher;
pub mod repository;
