//! Concrete repository implementations.

pub mod inmemory;

pub use inmemory::{InMemoryMembershipIndex, InMemoryRoomRepository};
