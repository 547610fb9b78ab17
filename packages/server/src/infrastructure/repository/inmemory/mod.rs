//! In-memory implementations backed by `HashMap`s. All state lives for
//! the process lifetime only.

mod membership;
mod room;

pub use membership::InMemoryMembershipIndex;
pub use room::InMemoryRoomRepository;
