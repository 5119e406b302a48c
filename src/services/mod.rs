pub mod actions;
pub mod conversation;
pub mod identity;
pub mod intent;
pub mod phrasing;
pub mod responses;
pub mod rooms;
pub mod sessions;
