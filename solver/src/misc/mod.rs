/// Log targets
pub mod log;
