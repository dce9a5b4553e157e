pub mod role;
pub mod stats;
