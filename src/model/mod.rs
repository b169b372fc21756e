pub mod config;
pub mod group;
pub mod state;
pub mod task;

pub use config::*;
pub use group::*;
pub use state::*;
pub use task::*;
