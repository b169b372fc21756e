pub mod ids;
pub mod intent;
pub mod state_ops;
