pub mod cli;
pub mod forms;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
