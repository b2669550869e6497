pub mod commands;
pub mod console;
pub mod state;

pub use console::Console;
pub use state::ShellState;
