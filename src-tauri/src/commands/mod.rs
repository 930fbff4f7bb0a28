// Portfolio Commands
// Tauri command handlers for frontend communication

mod projects;
mod settings;
mod system;

pub use projects::*;
pub use settings::*;
pub use system::*;
