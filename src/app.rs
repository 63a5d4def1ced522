pub mod acquire;
pub mod export;
pub mod output;
pub mod settings;
pub mod watch;
