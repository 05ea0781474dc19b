//! CLI command implementations.

mod audio;
mod config;
mod generate;
mod list;
mod serve;
mod show;

pub use audio::run_audio;
pub use config::run_config;
pub use generate::run_generate;
pub use list::run_list;
pub use serve::run_serve;
pub use show::run_show;
