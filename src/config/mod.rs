pub mod settings;

pub use settings::{AppSettings, DataSettings, DisplaySettings, Settings};
