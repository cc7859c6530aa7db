//! Configuration loaded from `.journal.toml`.

pub mod settings;

pub use settings::Settings;
