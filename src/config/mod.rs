//! Configuration module for the contact book
//!
//! Session settings are assembled from command-line flags and their
//! environment variable fallbacks in `main`.

pub mod settings;

pub use settings::Settings;
