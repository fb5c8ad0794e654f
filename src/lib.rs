//! # images-upload-cli
//!
//! Helpers for pushing images to hosting services: sniff what an image is,
//! describe its size for humans, turn it into a captioned JPEG thumbnail, read
//! required settings from the environment and pop a desktop notification
//! when done.
//!
//! ```text
//! bytes ──► identify ──► decode ──► fit into box ──► white canvas + 16px strip
//!                                                   │
//!                         caption "600x600 (PNG) [2.9 KiB]"
//!                                                   ▼
//!                               progressive JPEG (quality 95)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`env`] | Required values from the environment, as `Result`s |
//! | [`size`] | `human_size`: byte counts with IEC prefixes |
//! | [`imaging`] | Format sniffing and the captioned thumbnail transform |
//! | [`font`] | Finding and loading the caption font |
//! | [`notify`] | Fire-and-forget desktop notifications |
//! | [`config`] | Optional `config.toml` with stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Pure transforms, injected side effects
//!
//! [`imaging::make_thumbnail`] is a function of `(bytes, box, caption renderer)`
//! and nothing else. Which font file to load is decided by a
//! [`font::FontResolver`]; whether and how to notify is a
//! [`notify::Notifier`]. Tests swap both for recording fakes.
//!
//! ## Two error kinds
//!
//! Everything that can go wrong is either a [`config::ConfigError`] (a
//! setting or font that cannot be found or used) or an
//! [`imaging::ImagingError`] (bytes that are not a usable image). Nothing is
//! retried.

pub mod config;
pub mod env;
pub mod font;
pub mod imaging;
pub mod notify;
pub mod output;
pub mod size;

pub use env::get_env_val;
pub use imaging::{get_img_ext, make_thumbnail};
pub use size::human_size;

#[cfg(test)]
pub(crate) mod test_helpers;
