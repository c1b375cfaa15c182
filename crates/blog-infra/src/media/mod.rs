//! Media storage implementations.

mod cloudinary;

pub use cloudinary::{CloudinaryStorage, MediaConfig, UnconfiguredStorage};
