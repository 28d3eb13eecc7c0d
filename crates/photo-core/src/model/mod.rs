//! Modelos neutrales (Artifact, Descriptor, Photo, nodos de transformación).

pub mod artifact;
pub mod descriptor;
pub mod transform;

pub use artifact::{Artifact, Photo};
pub use descriptor::{Descriptor, Rating};
pub use transform::{apply_chain, check_names, Transformed};
