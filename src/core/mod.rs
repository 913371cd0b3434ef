//! Core processing building blocks: the immutable `params` and the pipeline
//! stages under `processing`. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
