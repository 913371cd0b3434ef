//! Pipeline stages in data-flow order: `scan` → `guard` → `resize` →
//! `composite`, tied together by `pipeline`.
pub mod composite;
pub mod guard;
pub mod pipeline;
pub mod resize;
pub mod scan;
