//! Export backends for rendered drill scenes.

pub mod svg;
