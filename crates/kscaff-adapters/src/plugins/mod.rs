//! Post-processing plugins for rendered files.

mod import_rewrite;
mod normalize;

pub use import_rewrite::ImportRewrite;
pub use normalize::Normalize;
