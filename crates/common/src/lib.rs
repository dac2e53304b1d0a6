//! Pieces shared by every crate in the workspace: logging bootstrap and the
//! small wire types that are not tied to the swift code domain.

pub mod types;
pub mod utils;
