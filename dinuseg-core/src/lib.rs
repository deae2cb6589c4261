//! Core library for dinuseg: shared models and IO utilities used by the
//! segmentation crates.

pub mod errors;
pub mod models;
pub mod utils;
