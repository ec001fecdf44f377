#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
pub mod text;

// -----------------------------------------------------------------------------
// Top-level exports

pub use text::{contains_ignore_case, eq_ignore_case};
