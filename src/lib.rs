#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use rm_reflect as reflect;
pub use rm_utils as utils;
