#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use amzsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

mod assemble;
pub use assemble::{assemble, assemble_at, RequestParams};

pub mod aws;

pub mod product_advertising {
    //! Amazon Product Advertising API support.
    pub use amzsign_product_advertising::*;
}
