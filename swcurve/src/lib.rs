#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "std")]
extern crate std;

pub mod field;

mod error;
mod mul;
mod params;
mod point;

pub use crate::{
    error::{Error, Result},
    mul::{DoubleAndAdd, MontgomeryLadder, ScalarMul},
    params::CurveParams,
    point::Point,
};
pub use num_bigint::{self, BigInt, BigUint};
