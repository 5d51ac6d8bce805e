//! Fixed-point DCT/ADST block transforms for video coding.
//!
//! This crate implements the separable 2-D integer transforms used on
//! prediction residuals: a DCT or ADST kernel along each axis, at block
//! sizes 4, 8, 16 and 32, plus the flipped ADST variants. Every kernel is
//! a staged butterfly lattice driven by per-stage cosine precision and
//! range tables, so forward and inverse are bit-exact across platforms and
//! a forward/inverse round trip reconstructs the input to within one unit
//! per sample.
//!
//! # Features
//!
//! - `std` (default): Standard library support. The transforms themselves
//!   are `no_std` clean.
//! - `simd`: Vector pipelines for the hottest block shapes, with runtime
//!   dispatch and bit-exact scalar fallback.
//! - `multiverse`: Compile the scalar kernels for several x86-64 feature
//!   levels and select at runtime.
//! - `unchecked`: Allow unsafe code for performance experiments.
//!
//! # Example
//!
//! ```rust
//! use zentxfm::{fwd_txfm2d, inv_txfm2d_add, TxSize, TxType};
//!
//! let residual = [100i16; 16]; // flat 4x4 block
//! let mut coeffs = [0i32; 16];
//! fwd_txfm2d(&residual, 4, &mut coeffs, TxType::DctDct, TxSize::X4);
//!
//! let mut recon = [0i16; 16];
//! inv_txfm2d_add(&coeffs, &mut recon, 4, TxType::DctDct, TxSize::X4);
//! assert!(recon.iter().all(|&p| (p - 100).abs() <= 1));
//! ```
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]` to prevent direct unsafe usage
//! in source. However, when the `simd` feature is enabled, we rely on the
//! [`archmage`] crate for safe SIMD intrinsics. The `#[arcane]` proc macro
//! generates unsafe blocks internally (which bypass the `forbid` lint due
//! to proc-macro span handling). The soundness of our SIMD code depends on
//! archmage's token-based safety model being correct.
//!
//! Without the `simd` feature, this crate contains no unsafe code
//! whatsoever.
//!
//! [`archmage`]: https://docs.rs/archmage

#![cfg_attr(not(feature = "std"), no_std)]
// Forbid unsafe unless the "unchecked" feature enables it for performance
#![cfg_attr(not(feature = "unchecked"), forbid(unsafe_code))]
#![deny(missing_docs)]

pub mod butterfly;
pub mod cfg;
pub mod cospi;
pub mod error;
pub mod fwd1d;
pub mod inv1d;
pub mod txfm2d;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod txfm_simd;

pub use cfg::{fwd_txfm_cfg, inv_txfm_cfg, TxSize, TxType, Txfm2dCfg, Txfm2dFlipCfg, TxfmType};
pub use error::CfgError;
pub use txfm2d::{fwd_txfm2d, inv_txfm2d_add};
