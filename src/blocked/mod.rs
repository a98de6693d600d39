//! Cache-blocked GEMM.
//!
//! Splits the multiplication into tiles so the slice of B being reused
//! stays resident in cache while every row of A sweeps over it. Only two of
//! the three loop dimensions are tiled; see [`gemm_tiled`] for the exact
//! loop nest.

pub mod gemm_tiled;
