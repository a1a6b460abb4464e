//! # radixfft - radix-2/radix-4 FFT kernel for Rust
//!
//! An in-place, table-driven Fast Fourier Transform kernel built around
//! precomputed twiddle-factor and bit/digit-reversal tables. Designed for
//! the build-once / transform-many workflow: a plan validates its length
//! and builds its tables at construction, then any number of transforms
//! reuse them.
//!
//! ## Features
//!
//! - **Radix-2 and radix-4** iterative decimation-in-frequency engines
//! - **Forward and inverse** complex transforms, unnormalized (scaling is
//!   the caller's choice)
//! - **Real-input paths** exploiting conjugate symmetry, including the
//!   packed two-real-signals-per-complex-transform trick
//! - **Split and interleaved** complex layouts with identical results
//! - **`no_std`** with `alloc`; trigonometry via `libm`
//! - **Table cache**: [`FftPlanner`] shares `Arc`-backed tables between
//!   plans of the same length
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library integration
//! - `verbose-logging`: table-construction diagnostics through `log`
//!
//! ## Example
//!
//! ```
//! use radixfft::{FftImpl, FftPlan, scale};
//!
//! let plan = FftPlan::<f64>::new(8).unwrap();
//! let mut re = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let mut im = [0.0; 8];
//! plan.fft_split(&mut re, &mut im).unwrap();
//! // A unit impulse transforms to a flat spectrum.
//! assert!(re.iter().all(|&x| (x - 1.0).abs() < 1e-12));
//!
//! plan.ifft_split(&mut re, &mut im).unwrap();
//! scale(&mut re, &mut im, 1.0 / 8.0);
//! assert!((re[0] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
extern crate alloc;

/// Radix-2 butterfly engine, transform plans, and the table cache.
pub mod fft;

/// Radix-4 butterfly engine with digit-reversal reordering.
pub mod fft4;

/// Float abstraction and complex number representations.
pub mod num;

/// Bit- and digit-reversal permutations, as tables and in-place routines.
pub mod reorder;

/// Real-input helpers: half-spectrum extraction and the packed
/// two-real-for-one-complex transform.
pub mod rfft;

/// Twiddle-factor (sine/cosine coefficient) table construction.
pub mod twiddle;

pub use fft::{scale, FftDirection, FftDomain, FftError, FftImpl, FftPlan, FftPlanner};
pub use fft4::Fft4Plan;
pub use num::{Complex, Complex32, Complex64, Float, SplitComplex};
pub use reorder::ReversalTable;
pub use twiddle::{Radix, TwiddleTable};
