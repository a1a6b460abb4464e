//! Twiddle-factor table construction.
//!
//! A table for length `n` is a single sine table `table[i] = sin(2πi/n)`
//! with cosines read through a quarter-period offset: `cos(k) =
//! table[k + n/4]`. Radix-2 butterflies address angles below `n/2`, so the
//! table stores `3n/4` entries; radix-4 butterflies look up three angles
//! per butterfly (up to three times the base angle), so their table stores
//! `5n/4` entries. Tables are pure functions of `(n, radix)` and are
//! reusable across any number of transforms of that length.

use alloc::vec::Vec;

use crate::fft::FftError;
use crate::num::Float;

/// Branching factor of the butterfly decomposition.
///
/// The radix-4 index arithmetic and coefficient layout are distinct enough
/// from radix-2 that the two are kept as separate code paths selected by
/// this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Two,
    Four,
}

impl Radix {
    /// Whether `n` is an exact power of this radix, at or above the
    /// smallest length the butterfly structure supports (4 for both,
    /// since the quarter-period cosine offset needs `n % 4 == 0`).
    pub fn valid_length(self, n: usize) -> bool {
        match self {
            Radix::Two => n >= 4 && n.is_power_of_two(),
            Radix::Four => n >= 4 && n.is_power_of_two() && n.trailing_zeros() % 2 == 0,
        }
    }

    /// `log_radix(n)`: the number of butterfly stages for length `n`.
    pub fn log_len(self, n: usize) -> usize {
        match self {
            Radix::Two => n.trailing_zeros() as usize,
            Radix::Four => (n.trailing_zeros() / 2) as usize,
        }
    }

    /// Number of sine entries stored for a transform of length `n`.
    pub fn table_len(self, n: usize) -> usize {
        match self {
            Radix::Two => (3 * n) / 4,
            Radix::Four => (5 * n) / 4,
        }
    }
}

/// Precomputed sine/cosine coefficients for one transform length.
#[derive(Clone, Debug, PartialEq)]
pub struct TwiddleTable<T: Float> {
    n: usize,
    radix: Radix,
    table: Vec<T>,
}

impl<T: Float> TwiddleTable<T> {
    /// Build the coefficient table for an `n`-point transform.
    ///
    /// Fails with [`FftError::InvalidLength`] when `n` is not an exact
    /// power of `radix` (or is below 4).
    pub fn new(n: usize, radix: Radix) -> Result<Self, FftError> {
        if !radix.valid_length(n) {
            return Err(FftError::InvalidLength);
        }
        #[cfg(feature = "verbose-logging")]
        log::debug!("building {radix:?} twiddle table for n={n}");
        let len = radix.table_len(n);
        let n_t = T::from_usize(n).ok_or(FftError::InvalidLength)?;
        let two_pi = T::from_f32(2.0) * T::pi();
        let mut table = Vec::with_capacity(len);
        for i in 0..len {
            let i_t = T::from_usize(i).ok_or(FftError::InvalidLength)?;
            table.push((two_pi * i_t / n_t).sin());
        }
        Ok(Self { n, radix, table })
    }

    /// Transform length this table was built for.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Number of stored sine entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// `sin(2πk/n)` by table lookup.
    #[inline(always)]
    pub fn sin(&self, k: usize) -> T {
        self.table[k]
    }

    /// `cos(2πk/n)` by quarter-period offset into the sine table.
    #[inline(always)]
    pub fn cos(&self, k: usize) -> T {
        self.table[k + (self.n >> 2)]
    }
}
