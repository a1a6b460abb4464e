//! Bit-reversal (radix-2) and digit-reversal (radix-4) reordering.
//!
//! The decimation-in-frequency butterflies leave their output scrambled;
//! these permutations restore natural order. Two equivalent modes are
//! provided: a precomputed index table
//! ([`ReversalTable`], the "fast" mode) and table-free in-place routines
//! ([`bit_reverse_in_place`], [`digit_reverse_in_place`], the "standard"
//! mode). Both produce identical orderings, and every reversal is an
//! involution: applying it twice restores the input.

use alloc::vec::Vec;

use crate::fft::FftError;
use crate::twiddle::Radix;

/// Reverse the low `log2(n)` bits of `i`.
#[inline]
fn bit_reverse(i: usize, log2n: u32) -> usize {
    i.reverse_bits() >> (usize::BITS - log2n)
}

/// Reverse the base-4 digits of `i` within `log4(n)` digits.
#[inline]
fn digit_reverse(mut i: usize, log4n: u32) -> usize {
    let mut r = 0;
    for _ in 0..log4n {
        r = (r << 2) | (i & 3);
        i >>= 2;
    }
    r
}

/// Precomputed index permutation for one transform length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReversalTable {
    n: usize,
    radix: Radix,
    index: Vec<usize>,
}

impl ReversalTable {
    /// Build the reversal permutation for an `n`-point transform.
    pub fn new(n: usize, radix: Radix) -> Result<Self, FftError> {
        if !radix.valid_length(n) {
            return Err(FftError::InvalidLength);
        }
        #[cfg(feature = "verbose-logging")]
        log::debug!("building {radix:?} reversal table for n={n}");
        let index = match radix {
            Radix::Two => {
                let log2n = n.trailing_zeros();
                (0..n).map(|i| bit_reverse(i, log2n)).collect()
            }
            Radix::Four => {
                let log4n = n.trailing_zeros() / 2;
                (0..n).map(|i| digit_reverse(i, log4n)).collect()
            }
        };
        Ok(Self { n, radix, index })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// The permutation as an explicit index table: element `i` moves to
    /// `indexes()[i]`.
    pub fn indexes(&self) -> &[usize] {
        &self.index
    }

    /// The permutation as a swap sequence: exchanging each returned pair
    /// once, in any order, applies the full reordering in place.
    pub fn swap_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.index
            .iter()
            .copied()
            .enumerate()
            .filter(|&(i, j)| i < j)
    }

    /// Reorder one buffer in place.
    pub fn reorder<X: Copy>(&self, data: &mut [X]) -> Result<(), FftError> {
        if data.len() != self.n {
            return Err(FftError::TableMismatch);
        }
        for (i, j) in self.swap_pairs() {
            data.swap(i, j);
        }
        Ok(())
    }

    /// Reorder parallel real/imaginary buffers in place.
    pub fn reorder_split<T: Copy>(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        if re.len() != im.len() {
            return Err(FftError::MismatchedLengths);
        }
        if re.len() != self.n {
            return Err(FftError::TableMismatch);
        }
        for (i, j) in self.swap_pairs() {
            re.swap(i, j);
            im.swap(i, j);
        }
        Ok(())
    }
}

/// Table-free in-place bit-reversal reorder, tracking the reversed index
/// incrementally instead of recomputing it per element.
pub fn bit_reverse_in_place<X>(data: &mut [X]) -> Result<(), FftError> {
    let n = data.len();
    if !Radix::Two.valid_length(n) {
        return Err(FftError::InvalidLength);
    }
    let half = n >> 1;
    let mut i = 0usize;
    for j in 0..n {
        if j < i {
            data.swap(i, j);
        }
        let mut k = half;
        while k <= i && k >= 1 {
            i -= k;
            k >>= 1;
        }
        i += k;
    }
    Ok(())
}

/// Table-free in-place radix-4 digit-reversal reorder.
pub fn digit_reverse_in_place<X>(data: &mut [X]) -> Result<(), FftError> {
    let n = data.len();
    if !Radix::Four.valid_length(n) {
        return Err(FftError::InvalidLength);
    }
    let quarter = n >> 2;
    let mut i = quarter;
    for j in 1..n - 1 {
        if j < i {
            data.swap(i, j);
        }
        let mut k = quarter;
        while i >= 3 * k {
            i -= 3 * k;
            k >>= 2;
        }
        i += k;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn bit_reversal_known_values() {
        let t = ReversalTable::new(8, Radix::Two).unwrap();
        assert_eq!(t.indexes(), &[0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn digit_reversal_known_values() {
        let t = ReversalTable::new(16, Radix::Four).unwrap();
        // Base-4 digits of 1 = 01 reverse to 10 = 4, of 7 = 13 to 31 = 13.
        assert_eq!(t.indexes()[1], 4);
        assert_eq!(t.indexes()[7], 13);
        assert_eq!(t.indexes()[0], 0);
        assert_eq!(t.indexes()[15], 15);
    }

    #[test]
    fn reversal_is_involution() {
        for &(n, radix) in &[(64, Radix::Two), (64, Radix::Four)] {
            let t = ReversalTable::new(n, radix).unwrap();
            let orig: Vec<usize> = (0..n).collect();
            let mut data = orig.clone();
            t.reorder(&mut data).unwrap();
            assert_ne!(data, orig);
            t.reorder(&mut data).unwrap();
            assert_eq!(data, orig);
        }
    }

    #[test]
    fn table_and_standard_modes_agree() {
        let n = 256;
        let t = ReversalTable::new(n, Radix::Two).unwrap();
        let mut fast: Vec<usize> = (0..n).collect();
        let mut standard = fast.clone();
        t.reorder(&mut fast).unwrap();
        bit_reverse_in_place(&mut standard).unwrap();
        assert_eq!(fast, standard);

        let t4 = ReversalTable::new(n, Radix::Four).unwrap();
        let mut fast4: Vec<usize> = (0..n).collect();
        let mut standard4 = fast4.clone();
        t4.reorder(&mut fast4).unwrap();
        digit_reverse_in_place(&mut standard4).unwrap();
        assert_eq!(fast4, standard4);
    }

    #[test]
    fn swap_pairs_match_index_table() {
        let t = ReversalTable::new(16, Radix::Two).unwrap();
        let mut via_pairs: Vec<usize> = (0..16).collect();
        for (i, j) in t.swap_pairs() {
            via_pairs.swap(i, j);
        }
        let via_table: Vec<usize> = t.indexes().to_vec();
        assert_eq!(via_pairs, via_table);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let t = ReversalTable::new(16, Radix::Two).unwrap();
        let mut data = [0u8; 8];
        assert_eq!(t.reorder(&mut data), Err(FftError::TableMismatch));
    }
}
