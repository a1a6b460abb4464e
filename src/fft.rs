//! Radix-2 butterfly transform engine.
//!
//! The transforms are iterative decimation-in-frequency Cooley–Tukey:
//! natural-order input runs through `log2(n)` butterfly stages and the
//! scrambled result is restored by the bit-reversal permutation. The
//! forward transform is unnormalized and the inverse applies no 1/n
//! scaling either; normalization is the caller's choice (see [`scale`]).
//!
//! Twiddle and reversal tables are built once per length — either directly
//! or through the caching [`FftPlanner`] — and may be shared freely between
//! plans and threads; a transform call never mutates them.

use alloc::sync::Arc;

use hashbrown::HashMap;

use crate::fft4::Fft4Plan;
use crate::num::{copy_to_complex, split_vecs, Complex, Float};
use crate::reorder::ReversalTable;
use crate::twiddle::{Radix, TwiddleTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Zero-length buffer.
    EmptyInput,
    /// Length is not an exact power of the declared radix, or below the
    /// minimum the butterfly structure supports.
    InvalidLength,
    /// A table built for one length was used with a buffer or plan of a
    /// different length or radix.
    TableMismatch,
    /// Parallel re/im or scratch/output slices disagree in length.
    MismatchedLengths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftDirection {
    #[default]
    Forward,
    Inverse,
}

/// Input domain of a transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftDomain {
    #[default]
    Complex,
    Real,
}

/// A transform engine for one fixed length.
///
/// Implemented by [`FftPlan`] (radix-2) and [`Fft4Plan`](crate::fft4::Fft4Plan)
/// (radix-4). The split-slice methods are the primitive kernels; the
/// interleaved wrappers copy through scratch so both complex
/// representations run identical arithmetic.
pub trait FftImpl<T: Float> {
    /// Transform length this engine was planned for.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn radix(&self) -> Radix;

    /// Unnormalized forward complex transform, in place.
    fn fft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError>;

    /// Unscaled inverse complex transform, in place. Multiply by `1/n`
    /// afterwards (e.g. via [`scale`]) to invert [`FftImpl::fft_split`].
    fn ifft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError>;

    /// Forward transform of a real signal held in `re`, exploiting
    /// conjugate symmetry to halve the butterfly arithmetic. `im` is used
    /// as workspace and holds the imaginary output; its input contents are
    /// ignored. The result matches [`FftImpl::fft_split`] with zero
    /// imaginary input.
    fn rfft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError>;

    /// Dispatch by direction and domain.
    ///
    /// A Hermitian spectrum inverts to a real signal through the complex
    /// path, so `(Real, Inverse)` runs the complex inverse; there is no
    /// separate real-inverse kernel.
    fn transform(
        &self,
        re: &mut [T],
        im: &mut [T],
        direction: FftDirection,
        domain: FftDomain,
    ) -> Result<(), FftError> {
        match (domain, direction) {
            (FftDomain::Complex, FftDirection::Forward) => self.fft_split(re, im),
            (FftDomain::Complex, FftDirection::Inverse) => self.ifft_split(re, im),
            (FftDomain::Real, FftDirection::Forward) => self.rfft_split(re, im),
            (FftDomain::Real, FftDirection::Inverse) => self.ifft_split(re, im),
        }
    }

    /// Forward transform of an interleaved buffer.
    fn fft(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let (mut re, mut im) = split_vecs(data);
        self.fft_split(&mut re, &mut im)?;
        copy_to_complex(&re, &im, data);
        Ok(())
    }

    /// Unscaled inverse transform of an interleaved buffer.
    fn ifft(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        let (mut re, mut im) = split_vecs(data);
        self.ifft_split(&mut re, &mut im)?;
        copy_to_complex(&re, &im, data);
        Ok(())
    }
}

/// Multiply both components by `factor`; pairs with the unscaled inverse,
/// typically as `scale(re, im, 1/n)`.
pub fn scale<T: Float>(re: &mut [T], im: &mut [T], factor: T) {
    for v in re.iter_mut() {
        *v = *v * factor;
    }
    for v in im.iter_mut() {
        *v = *v * factor;
    }
}

pub(crate) fn check_split<T: Float>(n: usize, re: &[T], im: &[T]) -> Result<(), FftError> {
    if re.is_empty() {
        return Err(FftError::EmptyInput);
    }
    if re.len() != im.len() {
        return Err(FftError::MismatchedLengths);
    }
    if re.len() != n {
        return Err(FftError::TableMismatch);
    }
    Ok(())
}

/// The `log2(n)` radix-2 butterfly stages, output in bit-reversed order.
fn butterflies<T: Float>(
    re: &mut [T],
    im: &mut [T],
    tw: &TwiddleTable<T>,
    log2n: usize,
    direction: FftDirection,
) {
    let n = re.len();
    let sign = match direction {
        FftDirection::Forward => T::one(),
        FftDirection::Inverse => -T::one(),
    };
    let mut stride = n;
    let mut angle_inc = 1usize;
    for _ in 0..log2n {
        let k = stride;
        stride >>= 1;
        let mut angle = 0usize;
        for bfly in 0..stride {
            let cos = tw.cos(angle);
            let sin = sign * tw.sin(angle);
            angle += angle_inc;

            let mut h = bfly;
            let mut j = h + stride;
            while j < n {
                let real_temp = re[h] - re[j];
                let imag_temp = im[h] - im[j];
                re[h] = re[h] + re[j];
                im[h] = im[h] + im[j];
                re[j] = cos * real_temp + sin * imag_temp;
                im[j] = cos * imag_temp - sin * real_temp;
                h += k;
                j += k;
            }
        }
        angle_inc <<= 1;
    }
}

/// Real-input butterfly stages: the first stage knows the imaginary parts
/// are zero and the final stage has trivial twiddles, halving the work of
/// the complex path. Output in bit-reversed order. Requires `log2n >= 2`.
fn real_butterflies<T: Float>(re: &mut [T], im: &mut [T], tw: &TwiddleTable<T>, log2n: usize) {
    let n = re.len();

    // First stage: imaginary input is zero by contract.
    {
        let stride = n >> 1;
        let mut j = stride;
        for h in 0..stride {
            let real_temp = re[h] - re[j];
            re[h] = re[h] + re[j];
            im[h] = T::zero();
            re[j] = tw.cos(h) * real_temp;
            im[j] = -(tw.sin(h) * real_temp);
            j += 1;
        }
    }

    // Middle stages are the generic complex butterflies.
    let mut stride = n >> 1;
    let mut angle_inc = 2usize;
    for _ in 1..(log2n - 1) {
        let k = stride;
        stride >>= 1;
        let mut angle = 0usize;
        for bfly in 0..stride {
            let cos = tw.cos(angle);
            let sin = tw.sin(angle);
            angle += angle_inc;

            let mut h = bfly;
            let mut j = h + stride;
            while j < n {
                let real_temp = re[h] - re[j];
                let imag_temp = im[h] - im[j];
                re[h] = re[h] + re[j];
                im[h] = im[h] + im[j];
                re[j] = cos * real_temp + sin * imag_temp;
                im[j] = cos * imag_temp - sin * real_temp;
                h += k;
                j += k;
            }
        }
        angle_inc <<= 1;
    }

    // Final stage: cos = 1, sin = 0.
    let mut h = 0;
    while h < n {
        let j = h + 1;
        let real_temp = re[h] - re[j];
        let imag_temp = im[h] - im[j];
        re[h] = re[h] + re[j];
        im[h] = im[h] + im[j];
        re[j] = real_temp;
        im[j] = imag_temp;
        h += 2;
    }
}

/// Reusable radix-2 transform plan: length validated once at construction,
/// tables built once and shared by every call.
#[derive(Clone, Debug)]
pub struct FftPlan<T: Float> {
    n: usize,
    log2n: usize,
    twiddles: Arc<TwiddleTable<T>>,
    reversal: Arc<ReversalTable>,
}

impl<T: Float> FftPlan<T> {
    /// Plan an `n`-point radix-2 transform, building fresh tables.
    pub fn new(n: usize) -> Result<Self, FftError> {
        let twiddles = Arc::new(TwiddleTable::new(n, Radix::Two)?);
        let reversal = Arc::new(ReversalTable::new(n, Radix::Two)?);
        Self::with_tables(n, twiddles, reversal)
    }

    /// Plan an `n`-point transform around externally built tables, e.g.
    /// ones shared through [`FftPlanner`]. Tables built for a different
    /// length or radix are rejected with [`FftError::TableMismatch`].
    pub fn with_tables(
        n: usize,
        twiddles: Arc<TwiddleTable<T>>,
        reversal: Arc<ReversalTable>,
    ) -> Result<Self, FftError> {
        if !Radix::Two.valid_length(n) {
            return Err(FftError::InvalidLength);
        }
        if twiddles.n() != n || twiddles.radix() != Radix::Two {
            return Err(FftError::TableMismatch);
        }
        if reversal.n() != n || reversal.radix() != Radix::Two {
            return Err(FftError::TableMismatch);
        }
        Ok(Self {
            n,
            log2n: Radix::Two.log_len(n),
            twiddles,
            reversal,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn log2_len(&self) -> usize {
        self.log2n
    }

    pub fn twiddles(&self) -> &Arc<TwiddleTable<T>> {
        &self.twiddles
    }

    pub fn reversal(&self) -> &Arc<ReversalTable> {
        &self.reversal
    }
}

impl<T: Float> FftImpl<T> for FftPlan<T> {
    fn len(&self) -> usize {
        self.n
    }

    fn radix(&self) -> Radix {
        Radix::Two
    }

    fn fft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        check_split(self.n, re, im)?;
        butterflies(re, im, &self.twiddles, self.log2n, FftDirection::Forward);
        self.reversal.reorder_split(re, im)
    }

    fn ifft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        check_split(self.n, re, im)?;
        butterflies(re, im, &self.twiddles, self.log2n, FftDirection::Inverse);
        self.reversal.reorder_split(re, im)
    }

    fn rfft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        check_split(self.n, re, im)?;
        real_butterflies(re, im, &self.twiddles, self.log2n);
        self.reversal.reorder_split(re, im)
    }
}

/// Caches twiddle and reversal tables per `(length, radix)` and hands out
/// plans that share them. Repeated plans for one length reuse the same
/// `Arc`-backed tables rather than recomputing trigonometry.
pub struct FftPlanner<T: Float> {
    twiddle_cache: HashMap<(usize, Radix), Arc<TwiddleTable<T>>>,
    reversal_cache: HashMap<(usize, Radix), Arc<ReversalTable>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            twiddle_cache: HashMap::new(),
            reversal_cache: HashMap::new(),
        }
    }

    /// Retrieve or build the coefficient table for `(n, radix)`.
    pub fn get_twiddles(&mut self, n: usize, radix: Radix) -> Result<Arc<TwiddleTable<T>>, FftError> {
        if !self.twiddle_cache.contains_key(&(n, radix)) {
            let table = Arc::new(TwiddleTable::new(n, radix)?);
            self.twiddle_cache.insert((n, radix), table);
        }
        Ok(Arc::clone(self.twiddle_cache.get(&(n, radix)).unwrap()))
    }

    /// Retrieve or build the reversal-index table for `(n, radix)`.
    pub fn get_reversal(&mut self, n: usize, radix: Radix) -> Result<Arc<ReversalTable>, FftError> {
        if !self.reversal_cache.contains_key(&(n, radix)) {
            let table = Arc::new(ReversalTable::new(n, radix)?);
            self.reversal_cache.insert((n, radix), table);
        }
        Ok(Arc::clone(self.reversal_cache.get(&(n, radix)).unwrap()))
    }

    /// Plan an `n`-point radix-2 transform backed by the cache.
    pub fn plan_fft(&mut self, n: usize) -> Result<FftPlan<T>, FftError> {
        let twiddles = self.get_twiddles(n, Radix::Two)?;
        let reversal = self.get_reversal(n, Radix::Two)?;
        FftPlan::with_tables(n, twiddles, reversal)
    }

    /// Plan an `n`-point radix-4 transform backed by the cache.
    pub fn plan_fft4(&mut self, n: usize) -> Result<Fft4Plan<T>, FftError> {
        let twiddles = self.get_twiddles(n, Radix::Four)?;
        let reversal = self.get_reversal(n, Radix::Four)?;
        Fft4Plan::with_tables(n, twiddles, reversal)
    }

    /// Pick the radix for a length: radix-4 where the length allows it.
    pub fn plan_radix(&self, n: usize) -> Option<Radix> {
        if Radix::Four.valid_length(n) {
            Some(Radix::Four)
        } else if Radix::Two.valid_length(n) {
            Some(Radix::Two)
        } else {
            None
        }
    }

    #[cfg(test)]
    fn cache_len(&self) -> usize {
        self.twiddle_cache.len()
    }
}
