//! Radix-4 butterfly transform engine.
//!
//! Same decimation-in-frequency shape as the radix-2 engine but combining
//! four samples per butterfly over `log4(n)` stages, with three twiddle
//! angles (k, 2k, 3k) looked up per butterfly from the extended `5n/4`
//! sine table. Output order is restored by the base-4 digit-reversal
//! permutation. Lengths must be exact powers of four.
//!
//! The inverse reuses the forward structure with the stage rotations and
//! table sines conjugated. Forward and inverse are unscaled, as in the
//! radix-2 engine.

use alloc::sync::Arc;

use crate::fft::{check_split, FftError, FftImpl};
use crate::num::Float;
use crate::reorder::ReversalTable;
use crate::twiddle::{Radix, TwiddleTable};

/// One radix-4 butterfly pass over the whole buffer.
///
/// `sign` is `+1` for the forward transform and `-1` for the inverse; it
/// flips both the internal `±i` rotation of the four-point kernel and the
/// table sines.
#[allow(clippy::too_many_arguments)]
fn stage4<T: Float>(
    re: &mut [T],
    im: &mut [T],
    tw: &TwiddleTable<T>,
    k: usize,
    stride: usize,
    angle_inc: usize,
    sign: T,
) {
    let n = re.len();
    let mut angle1 = 0usize;
    for bfly in 0..stride {
        let angle2 = angle1 * 2;
        let angle3 = angle1 * 3;
        let cos1 = tw.cos(angle1);
        let sin1 = sign * tw.sin(angle1);
        let cos2 = tw.cos(angle2);
        let sin2 = sign * tw.sin(angle2);
        let cos3 = tw.cos(angle3);
        let sin3 = sign * tw.sin(angle3);
        angle1 += angle_inc;

        let mut h0 = bfly;
        while h0 < n {
            let h1 = h0 + stride;
            let h2 = h1 + stride;
            let h3 = h2 + stride;

            let mut tr1 = re[h0] + re[h2];
            let mut tr2 = re[h0] - re[h2];
            let mut tr3 = re[h1] + re[h3];
            re[h0] = tr1 + tr3;
            tr1 = tr1 - tr3;
            let mut ti1 = im[h0] + im[h2];
            let mut ti2 = im[h0] - im[h2];
            tr3 = im[h1] + im[h3];
            im[h0] = ti1 + tr3;
            ti1 = ti1 - tr3;
            re[h2] = tr1 * cos2 + ti1 * sin2;
            im[h2] = ti1 * cos2 - tr1 * sin2;
            tr3 = sign * (im[h1] - im[h3]);
            tr1 = tr2 + tr3;
            tr2 = tr2 - tr3;
            tr3 = sign * (re[h1] - re[h3]);
            ti1 = ti2 - tr3;
            ti2 = ti2 + tr3;
            re[h1] = tr1 * cos1 + ti1 * sin1;
            im[h1] = ti1 * cos1 - tr1 * sin1;
            re[h3] = tr2 * cos3 + ti2 * sin3;
            im[h3] = ti2 * cos3 - tr2 * sin3;

            h0 += k;
        }
    }
}

/// The `log4(n)` complex butterfly stages, output in digit-reversed order.
fn butterflies4<T: Float>(re: &mut [T], im: &mut [T], tw: &TwiddleTable<T>, log4n: usize, sign: T) {
    let n = re.len();
    let mut stride = n;
    let mut angle_inc = 1usize;
    for _ in 0..log4n {
        let k = stride;
        stride >>= 2;
        stage4(re, im, tw, k, stride, angle_inc, sign);
        angle_inc <<= 2;
    }
}

/// Real-input radix-4 stages: the first stage exploits the zero imaginary
/// parts, the remaining stages are the generic complex ones. Output in
/// digit-reversed order.
fn real_butterflies4<T: Float>(re: &mut [T], im: &mut [T], tw: &TwiddleTable<T>, log4n: usize) {
    let n = re.len();

    // First stage: imaginary input is zero by contract, so the four-point
    // kernel collapses to real sums/differences with a pure rotation of
    // the odd outputs.
    {
        let stride = n >> 2;
        for bfly in 0..stride {
            let angle1 = bfly;
            let angle2 = angle1 * 2;
            let angle3 = angle1 * 3;
            let cos1 = tw.cos(angle1);
            let sin1 = tw.sin(angle1);
            let cos2 = tw.cos(angle2);
            let sin2 = tw.sin(angle2);
            let cos3 = tw.cos(angle3);
            let sin3 = tw.sin(angle3);

            let h0 = bfly;
            let h1 = h0 + stride;
            let h2 = h1 + stride;
            let h3 = h2 + stride;

            let mut tr1 = re[h0] + re[h2];
            let tr2 = re[h0] - re[h2];
            let mut tr3 = re[h1] + re[h3];
            re[h0] = tr1 + tr3;
            tr1 = tr1 - tr3;
            im[h0] = T::zero();
            re[h2] = tr1 * cos2;
            im[h2] = -(tr1 * sin2);
            tr1 = tr2;
            tr3 = re[h1] - re[h3];
            let ti1 = -tr3;
            let ti2 = tr3;
            re[h1] = tr1 * cos1 + ti1 * sin1;
            im[h1] = ti1 * cos1 - tr1 * sin1;
            re[h3] = tr2 * cos3 + ti2 * sin3;
            im[h3] = ti2 * cos3 - tr2 * sin3;
        }
    }

    let mut stride = n >> 2;
    let mut angle_inc = 4usize;
    for _ in 1..log4n {
        let k = stride;
        stride >>= 2;
        stage4(re, im, tw, k, stride, angle_inc, T::one());
        angle_inc <<= 2;
    }
}

/// Reusable radix-4 transform plan for lengths that are powers of four.
#[derive(Clone, Debug)]
pub struct Fft4Plan<T: Float> {
    n: usize,
    log4n: usize,
    twiddles: Arc<TwiddleTable<T>>,
    reversal: Arc<ReversalTable>,
}

impl<T: Float> Fft4Plan<T> {
    /// Plan an `n`-point radix-4 transform, building fresh tables.
    pub fn new(n: usize) -> Result<Self, FftError> {
        let twiddles = Arc::new(TwiddleTable::new(n, Radix::Four)?);
        let reversal = Arc::new(ReversalTable::new(n, Radix::Four)?);
        Self::with_tables(n, twiddles, reversal)
    }

    /// Plan around externally built tables; see [`crate::fft::FftPlan::with_tables`].
    pub fn with_tables(
        n: usize,
        twiddles: Arc<TwiddleTable<T>>,
        reversal: Arc<ReversalTable>,
    ) -> Result<Self, FftError> {
        if !Radix::Four.valid_length(n) {
            return Err(FftError::InvalidLength);
        }
        if twiddles.n() != n || twiddles.radix() != Radix::Four {
            return Err(FftError::TableMismatch);
        }
        if reversal.n() != n || reversal.radix() != Radix::Four {
            return Err(FftError::TableMismatch);
        }
        Ok(Self {
            n,
            log4n: Radix::Four.log_len(n),
            twiddles,
            reversal,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn log4_len(&self) -> usize {
        self.log4n
    }

    pub fn twiddles(&self) -> &Arc<TwiddleTable<T>> {
        &self.twiddles
    }

    pub fn reversal(&self) -> &Arc<ReversalTable> {
        &self.reversal
    }
}

impl<T: Float> FftImpl<T> for Fft4Plan<T> {
    fn len(&self) -> usize {
        self.n
    }

    fn radix(&self) -> Radix {
        Radix::Four
    }

    fn fft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        check_split(self.n, re, im)?;
        butterflies4(re, im, &self.twiddles, self.log4n, T::one());
        self.reversal.reorder_split(re, im)
    }

    fn ifft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        check_split(self.n, re, im)?;
        butterflies4(re, im, &self.twiddles, self.log4n, -T::one());
        self.reversal.reorder_split(re, im)
    }

    fn rfft_split(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        check_split(self.n, re, im)?;
        real_butterflies4(re, im, &self.twiddles, self.log4n);
        self.reversal.reorder_split(re, im)
    }
}
