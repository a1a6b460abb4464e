//! Real-input adaptation layer over the complex engines.
//!
//! Two services, both generic over [`FftImpl`] so they run on the radix-2
//! or the radix-4 plan:
//!
//! * [`rfft_spectrum`]: the first `n/2 + 1` independent bins of a real
//!   signal's transform (the remaining bins are the Hermitian mirror).
//! * [`fft_2real`]: two real signals packed into one complex transform —
//!   one as the real part, one as the imaginary part — with the two
//!   spectra unpacked afterwards through conjugate symmetry. Two real
//!   FFTs for the price of one complex FFT.
//!
//! Scratch buffers are caller-provided in the `_with_scratch` variants;
//! the plain variants allocate internally.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::{FftError, FftImpl};
use crate::num::{Complex, Float};

/// Unpack `A[k] = (Z[k] + conj(Z[n-k])) / 2` and
/// `B[k] = -i (Z[k] - conj(Z[n-k])) / 2` for `k = 1..n/2`, plus the purely
/// real DC and Nyquist bins, from the transform `Z` of `a + ib`.
fn unpack_two_spectra<T: Float>(
    re: &[T],
    im: &[T],
    spec_a: &mut [Complex<T>],
    spec_b: &mut [Complex<T>],
) {
    let n = re.len();
    let m = n >> 1;
    let half = T::from_f32(0.5);

    spec_a[0] = Complex::new(re[0], T::zero());
    spec_b[0] = Complex::new(im[0], T::zero());
    spec_a[m] = Complex::new(re[m], T::zero());
    spec_b[m] = Complex::new(im[m], T::zero());

    for k in 1..m {
        spec_a[k] = Complex::new((re[k] + re[n - k]) * half, (im[k] - im[n - k]) * half);
        spec_b[k] = Complex::new((im[k] + im[n - k]) * half, (re[n - k] - re[k]) * half);
    }
}

/// Transform two independent real signals with one complex transform.
///
/// `a` and `b` must both have the engine's length `n`; the two output
/// spectra receive the `n/2 + 1` independent bins each. The scratch
/// slices carry the packed intermediate signal and must be length `n`.
/// Bin for bin, the outputs match running [`rfft_spectrum`] on `a` and
/// `b` separately.
#[allow(clippy::too_many_arguments)]
pub fn fft_2real_with_scratch<T: Float, F: FftImpl<T>>(
    fft: &F,
    a: &[T],
    b: &[T],
    spec_a: &mut [Complex<T>],
    spec_b: &mut [Complex<T>],
    scratch_re: &mut [T],
    scratch_im: &mut [T],
) -> Result<(), FftError> {
    let n = fft.len();
    if a.is_empty() {
        return Err(FftError::EmptyInput);
    }
    if a.len() != n || b.len() != n {
        return Err(FftError::TableMismatch);
    }
    if scratch_re.len() != n || scratch_im.len() != n {
        return Err(FftError::MismatchedLengths);
    }
    let m = n >> 1;
    if spec_a.len() != m + 1 || spec_b.len() != m + 1 {
        return Err(FftError::MismatchedLengths);
    }

    scratch_re.copy_from_slice(a);
    scratch_im.copy_from_slice(b);
    fft.fft_split(scratch_re, scratch_im)?;
    unpack_two_spectra(scratch_re, scratch_im, spec_a, spec_b);
    Ok(())
}

/// Allocating wrapper around [`fft_2real_with_scratch`].
pub fn fft_2real<T: Float, F: FftImpl<T>>(
    fft: &F,
    a: &[T],
    b: &[T],
) -> Result<(Vec<Complex<T>>, Vec<Complex<T>>), FftError> {
    let n = fft.len();
    let mut spec_a = vec![Complex::zero(); n / 2 + 1];
    let mut spec_b = vec![Complex::zero(); n / 2 + 1];
    let mut scratch_re = vec![T::zero(); n];
    let mut scratch_im = vec![T::zero(); n];
    fft_2real_with_scratch(
        fft,
        a,
        b,
        &mut spec_a,
        &mut spec_b,
        &mut scratch_re,
        &mut scratch_im,
    )?;
    Ok((spec_a, spec_b))
}

/// The `n/2 + 1` independent bins of a real signal's forward transform,
/// computed through the engine's real-input butterfly path.
pub fn rfft_spectrum_with_scratch<T: Float, F: FftImpl<T>>(
    fft: &F,
    input: &[T],
    output: &mut [Complex<T>],
    scratch_re: &mut [T],
    scratch_im: &mut [T],
) -> Result<(), FftError> {
    let n = fft.len();
    if input.is_empty() {
        return Err(FftError::EmptyInput);
    }
    if input.len() != n {
        return Err(FftError::TableMismatch);
    }
    if scratch_re.len() != n || scratch_im.len() != n {
        return Err(FftError::MismatchedLengths);
    }
    let m = n >> 1;
    if output.len() != m + 1 {
        return Err(FftError::MismatchedLengths);
    }

    scratch_re.copy_from_slice(input);
    fft.rfft_split(scratch_re, scratch_im)?;
    for (k, out) in output.iter_mut().enumerate() {
        *out = Complex::new(scratch_re[k], scratch_im[k]);
    }
    Ok(())
}

/// Allocating wrapper around [`rfft_spectrum_with_scratch`].
pub fn rfft_spectrum<T: Float, F: FftImpl<T>>(
    fft: &F,
    input: &[T],
) -> Result<Vec<Complex<T>>, FftError> {
    let n = fft.len();
    let mut output = vec![Complex::zero(); n / 2 + 1];
    let mut scratch_re = vec![T::zero(); n];
    let mut scratch_im = vec![T::zero(); n];
    rfft_spectrum_with_scratch(fft, input, &mut output, &mut scratch_re, &mut scratch_im)?;
    Ok(output)
}
