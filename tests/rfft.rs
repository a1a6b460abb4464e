use radixfft::rfft::{fft_2real, fft_2real_with_scratch, rfft_spectrum};
use radixfft::{Complex64, FftError, FftImpl, FftPlan, Fft4Plan};

// The real-input butterfly path must agree with a complex transform of the
// same signal with zero imaginary parts, on both radices.
#[test]
fn real_path_agrees_with_complex_path() {
    for &n in &[16_usize, 64, 128] {
        let plan = FftPlan::<f64>::new(n).unwrap();
        let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.23).sin() + 0.1).collect();

        let mut re_c = signal.clone();
        let mut im_c = vec![0.0; n];
        plan.fft_split(&mut re_c, &mut im_c).unwrap();

        let mut re_r = signal;
        let mut im_r = vec![f64::NAN; n];
        plan.rfft_split(&mut re_r, &mut im_r).unwrap();

        for k in 0..n {
            assert!((re_c[k] - re_r[k]).abs() < 1e-9, "n={n} re[{k}]");
            assert!((im_c[k] - im_r[k]).abs() < 1e-9, "n={n} im[{k}]");
        }
    }
}

#[test]
fn half_spectrum_matches_full_transform() {
    let n = 64;
    let plan = FftPlan::<f64>::new(n).unwrap();
    let signal: Vec<f64> = (0..n).map(|i| ((i * i) % 17) as f64 * 0.1).collect();

    let spectrum = rfft_spectrum(&plan, &signal).unwrap();
    assert_eq!(spectrum.len(), n / 2 + 1);

    let mut re = signal.clone();
    let mut im = vec![0.0; n];
    plan.fft_split(&mut re, &mut im).unwrap();
    for k in 0..=n / 2 {
        assert!((spectrum[k].re - re[k]).abs() < 1e-9);
        assert!((spectrum[k].im - im[k]).abs() < 1e-9);
    }
}

#[test]
fn packed_pair_matches_separate_transforms() {
    let n = 256;
    let plan = Fft4Plan::<f64>::new(n).unwrap();
    let a: Vec<f64> = (0..n).map(|i| (i as f64 * 0.05).sin()).collect();
    let b: Vec<f64> = (0..n).map(|i| (i as f64 * 0.11).cos() * 0.7).collect();

    let (spec_a, spec_b) = fft_2real(&plan, &a, &b).unwrap();
    let solo_a = rfft_spectrum(&plan, &a).unwrap();
    let solo_b = rfft_spectrum(&plan, &b).unwrap();

    for k in 0..=n / 2 {
        assert!((spec_a[k].re - solo_a[k].re).abs() < 1e-9, "a re[{k}]");
        assert!((spec_a[k].im - solo_a[k].im).abs() < 1e-9, "a im[{k}]");
        assert!((spec_b[k].re - solo_b[k].re).abs() < 1e-9, "b re[{k}]");
        assert!((spec_b[k].im - solo_b[k].im).abs() < 1e-9, "b im[{k}]");
    }
}

#[test]
fn scratch_variant_rejects_short_scratch() {
    let n = 16;
    let plan = FftPlan::<f64>::new(n).unwrap();
    let a = vec![0.0; n];
    let b = vec![0.0; n];
    let mut spec_a = vec![Complex64::zero(); n / 2 + 1];
    let mut spec_b = vec![Complex64::zero(); n / 2 + 1];
    let mut scratch_re = vec![0.0; n - 1];
    let mut scratch_im = vec![0.0; n];
    assert_eq!(
        fft_2real_with_scratch(
            &plan,
            &a,
            &b,
            &mut spec_a,
            &mut spec_b,
            &mut scratch_re,
            &mut scratch_im,
        ),
        Err(FftError::MismatchedLengths)
    );
}

#[test]
fn scratch_variant_rejects_short_spectrum() {
    let n = 16;
    let plan = FftPlan::<f64>::new(n).unwrap();
    let a = vec![0.0; n];
    let b = vec![0.0; n];
    let mut spec_a = vec![Complex64::zero(); n / 2];
    let mut spec_b = vec![Complex64::zero(); n / 2 + 1];
    let mut scratch_re = vec![0.0; n];
    let mut scratch_im = vec![0.0; n];
    assert_eq!(
        fft_2real_with_scratch(
            &plan,
            &a,
            &b,
            &mut spec_a,
            &mut spec_b,
            &mut scratch_re,
            &mut scratch_im,
        ),
        Err(FftError::MismatchedLengths)
    );
}

#[test]
fn hermitian_spectrum_inverts_to_real_signal() {
    let n = 32;
    let plan = FftPlan::<f64>::new(n).unwrap();
    let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.41).cos() * 2.5).collect();

    let mut re = signal.clone();
    let mut im = vec![0.0; n];
    plan.rfft_split(&mut re, &mut im).unwrap();
    plan.ifft_split(&mut re, &mut im).unwrap();
    for k in 0..n {
        assert!((re[k] / n as f64 - signal[k]).abs() < 1e-9);
        assert!((im[k] / n as f64).abs() < 1e-9);
    }
}
