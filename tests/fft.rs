use radixfft::{scale, Complex64, FftImpl, FftPlan, FftPlanner, Fft4Plan, Radix};

fn generate_input(n: usize) -> (Vec<f64>, Vec<f64>) {
    let re = (0..n).map(|i| (i as f64 * 0.31).sin() * 2.0).collect();
    let im = (0..n).map(|i| (i as f64 * 0.17).cos() - 0.5).collect();
    (re, im)
}

fn assert_parity(n: usize) {
    let (re, im) = generate_input(n);
    let mut re2 = re.clone();
    let mut im2 = im.clone();
    let mut re4 = re;
    let mut im4 = im;

    let plan2 = FftPlan::<f64>::new(n).unwrap();
    let plan4 = Fft4Plan::<f64>::new(n).unwrap();
    plan2.fft_split(&mut re2, &mut im2).unwrap();
    plan4.fft_split(&mut re4, &mut im4).unwrap();

    for k in 0..n {
        assert!((re2[k] - re4[k]).abs() < 1e-9, "n={n} re[{k}]");
        assert!((im2[k] - im4[k]).abs() < 1e-9, "n={n} im[{k}]");
    }
}

#[test]
fn parity_between_radix2_and_radix4() {
    for &n in &[16_usize, 64, 256] {
        assert_parity(n);
    }
}

#[test]
fn inverse_parity_between_radix2_and_radix4() {
    let n = 64;
    let (re, im) = generate_input(n);
    let mut re2 = re.clone();
    let mut im2 = im.clone();
    let mut re4 = re;
    let mut im4 = im;

    let plan2 = FftPlan::<f64>::new(n).unwrap();
    let plan4 = Fft4Plan::<f64>::new(n).unwrap();
    plan2.ifft_split(&mut re2, &mut im2).unwrap();
    plan4.ifft_split(&mut re4, &mut im4).unwrap();

    for k in 0..n {
        assert!((re2[k] - re4[k]).abs() < 1e-9);
        assert!((im2[k] - im4[k]).abs() < 1e-9);
    }
}

#[test]
fn planner_selects_radix4_where_possible() {
    let planner = FftPlanner::<f64>::new();
    assert_eq!(planner.plan_radix(64), Some(Radix::Four));
    assert_eq!(planner.plan_radix(128), Some(Radix::Two));
    assert_eq!(planner.plan_radix(6), None);
}

#[test]
fn planner_shares_tables_across_radices_independently() {
    let mut planner = FftPlanner::<f64>::new();
    let r2 = planner.plan_fft(16).unwrap();
    let r4 = planner.plan_fft4(16).unwrap();
    // Radix-2 and radix-4 tables differ in length; they must not alias.
    assert_eq!(r2.twiddles().len(), 12);
    assert_eq!(r4.twiddles().len(), 20);
}

#[test]
fn sine_amplitude_lands_in_the_expected_bins() {
    // 0.9 * sin at bin 2 of a 16-point transform: magnitude n/2 * 0.9 = 7.2
    // at bins 2 and 14, nothing elsewhere.
    let n = 16;
    let plan = FftPlan::<f64>::new(n).unwrap();
    let mut re: Vec<f64> = (0..n)
        .map(|i| 0.9 * (2.0 * std::f64::consts::PI * 2.0 * i as f64 / n as f64).sin())
        .collect();
    let mut im = vec![0.0; n];
    plan.fft_split(&mut re, &mut im).unwrap();
    for k in 0..n {
        let mag = (re[k] * re[k] + im[k] * im[k]).sqrt();
        if k == 2 || k == 14 {
            assert!((mag - 7.2).abs() < 1e-10, "bin {k} mag {mag}");
        } else {
            assert!(mag < 1e-10, "bin {k} mag {mag}");
        }
    }
}

#[test]
fn large_transform_round_trips() {
    let n = 1 << 12;
    let plan = Fft4Plan::<f64>::new(n).unwrap();
    let orig: Vec<Complex64> = (0..n)
        .map(|i| Complex64::new(i as f64 / n as f64, -(i as f64) / n as f64))
        .collect();
    let mut data = orig.clone();
    plan.fft(&mut data).unwrap();
    plan.ifft(&mut data).unwrap();
    for (x, o) in data.iter().zip(orig.iter()) {
        assert!((x.re / n as f64 - o.re).abs() < 1e-9);
        assert!((x.im / n as f64 - o.im).abs() < 1e-9);
    }
}

#[test]
fn shared_tables_survive_plan_clones() {
    let plan = FftPlan::<f64>::new(32).unwrap();
    let clone = plan.clone();
    let mut re: Vec<f64> = (0..32).map(|i| i as f64).collect();
    let mut im = vec![0.0; 32];
    clone.fft_split(&mut re, &mut im).unwrap();
    clone.ifft_split(&mut re, &mut im).unwrap();
    scale(&mut re, &mut im, 1.0 / 32.0);
    for (k, x) in re.iter().enumerate() {
        assert!((x - k as f64).abs() < 1e-9);
    }
}
