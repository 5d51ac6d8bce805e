//! Accuracy tests for the 1-D butterfly kernels.
//!
//! Each fixed-point kernel is compared against a direct floating-point
//! evaluation of its transform basis. The lattice computes the unnormalized
//! DCT-II (with the DC row scaled by 1/sqrt(2)) and the odd sine transform
//! at unit gain, so the two should agree to within a few rounding steps.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use rand::Rng;
use zentxfm::fwd1d::fwd_txfm1d;
use zentxfm::inv1d::inv_txfm1d;
use zentxfm::TxfmType;

const COS_BIT: [i8; 12] = [14; 12];
const STAGE_RANGE: [i8; 12] = [31; 12];

fn reference_dct(input: &[i32]) -> Vec<f64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            let sum: f64 = input
                .iter()
                .enumerate()
                .map(|(i, &x)| {
                    f64::from(x) * (PI * (2 * i + 1) as f64 * k as f64 / (2 * n) as f64).cos()
                })
                .sum();
            if k == 0 {
                sum * FRAC_1_SQRT_2
            } else {
                sum
            }
        })
        .collect()
}

fn reference_adst(input: &[i32]) -> Vec<f64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(i, &x)| {
                    f64::from(x)
                        * (PI * (2 * i + 1) as f64 * (2 * k + 1) as f64 / (4 * n) as f64).sin()
                })
                .sum()
        })
        .collect()
}

fn random_line(rng: &mut impl Rng, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(-1023..=1023)).collect()
}

fn assert_tracks_reference(
    kind: TxfmType,
    reference: fn(&[i32]) -> Vec<f64>,
    tolerance: f64,
    trials: usize,
) {
    let n = kind.size();
    let mut rng = rand::thread_rng();
    let mut output = vec![0i32; n];
    for _ in 0..trials {
        let input = random_line(&mut rng, n);
        fwd_txfm1d(kind, &input, &mut output, &COS_BIT, &STAGE_RANGE);
        let want = reference(&input);
        for (k, (&got, &expect)) in output.iter().zip(&want).enumerate() {
            let diff = (f64::from(got) - expect).abs();
            assert!(
                diff <= tolerance,
                "{:?} output {}: {} vs {:.3} (off by {:.3})",
                kind,
                k,
                got,
                expect,
                diff
            );
        }
    }
}

#[test]
fn forward_dct_tracks_the_cosine_basis() {
    assert_tracks_reference(TxfmType::Dct4, reference_dct, 2.0, 500);
    assert_tracks_reference(TxfmType::Dct8, reference_dct, 3.0, 500);
    assert_tracks_reference(TxfmType::Dct16, reference_dct, 4.0, 300);
    assert_tracks_reference(TxfmType::Dct32, reference_dct, 6.0, 200);
}

#[test]
fn forward_adst_tracks_the_sine_basis() {
    assert_tracks_reference(TxfmType::Adst4, reference_adst, 3.0, 500);
    assert_tracks_reference(TxfmType::Adst8, reference_adst, 5.0, 500);
    assert_tracks_reference(TxfmType::Adst16, reference_adst, 7.0, 300);
    assert_tracks_reference(TxfmType::Adst32, reference_adst, 9.0, 200);
}

#[test]
fn inverse_undoes_forward_up_to_the_lattice_gain() {
    // A forward/inverse pair amplifies by N/2 with no intermediate shifts.
    let kinds = [
        TxfmType::Dct4,
        TxfmType::Dct8,
        TxfmType::Dct16,
        TxfmType::Dct32,
        TxfmType::Adst4,
        TxfmType::Adst8,
        TxfmType::Adst16,
        TxfmType::Adst32,
    ];
    let mut rng = rand::thread_rng();
    for kind in kinds {
        let n = kind.size();
        let gain = (n / 2) as i32;
        let tolerance = n as i32;
        let mut mid = vec![0i32; n];
        let mut out = vec![0i32; n];
        for _ in 0..200 {
            let input = random_line(&mut rng, n);
            fwd_txfm1d(kind, &input, &mut mid, &COS_BIT, &STAGE_RANGE);
            inv_txfm1d(kind, &mid, &mut out, &COS_BIT, &STAGE_RANGE);
            for (&x, &y) in input.iter().zip(&out) {
                assert!(
                    (y - x * gain).abs() <= tolerance,
                    "{:?}: {} came back as {} (gain {})",
                    kind,
                    x,
                    y,
                    gain
                );
            }
        }
    }
}

#[test]
fn zero_input_stays_zero_in_every_kernel() {
    let kinds = [
        TxfmType::Dct4,
        TxfmType::Dct8,
        TxfmType::Dct16,
        TxfmType::Dct32,
        TxfmType::Adst4,
        TxfmType::Adst8,
        TxfmType::Adst16,
        TxfmType::Adst32,
    ];
    for kind in kinds {
        let n = kind.size();
        let input = vec![0i32; n];
        let mut output = vec![-1i32; n];
        fwd_txfm1d(kind, &input, &mut output, &COS_BIT, &STAGE_RANGE);
        assert!(output.iter().all(|&v| v == 0), "{:?} forward", kind);
        output.fill(-1);
        inv_txfm1d(kind, &input, &mut output, &COS_BIT, &STAGE_RANGE);
        assert!(output.iter().all(|&v| v == 0), "{:?} inverse", kind);
    }
}
