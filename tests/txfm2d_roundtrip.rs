//! Round-trip and accuracy tests for the 2-D transform engine.
//!
//! Forward-transforms random residual blocks, runs the inverse back over a
//! zeroed destination, and checks the reconstruction against the original.
//! The lattice arithmetic guarantees every pixel lands within one step of
//! its source value for 10-bit residuals, across all nine transform types
//! and all four block sizes.

use rand::Rng;
use zentxfm::{fwd_txfm2d, inv_txfm2d_add, TxSize, TxType};

const ALL_TX_TYPES: [TxType; 9] = [
    TxType::DctDct,
    TxType::AdstDct,
    TxType::DctAdst,
    TxType::AdstAdst,
    TxType::FlipadstDct,
    TxType::DctFlipadst,
    TxType::FlipadstFlipadst,
    TxType::AdstFlipadst,
    TxType::FlipadstAdst,
];

const ALL_TX_SIZES: [TxSize; 4] = [TxSize::X4, TxSize::X8, TxSize::X16, TxSize::X32];

fn random_block(rng: &mut impl Rng, n: usize) -> Vec<i16> {
    (0..n * n).map(|_| rng.gen_range(-1023..=1023)).collect()
}

/// Runs `trials` forward/inverse round trips and returns the largest single
/// pixel error plus the mean absolute error across every pixel touched.
fn round_trip_error(tx_type: TxType, tx_size: TxSize, trials: usize) -> (i32, f64) {
    let n = tx_size.size();
    let mut rng = rand::thread_rng();
    let mut coeffs = vec![0i32; n * n];
    let mut max_err = 0i32;
    let mut total_err = 0f64;
    for _ in 0..trials {
        let input = random_block(&mut rng, n);
        let mut recon = vec![0i16; n * n];
        fwd_txfm2d(&input, n, &mut coeffs, tx_type, tx_size);
        inv_txfm2d_add(&coeffs, &mut recon, n, tx_type, tx_size);
        for (a, b) in input.iter().zip(&recon) {
            let err = (i32::from(*a) - i32::from(*b)).abs();
            max_err = max_err.max(err);
            total_err += f64::from(err);
        }
    }
    (max_err, total_err / (trials * n * n) as f64)
}

#[test]
fn every_combination_round_trips_within_one() {
    for tx_size in ALL_TX_SIZES {
        // Pooled across the nine types each size sees well over a thousand
        // random blocks, enough to pin the long-run mean.
        let trials = match tx_size {
            TxSize::X4 => 600,
            TxSize::X8 => 300,
            TxSize::X16 => 150,
            TxSize::X32 => 120,
        };
        let mut avg_sum = 0f64;
        for tx_type in ALL_TX_TYPES {
            let (max_err, avg_err) = round_trip_error(tx_type, tx_size, trials);
            assert!(
                max_err <= 1,
                "{:?} {:?}: pixel error {} exceeds 1",
                tx_type,
                tx_size,
                max_err
            );
            avg_sum += avg_err;
        }
        // The inverse final shift drops five or six fractional bits, so the
        // mean absolute error per pixel settles around 0.002; twice that
        // flags a systematic regression.
        let avg_err = avg_sum / ALL_TX_TYPES.len() as f64;
        assert!(
            avg_err <= 0.004,
            "{:?}: mean absolute error {} per pixel too large",
            tx_size,
            avg_err
        );
    }
}

#[test]
fn full_scale_blocks_round_trip() {
    let mut rng = rand::thread_rng();
    for tx_size in ALL_TX_SIZES {
        let n = tx_size.size();
        let mut coeffs = vec![0i32; n * n];
        for tx_type in [TxType::DctDct, TxType::AdstAdst, TxType::FlipadstFlipadst] {
            // Constant blocks at the rails, then random sign flips at the rails.
            let mut blocks = vec![vec![1023i16; n * n], vec![-1023i16; n * n]];
            blocks.push(
                (0..n * n)
                    .map(|_| if rng.gen::<bool>() { 1023 } else { -1023 })
                    .collect(),
            );
            for input in &blocks {
                let mut recon = vec![0i16; n * n];
                fwd_txfm2d(input, n, &mut coeffs, tx_type, tx_size);
                inv_txfm2d_add(&coeffs, &mut recon, n, tx_type, tx_size);
                for (a, b) in input.iter().zip(&recon) {
                    assert!(
                        (i32::from(*a) - i32::from(*b)).abs() <= 1,
                        "{:?} {:?}: {} reconstructed as {}",
                        tx_type,
                        tx_size,
                        a,
                        b
                    );
                }
            }
        }
    }
}

#[test]
fn zero_blocks_stay_zero_everywhere() {
    for tx_size in ALL_TX_SIZES {
        let n = tx_size.size();
        for tx_type in ALL_TX_TYPES {
            let input = vec![0i16; n * n];
            let mut coeffs = vec![-7i32; n * n];
            fwd_txfm2d(&input, n, &mut coeffs, tx_type, tx_size);
            assert!(
                coeffs.iter().all(|&c| c == 0),
                "{:?} {:?}: zero block produced nonzero coefficients",
                tx_type,
                tx_size
            );

            // Adding an all-zero residual must not disturb the destination.
            let pattern: Vec<i16> = (0..n * n).map(|i| i as i16 - 100).collect();
            let mut recon = pattern.clone();
            inv_txfm2d_add(&coeffs, &mut recon, n, tx_type, tx_size);
            assert_eq!(recon, pattern, "{:?} {:?}", tx_type, tx_size);
        }
    }
}

// --- Pinned coefficient blocks ---
//
// Expected values were produced by this engine and cross-checked against an
// independent evaluation of the same lattice; they pin the coefficient
// layout (row-frequency major) and every shift stage.

const PINNED_INPUT_4X4: [i16; 16] = [7, 7, 7, 7, -2, -2, -2, -2, 3, 3, 3, 3, 1, 1, 1, 1];

#[test]
fn dct_dct_4x4_matches_pinned_coefficients() {
    let mut coeffs = [0i32; 16];
    fwd_txfm2d(&PINNED_INPUT_4X4, 4, &mut coeffs, TxType::DctDct, TxSize::X4);
    // Rows are constant, so only the zero horizontal frequency survives.
    let expected = [72, 0, 0, 0, 41, 0, 0, 0, 56, 0, 0, 0, 79, 0, 0, 0];
    assert_eq!(coeffs, expected);

    let mut recon = [0i16; 16];
    inv_txfm2d_add(&coeffs, &mut recon, 4, TxType::DctDct, TxSize::X4);
    assert_eq!(recon, PINNED_INPUT_4X4);
}

#[test]
fn hybrid_4x4_matches_pinned_coefficients() {
    let mut coeffs = [0i32; 16];
    fwd_txfm2d(&PINNED_INPUT_4X4, 4, &mut coeffs, TxType::AdstDct, TxSize::X4);
    let expected = [40, 0, 0, 0, 16, 0, 0, 0, 34, 0, 0, 0, 114, 0, 0, 0];
    assert_eq!(coeffs, expected);
}

#[test]
fn flipped_4x4_matches_pinned_coefficients() {
    let mut coeffs = [0i32; 16];
    fwd_txfm2d(
        &PINNED_INPUT_4X4,
        4,
        &mut coeffs,
        TxType::FlipadstAdst,
        TxSize::X4,
    );
    let expected = [
        72, 25, 17, 14, -28, -10, -7, -6, 74, 26, 17, 15, -41, -14, -10, -8,
    ];
    assert_eq!(coeffs, expected);
}

#[test]
fn dct_dct_8x8_matches_pinned_coefficients() {
    #[rustfmt::skip]
    let input: [i16; 64] = [
        118, 68, -197, 31, -42, 478, 444, 169,
        -428, -324, -133, -197, 286, -417, -22, -494,
        332, -171, -245, 114, -207, -414, -291, 106,
        -206, -471, -64, 91, -17, 50, -377, -57,
        -250, 12, -95, -112, -263, 140, 499, 239,
        258, -333, -316, -444, -462, -326, -346, -154,
        286, 133, 285, 283, -167, 179, 172, 430,
        -354, 273, -463, 388, 10, -240, -284, -52,
    ];
    #[rustfmt::skip]
    let expected: [i32; 64] = [
        -3562, -1565, 1262, -197, 2032, 1513, -641, -1848,
        -710, -1467, -1432, 2404, -507, 791, -1, 2748,
        3104, 388, -1412, 576, -408, -1145, -3071, -1363,
        2116, -2264, 3891, 2304, -4020, 1413, 1528, 850,
        2493, -3693, -1913, 430, -2191, -979, -1328, -2973,
        4961, 472, 1541, -12, 1199, 1193, 4205, -2025,
        -2956, 2437, 3415, 1328, 2677, -40, 115, -2002,
        6389, -1542, 3488, -1291, -1464, 1219, -1106, -1613,
    ];
    let mut coeffs = [0i32; 64];
    fwd_txfm2d(&input, 8, &mut coeffs, TxType::DctDct, TxSize::X8);
    assert_eq!(coeffs, expected);

    // This particular block reconstructs exactly.
    let mut recon = [0i16; 64];
    inv_txfm2d_add(&coeffs, &mut recon, 8, TxType::DctDct, TxSize::X8);
    assert_eq!(recon, input);
}

// --- Structural properties ---

#[test]
fn wide_stride_reads_only_the_block() {
    let mut rng = rand::thread_rng();
    for tx_size in ALL_TX_SIZES {
        let n = tx_size.size();
        let stride = n + 13;
        // Fill the whole padded frame with junk, then write the block.
        let mut frame = vec![0x55AAu16 as i16; (n - 1) * stride + n];
        let block = random_block(&mut rng, n);
        for r in 0..n {
            frame[r * stride..r * stride + n].copy_from_slice(&block[r * n..r * n + n]);
        }
        let mut from_frame = vec![0i32; n * n];
        let mut from_block = vec![0i32; n * n];
        fwd_txfm2d(&frame, stride, &mut from_frame, TxType::AdstDct, tx_size);
        fwd_txfm2d(&block, n, &mut from_block, TxType::AdstDct, tx_size);
        assert_eq!(from_frame, from_block);
    }
}

#[test]
fn flipped_types_match_their_mirrored_base_type() {
    // Each flipped variant must equal its unflipped base applied to the
    // correspondingly mirrored input.
    let cases = [
        (TxType::FlipadstDct, TxType::AdstDct, true, false),
        (TxType::DctFlipadst, TxType::DctAdst, false, true),
        (TxType::FlipadstFlipadst, TxType::AdstAdst, true, true),
        (TxType::AdstFlipadst, TxType::AdstAdst, false, true),
        (TxType::FlipadstAdst, TxType::AdstAdst, true, false),
    ];
    let mut rng = rand::thread_rng();
    for tx_size in [TxSize::X4, TxSize::X16] {
        let n = tx_size.size();
        let block = random_block(&mut rng, n);
        for (flipped, base, ud, lr) in cases {
            let mut mirrored = vec![0i16; n * n];
            for r in 0..n {
                for c in 0..n {
                    let src_r = if ud { n - 1 - r } else { r };
                    let src_c = if lr { n - 1 - c } else { c };
                    mirrored[r * n + c] = block[src_r * n + src_c];
                }
            }
            let mut got = vec![0i32; n * n];
            let mut want = vec![0i32; n * n];
            fwd_txfm2d(&block, n, &mut got, flipped, tx_size);
            fwd_txfm2d(&mirrored, n, &mut want, base, tx_size);
            assert_eq!(got, want, "{:?} vs mirrored {:?} at {:?}", flipped, base, tx_size);
        }
    }
}

#[test]
fn coefficients_stay_within_size_scaled_headroom() {
    // The 2-D DC path carries the largest gain, 8n, so 10-bit residuals
    // stay below 8n * 1024 = n << 13 in every coefficient.
    let mut rng = rand::thread_rng();
    for tx_size in ALL_TX_SIZES {
        let n = tx_size.size();
        let bound = (n as i32) << 13;
        let mut coeffs = vec![0i32; n * n];
        for tx_type in ALL_TX_TYPES {
            for input in [
                vec![1023i16; n * n],
                vec![-1023i16; n * n],
                random_block(&mut rng, n),
            ] {
                fwd_txfm2d(&input, n, &mut coeffs, tx_type, tx_size);
                for &c in &coeffs {
                    assert!(
                        c.abs() < bound,
                        "{:?} {:?}: coefficient {} outside +-{}",
                        tx_type,
                        tx_size,
                        c,
                        bound
                    );
                }
            }
        }
    }
}

#[test]
fn coefficient_signs_carry_no_bias() {
    // Symmetric rounding makes the forward lattice an odd function of its
    // input, so over sign-symmetric residuals each coefficient sign is a
    // fair coin. Drift is binomial noise with sigma 1000 at a million
    // trials; one percent of the trial count sits at ten sigma.
    let trials: i64 = 1_000_000;
    let mut rng = rand::thread_rng();
    let mut balance = [0i64; 16];
    let mut input = [0i16; 16];
    let mut coeffs = [0i32; 16];
    for _ in 0..trials {
        for v in &mut input {
            *v = rng.gen_range(-1023..=1023);
        }
        fwd_txfm2d(&input, 4, &mut coeffs, TxType::DctDct, TxSize::X4);
        for (b, &c) in balance.iter_mut().zip(&coeffs) {
            *b += i64::from(c.signum());
        }
    }
    for (i, &b) in balance.iter().enumerate() {
        assert!(
            b.abs() < trials / 100,
            "coefficient {} signs drifted by {} over {} trials",
            i,
            b,
            trials
        );
    }
}

#[test]
fn coefficient_signs_carry_no_bias_for_small_residuals() {
    // Near-zero residuals quantize coarsely and zero out most of the high
    // frequencies, so the documented band widens to ten percent.
    let trials: i64 = 1_000_000;
    let mut rng = rand::thread_rng();
    let mut balance = [0i64; 16];
    let mut input = [0i16; 16];
    let mut coeffs = [0i32; 16];
    for _ in 0..trials {
        for v in &mut input {
            *v = rng.gen_range(-15..=15);
        }
        fwd_txfm2d(&input, 4, &mut coeffs, TxType::DctDct, TxSize::X4);
        for (b, &c) in balance.iter_mut().zip(&coeffs) {
            *b += i64::from(c.signum());
        }
    }
    for (i, &b) in balance.iter().enumerate() {
        assert!(
            b.abs() < trials / 10,
            "coefficient {} signs drifted by {} over {} trials",
            i,
            b,
            trials
        );
    }
}
