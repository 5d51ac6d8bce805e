//! 2-D block transforms built from the 1-D kernel pairs.
//!
//! The forward direction runs the column kernel over every column, stores the
//! intermediate block, then runs the row kernel over every row. Rounding
//! shifts between the passes keep values inside the per-stage range budgets
//! of the active configuration. The inverse direction mirrors this (rows
//! first, then columns) and accumulates the reconstruction into the caller's
//! pixel buffer rather than overwriting it.
//!
//! The flipped ADST variants reuse the unflipped kernels: the forward pass
//! reads the input block mirrored, the inverse pass mirrors where results
//! land in the destination.

use crate::butterfly::round_shift_array;
use crate::cfg::{fwd_txfm_cfg, inv_txfm_cfg, TxSize, TxType, Txfm2dFlipCfg};
use crate::cospi::MAX_TXFM_SIZE;
use crate::fwd1d::fwd_txfm1d;
use crate::inv1d::inv_txfm1d;

#[cfg(feature = "multiverse")]
use multiversed::multiversed;

/// Forward 2-D transform of one square block.
///
/// `input` is a raster of spatial samples with row pitch `stride`; `coeffs`
/// receives the dense `size * size` coefficient block, vertical frequency
/// major. The block must fit both buffers.
pub fn fwd_txfm2d(
    input: &[i16],
    stride: usize,
    coeffs: &mut [i32],
    tx_type: TxType,
    tx_size: TxSize,
) {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if tx_type == TxType::DctDct && tx_size == TxSize::X4 {
            return crate::txfm_simd::fwd_dct_dct_4(input, stride, coeffs);
        }
    }
    fwd_txfm2d_scalar(input, stride, coeffs, &fwd_txfm_cfg(tx_type, tx_size));
}

/// Inverse 2-D transform of one square block, added to the reconstruction.
///
/// `coeffs` holds the dense `size * size` coefficient block produced by
/// [`fwd_txfm2d`]; the inverse result is accumulated into `output` (row pitch
/// `stride`) on top of whatever prediction is already there.
pub fn inv_txfm2d_add(
    coeffs: &[i32],
    output: &mut [i16],
    stride: usize,
    tx_type: TxType,
    tx_size: TxSize,
) {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        if tx_type == TxType::DctDct && tx_size == TxSize::X4 {
            return crate::txfm_simd::inv_dct_dct_4_add(coeffs, output, stride);
        }
    }
    inv_txfm2d_add_scalar(coeffs, output, stride, &inv_txfm_cfg(tx_type, tx_size));
}

#[cfg_attr(feature = "multiverse", multiversed)]
pub(crate) fn fwd_txfm2d_scalar(
    input: &[i16],
    stride: usize,
    coeffs: &mut [i32],
    flip: &Txfm2dFlipCfg,
) {
    let cfg = flip.cfg;
    let n = cfg.txfm_size;
    assert!(stride >= n && input.len() >= (n - 1) * stride + n);
    assert!(coeffs.len() >= n * n);

    let mut buf = [0i32; MAX_TXFM_SIZE * MAX_TXFM_SIZE];
    let mut temp_in = [0i32; MAX_TXFM_SIZE];
    let mut temp_out = [0i32; MAX_TXFM_SIZE];

    // Columns. The flipped variants gather the block mirrored instead of
    // flipping a copy of it first; the kernels themselves never flip.
    for i in 0..n {
        let col = if flip.lr_flip { n - 1 - i } else { i };
        for j in 0..n {
            let row = if flip.ud_flip { n - 1 - j } else { j };
            temp_in[j] = i32::from(input[row * stride + col]);
        }
        round_shift_array(&mut temp_in[..n], -cfg.shift[0]);
        fwd_txfm1d(
            cfg.txfm_type_col,
            &temp_in[..n],
            &mut temp_out[..n],
            cfg.cos_bit_col,
            cfg.stage_range_col,
        );
        round_shift_array(&mut temp_out[..n], -cfg.shift[1]);
        for j in 0..n {
            buf[j * n + i] = temp_out[j];
        }
    }

    // Rows, writing each coefficient line in place.
    for i in 0..n {
        let line = &mut coeffs[i * n..i * n + n];
        fwd_txfm1d(
            cfg.txfm_type_row,
            &buf[i * n..i * n + n],
            line,
            cfg.cos_bit_row,
            cfg.stage_range_row,
        );
        round_shift_array(line, -cfg.shift[2]);
    }
}

#[cfg_attr(feature = "multiverse", multiversed)]
pub(crate) fn inv_txfm2d_add_scalar(
    coeffs: &[i32],
    output: &mut [i16],
    stride: usize,
    flip: &Txfm2dFlipCfg,
) {
    let cfg = flip.cfg;
    let n = cfg.txfm_size;
    assert!(coeffs.len() >= n * n);
    assert!(stride >= n && output.len() >= (n - 1) * stride + n);

    let mut buf = [0i32; MAX_TXFM_SIZE * MAX_TXFM_SIZE];
    let mut temp_in = [0i32; MAX_TXFM_SIZE];
    let mut temp_out = [0i32; MAX_TXFM_SIZE];

    // Rows.
    for i in 0..n {
        let line = &mut buf[i * n..i * n + n];
        inv_txfm1d(
            cfg.txfm_type_row,
            &coeffs[i * n..i * n + n],
            line,
            cfg.cos_bit_row,
            cfg.stage_range_row,
        );
        round_shift_array(line, -cfg.shift[0]);
    }

    // Columns, accumulating into the destination. The flipped variants land
    // mirrored; the addends themselves are unchanged.
    for i in 0..n {
        for j in 0..n {
            temp_in[j] = buf[j * n + i];
        }
        inv_txfm1d(
            cfg.txfm_type_col,
            &temp_in[..n],
            &mut temp_out[..n],
            cfg.cos_bit_col,
            cfg.stage_range_col,
        );
        round_shift_array(&mut temp_out[..n], -cfg.shift[1]);
        let col = if flip.lr_flip { n - 1 - i } else { i };
        for j in 0..n {
            let row = if flip.ud_flip { n - 1 - j } else { j };
            let pixel = &mut output[row * stride + col];
            *pixel = pixel.wrapping_add(temp_out[j] as i16);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_block_concentrates_into_dc() {
        let input = [64i16; 64];
        let mut coeffs = [0i32; 64];
        fwd_txfm2d(&input, 8, &mut coeffs, TxType::DctDct, TxSize::X8);

        assert!(coeffs[0] > 0, "DC should be positive, got {}", coeffs[0]);
        assert!(
            coeffs[1..].iter().all(|&v| v == 0),
            "constant input must have no AC energy: {:?}",
            &coeffs[..8]
        );
    }

    #[test]
    fn zero_coefficients_leave_reconstruction_unchanged() {
        let coeffs = [0i32; 256];
        let mut output = [0i16; 256];
        for (i, pixel) in output.iter_mut().enumerate() {
            *pixel = (i % 251) as i16 - 125;
        }
        let before = output;
        inv_txfm2d_add(&coeffs, &mut output, 16, TxType::AdstAdst, TxSize::X16);
        assert_eq!(before, output);
    }

    #[test]
    fn double_add_doubles_the_residual() {
        let mut coeffs = [0i32; 16];
        let input: [i16; 16] = [13, -9, 4, 0, 7, 7, -31, 2, 0, 5, 5, 5, -1, -1, 8, 20];
        fwd_txfm2d(&input, 4, &mut coeffs, TxType::DctAdst, TxSize::X4);

        let mut once = [0i16; 16];
        inv_txfm2d_add(&coeffs, &mut once, 4, TxType::DctAdst, TxSize::X4);
        let mut twice = [0i16; 16];
        inv_txfm2d_add(&coeffs, &mut twice, 4, TxType::DctAdst, TxSize::X4);
        inv_txfm2d_add(&coeffs, &mut twice, 4, TxType::DctAdst, TxSize::X4);

        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(2 * *a, *b);
        }
    }

    #[test]
    fn flipped_forward_matches_mirrored_input() {
        let n = 8usize;
        let mut input = [0i16; 64];
        for (i, v) in input.iter_mut().enumerate() {
            *v = ((i * 7) % 97) as i16 - 48;
        }
        let mut mirrored = [0i16; 64];
        for r in 0..n {
            for c in 0..n {
                mirrored[r * n + c] = input[(n - 1 - r) * n + (n - 1 - c)];
            }
        }

        let mut flipped_coeffs = [0i32; 64];
        fwd_txfm2d(
            &input,
            n,
            &mut flipped_coeffs,
            TxType::FlipadstFlipadst,
            TxSize::X8,
        );
        let mut plain_coeffs = [0i32; 64];
        fwd_txfm2d(&mirrored, n, &mut plain_coeffs, TxType::AdstAdst, TxSize::X8);

        assert_eq!(flipped_coeffs, plain_coeffs);
    }

    #[test]
    fn flipped_inverse_mirrors_the_destination() {
        let n = 4usize;
        let input: [i16; 16] = [9, -4, 2, 0, 1, 6, -2, 8, 3, 3, 3, 3, -7, 0, 0, 5];
        let mut coeffs = [0i32; 16];
        fwd_txfm2d(&input, n, &mut coeffs, TxType::AdstAdst, TxSize::X4);

        let mut plain = [0i16; 16];
        inv_txfm2d_add(&coeffs, &mut plain, n, TxType::AdstAdst, TxSize::X4);
        let mut flipped = [0i16; 16];
        inv_txfm2d_add(&coeffs, &mut flipped, n, TxType::FlipadstAdst, TxSize::X4);

        for r in 0..n {
            for c in 0..n {
                assert_eq!(
                    flipped[r * n + c],
                    plain[(n - 1 - r) * n + c],
                    "row {} col {} should come from the mirrored row",
                    r,
                    c
                );
            }
        }
    }
}
