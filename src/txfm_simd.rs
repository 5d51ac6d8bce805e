//! SIMD pipelines for the 4x4 DCT_DCT block transforms.
//!
//! A 4-point line fits one SSE register, so the whole block rides in four
//! registers: the column pass runs as vertical butterflies with lanes
//! spanning the columns, a transpose swaps the axes, and the row pass runs
//! the same way. Rounding matches the scalar kernels lane for lane,
//! including the away-from-zero behavior on negative values.

use core::arch::x86_64::*;

use archmage::{arcane, rite, SimdToken, X64V3Token};
use safe_unaligned_simd::x86_64 as simd_mem;

use crate::cfg::{fwd_txfm_cfg, inv_txfm_cfg, TxSize, TxType};
use crate::cospi::cospi_arr;

// dct_dct_4 stage parameters. The 4-point DCT multiplies only in its second
// stage, so one cosine bit per pass is enough; a registry test keeps these
// in sync with the configuration tables.
const FWD_SHIFT: [i8; 3] = [4, 0, -2];
const FWD_COS_BIT_COL: i8 = 15;
const FWD_COS_BIT_ROW: i8 = 14;
const INV_SHIFT: [i8; 2] = [1, -5];
const INV_COS_BIT_COL: i8 = 15;
const INV_COS_BIT_ROW: i8 = 16;

/// Forward 4x4 DCT_DCT with dispatch to the vector pipeline when available.
pub(crate) fn fwd_dct_dct_4(input: &[i16], stride: usize, coeffs: &mut [i32]) {
    if let Some(token) = X64V3Token::summon() {
        fwd_dct_dct_4_entry(token, input, stride, coeffs);
    } else {
        crate::txfm2d::fwd_txfm2d_scalar(
            input,
            stride,
            coeffs,
            &fwd_txfm_cfg(TxType::DctDct, TxSize::X4),
        );
    }
}

/// Inverse 4x4 DCT_DCT accumulate with dispatch to the vector pipeline.
pub(crate) fn inv_dct_dct_4_add(coeffs: &[i32], output: &mut [i16], stride: usize) {
    if let Some(token) = X64V3Token::summon() {
        inv_dct_dct_4_add_entry(token, coeffs, output, stride);
    } else {
        crate::txfm2d::inv_txfm2d_add_scalar(
            coeffs,
            output,
            stride,
            &inv_txfm_cfg(TxType::DctDct, TxSize::X4),
        );
    }
}

#[arcane]
fn fwd_dct_dct_4_entry(_token: X64V3Token, input: &[i16], stride: usize, coeffs: &mut [i32]) {
    fwd_dct_dct_4_x64v3(_token, input, stride, coeffs);
}

#[arcane]
fn inv_dct_dct_4_add_entry(_token: X64V3Token, coeffs: &[i32], output: &mut [i16], stride: usize) {
    inv_dct_dct_4_add_x64v3(_token, coeffs, output, stride);
}

#[rite]
fn fwd_dct_dct_4_x64v3(_token: X64V3Token, input: &[i16], stride: usize, coeffs: &mut [i32]) {
    assert!(stride >= 4 && input.len() >= 3 * stride + 4);
    assert!(coeffs.len() >= 16);

    let r0 = load_line_i16(_token, &input[0..4]);
    let r1 = load_line_i16(_token, &input[stride..stride + 4]);
    let r2 = load_line_i16(_token, &input[2 * stride..2 * stride + 4]);
    let r3 = load_line_i16(_token, &input[3 * stride..3 * stride + 4]);

    // shift[0] = 4 adds headroom before the column kernel.
    let r0 = _mm_slli_epi32(r0, 4);
    let r1 = _mm_slli_epi32(r1, 4);
    let r2 = _mm_slli_epi32(r2, 4);
    let r3 = _mm_slli_epi32(r3, 4);

    // Column pass, lanes spanning the four columns. shift[1] is zero, so
    // the intermediate goes straight into the row pass.
    let (c0, c1, c2, c3) = fdct4_vec(_token, r0, r1, r2, r3, FWD_COS_BIT_COL);
    let (t0, t1, t2, t3) = transpose_4x4(_token, c0, c1, c2, c3);

    // Row pass, lanes spanning the four rows.
    let (u0, u1, u2, u3) = fdct4_vec(_token, t0, t1, t2, t3, FWD_COS_BIT_ROW);

    // shift[2] = -2 rounds down to coefficient scale.
    let u0 = round_shift_vec(_token, u0, 2);
    let u1 = round_shift_vec(_token, u1, 2);
    let u2 = round_shift_vec(_token, u2, 2);
    let u3 = round_shift_vec(_token, u3, 2);

    let (w0, w1, w2, w3) = transpose_4x4(_token, u0, u1, u2, u3);
    simd_mem::_mm_storeu_si128(<&mut [i32; 4]>::try_from(&mut coeffs[0..4]).unwrap(), w0);
    simd_mem::_mm_storeu_si128(<&mut [i32; 4]>::try_from(&mut coeffs[4..8]).unwrap(), w1);
    simd_mem::_mm_storeu_si128(<&mut [i32; 4]>::try_from(&mut coeffs[8..12]).unwrap(), w2);
    simd_mem::_mm_storeu_si128(<&mut [i32; 4]>::try_from(&mut coeffs[12..16]).unwrap(), w3);
}

#[rite]
fn inv_dct_dct_4_add_x64v3(_token: X64V3Token, coeffs: &[i32], output: &mut [i16], stride: usize) {
    assert!(coeffs.len() >= 16);
    assert!(stride >= 4 && output.len() >= 3 * stride + 4);

    let r0 = simd_mem::_mm_loadu_si128(<&[i32; 4]>::try_from(&coeffs[0..4]).unwrap());
    let r1 = simd_mem::_mm_loadu_si128(<&[i32; 4]>::try_from(&coeffs[4..8]).unwrap());
    let r2 = simd_mem::_mm_loadu_si128(<&[i32; 4]>::try_from(&coeffs[8..12]).unwrap());
    let r3 = simd_mem::_mm_loadu_si128(<&[i32; 4]>::try_from(&coeffs[12..16]).unwrap());

    // Row pass on each coefficient line; transpose so lanes span the rows.
    let (t0, t1, t2, t3) = transpose_4x4(_token, r0, r1, r2, r3);
    let (u0, u1, u2, u3) = idct4_vec(_token, t0, t1, t2, t3, INV_COS_BIT_ROW);

    // shift[0] = 1 scales the intermediate up.
    let u0 = _mm_slli_epi32(u0, 1);
    let u1 = _mm_slli_epi32(u1, 1);
    let u2 = _mm_slli_epi32(u2, 1);
    let u3 = _mm_slli_epi32(u3, 1);

    // Column pass; transpose back so lanes span the columns.
    let (v0, v1, v2, v3) = transpose_4x4(_token, u0, u1, u2, u3);
    let (w0, w1, w2, w3) = idct4_vec(_token, v0, v1, v2, v3, INV_COS_BIT_COL);

    // shift[1] = -5 rounds down to pixel scale.
    let w0 = round_shift_vec(_token, w0, 5);
    let w1 = round_shift_vec(_token, w1, 5);
    let w2 = round_shift_vec(_token, w2, 5);
    let w3 = round_shift_vec(_token, w3, 5);

    let mut residual = [0i32; 16];
    simd_mem::_mm_storeu_si128(<&mut [i32; 4]>::try_from(&mut residual[0..4]).unwrap(), w0);
    simd_mem::_mm_storeu_si128(<&mut [i32; 4]>::try_from(&mut residual[4..8]).unwrap(), w1);
    simd_mem::_mm_storeu_si128(<&mut [i32; 4]>::try_from(&mut residual[8..12]).unwrap(), w2);
    simd_mem::_mm_storeu_si128(
        <&mut [i32; 4]>::try_from(&mut residual[12..16]).unwrap(),
        w3,
    );

    for r in 0..4 {
        for c in 0..4 {
            let pixel = &mut output[r * stride + c];
            *pixel = pixel.wrapping_add(residual[r * 4 + c] as i16);
        }
    }
}

/// One 4-point forward DCT stage sequence across four lanes.
#[rite]
fn fdct4_vec(
    _token: X64V3Token,
    in0: __m128i,
    in1: __m128i,
    in2: __m128i,
    in3: __m128i,
    cos_bit: i8,
) -> (__m128i, __m128i, __m128i, __m128i) {
    let cospi = cospi_arr(cos_bit);
    let bit = i32::from(cos_bit);

    // stage 1
    let s0 = _mm_add_epi32(in0, in3);
    let s1 = _mm_add_epi32(in1, in2);
    let s2 = _mm_sub_epi32(in1, in2);
    let s3 = _mm_sub_epi32(in0, in3);

    // stage 2
    let t0 = half_btf_vec(_token, cospi[32], s0, cospi[32], s1, bit);
    let t1 = half_btf_vec(_token, -cospi[32], s1, cospi[32], s0, bit);
    let t2 = half_btf_vec(_token, cospi[48], s2, cospi[16], s3, bit);
    let t3 = half_btf_vec(_token, cospi[48], s3, -cospi[16], s2, bit);

    // stage 3 reorders into frequency order.
    (t0, t2, t1, t3)
}

/// One 4-point inverse DCT stage sequence across four lanes.
#[rite]
fn idct4_vec(
    _token: X64V3Token,
    in0: __m128i,
    in1: __m128i,
    in2: __m128i,
    in3: __m128i,
    cos_bit: i8,
) -> (__m128i, __m128i, __m128i, __m128i) {
    let cospi = cospi_arr(cos_bit);
    let bit = i32::from(cos_bit);

    // stage 1 permutes even coefficients ahead of the odd ones, folded into
    // the stage 2 operand order here.
    let s0 = half_btf_vec(_token, cospi[32], in0, cospi[32], in2, bit);
    let s1 = half_btf_vec(_token, cospi[32], in0, -cospi[32], in2, bit);
    let s2 = half_btf_vec(_token, cospi[48], in1, -cospi[16], in3, bit);
    let s3 = half_btf_vec(_token, cospi[16], in1, cospi[48], in3, bit);

    // stage 3
    (
        _mm_add_epi32(s0, s3),
        _mm_add_epi32(s1, s2),
        _mm_sub_epi32(s1, s2),
        _mm_sub_epi32(s0, s3),
    )
}

/// `(w0 * in0 + w1 * in1) >> bit` on all lanes, rounding away from zero.
#[rite]
fn half_btf_vec(
    _token: X64V3Token,
    w0: i32,
    in0: __m128i,
    w1: i32,
    in1: __m128i,
    bit: i32,
) -> __m128i {
    let t0 = _mm_mullo_epi32(_mm_set1_epi32(w0), in0);
    let t1 = _mm_mullo_epi32(_mm_set1_epi32(w1), in1);
    round_shift_vec(_token, _mm_add_epi32(t0, t1), bit)
}

/// Lane-wise symmetric rounding shift: negative lanes round away from zero
/// like the scalar path, not towards negative infinity.
#[rite]
fn round_shift_vec(_token: X64V3Token, v: __m128i, bit: i32) -> __m128i {
    let sign = _mm_srai_epi32(v, 31);
    let magnitude = _mm_sub_epi32(_mm_xor_si128(v, sign), sign);
    let half = _mm_set1_epi32(1 << (bit - 1));
    let count = _mm_cvtsi32_si128(bit);
    let rounded = _mm_srl_epi32(_mm_add_epi32(magnitude, half), count);
    _mm_sub_epi32(_mm_xor_si128(rounded, sign), sign)
}

#[rite]
fn transpose_4x4(
    _token: X64V3Token,
    r0: __m128i,
    r1: __m128i,
    r2: __m128i,
    r3: __m128i,
) -> (__m128i, __m128i, __m128i, __m128i) {
    let t0 = _mm_unpacklo_epi32(r0, r1);
    let t1 = _mm_unpackhi_epi32(r0, r1);
    let t2 = _mm_unpacklo_epi32(r2, r3);
    let t3 = _mm_unpackhi_epi32(r2, r3);
    (
        _mm_unpacklo_epi64(t0, t2),
        _mm_unpackhi_epi64(t0, t2),
        _mm_unpacklo_epi64(t1, t3),
        _mm_unpackhi_epi64(t1, t3),
    )
}

#[rite]
fn load_line_i16(_token: X64V3Token, line: &[i16]) -> __m128i {
    _mm_set_epi32(
        i32::from(line[3]),
        i32::from(line[2]),
        i32::from(line[1]),
        i32::from(line[0]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_constants_match_registry() {
        let fwd = fwd_txfm_cfg(TxType::DctDct, TxSize::X4).cfg;
        assert_eq!(fwd.shift, &FWD_SHIFT);
        assert_eq!(fwd.cos_bit_col[2], FWD_COS_BIT_COL);
        assert_eq!(fwd.cos_bit_row[2], FWD_COS_BIT_ROW);

        let inv = inv_txfm_cfg(TxType::DctDct, TxSize::X4).cfg;
        assert_eq!(inv.shift, &INV_SHIFT);
        assert_eq!(inv.cos_bit_col[2], INV_COS_BIT_COL);
        assert_eq!(inv.cos_bit_row[2], INV_COS_BIT_ROW);
    }

    #[test]
    fn forward_matches_scalar() {
        let input: [i16; 16] = [
            38, -6, 210, 107, -42, 125, 185, -151, 241, 224, -125, 233, 227, -8, 57, 96,
        ];

        let mut simd_coeffs = [0i32; 16];
        fwd_dct_dct_4(&input, 4, &mut simd_coeffs);

        let mut scalar_coeffs = [0i32; 16];
        crate::txfm2d::fwd_txfm2d_scalar(
            &input,
            4,
            &mut scalar_coeffs,
            &fwd_txfm_cfg(TxType::DctDct, TxSize::X4),
        );

        assert_eq!(
            simd_coeffs, scalar_coeffs,
            "vector forward diverges from scalar.\nvector: {:?}\nscalar: {:?}",
            simd_coeffs, scalar_coeffs
        );
    }

    #[test]
    fn forward_matches_scalar_with_wide_stride() {
        const STRIDE: usize = 11;
        let mut input = [0i16; 3 * STRIDE + 4];
        for (i, v) in input.iter_mut().enumerate() {
            *v = ((i as i16) * 13) % 512 - 255;
        }

        let mut simd_coeffs = [0i32; 16];
        fwd_dct_dct_4(&input, STRIDE, &mut simd_coeffs);

        let mut scalar_coeffs = [0i32; 16];
        crate::txfm2d::fwd_txfm2d_scalar(
            &input,
            STRIDE,
            &mut scalar_coeffs,
            &fwd_txfm_cfg(TxType::DctDct, TxSize::X4),
        );

        assert_eq!(simd_coeffs, scalar_coeffs);
    }

    #[test]
    fn inverse_matches_scalar() {
        let input: [i16; 16] = [
            -33, 17, -255, 80, 511, -128, 3, 9, -77, 41, 2, -2, 130, -511, 63, -1,
        ];
        let mut coeffs = [0i32; 16];
        crate::txfm2d::fwd_txfm2d_scalar(
            &input,
            4,
            &mut coeffs,
            &fwd_txfm_cfg(TxType::DctDct, TxSize::X4),
        );

        // Accumulate on top of a nonzero base to cover the add path.
        let base: [i16; 16] = [5, -5, 5, -5, 100, 0, -100, 0, 1, 2, 3, 4, -4, -3, -2, -1];

        let mut simd_out = base;
        inv_dct_dct_4_add(&coeffs, &mut simd_out, 4);

        let mut scalar_out = base;
        crate::txfm2d::inv_txfm2d_add_scalar(
            &coeffs,
            &mut scalar_out,
            4,
            &inv_txfm_cfg(TxType::DctDct, TxSize::X4),
        );

        assert_eq!(
            simd_out, scalar_out,
            "vector inverse diverges from scalar.\nvector: {:?}\nscalar: {:?}",
            simd_out, scalar_out
        );
    }

    #[test]
    fn negative_odd_magnitudes_round_identically() {
        // Odd values below zero are where floor shifts and symmetric
        // rounding part ways.
        let input: [i16; 16] = [
            -1, -3, -5, -7, -9, -11, -13, -15, -511, -509, -507, -505, -1, -1, -3, -3,
        ];

        let mut simd_coeffs = [0i32; 16];
        fwd_dct_dct_4(&input, 4, &mut simd_coeffs);
        let mut scalar_coeffs = [0i32; 16];
        crate::txfm2d::fwd_txfm2d_scalar(
            &input,
            4,
            &mut scalar_coeffs,
            &fwd_txfm_cfg(TxType::DctDct, TxSize::X4),
        );
        assert_eq!(simd_coeffs, scalar_coeffs);

        let mut simd_out = [0i16; 16];
        inv_dct_dct_4_add(&simd_coeffs, &mut simd_out, 4);
        let mut scalar_out = [0i16; 16];
        crate::txfm2d::inv_txfm2d_add_scalar(
            &scalar_coeffs,
            &mut scalar_out,
            4,
            &inv_txfm_cfg(TxType::DctDct, TxSize::X4),
        );
        assert_eq!(simd_out, scalar_out);
    }
}
