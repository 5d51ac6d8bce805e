//! Inverse 1-D transform kernels.
//!
//! Each kernel mirrors its forward counterpart: stage 1 permutes the
//! coefficient line into `output` (with sign folds for the ADST family),
//! later stages ping-pong between `output` and a stack line, and the final
//! stage leaves spatial samples in `output`. Cosine precision and value
//! headroom come from the caller's per-stage `cos_bit` and `stage_range`
//! slices; the lattice wiring is fixed.

use crate::butterfly::{half_btf, range_check};
use crate::cfg::TxfmType;
use crate::cospi::cospi_arr;

/// Runs the inverse kernel selected by `kind` over one line of coefficients.
///
/// `input` and `output` must each hold at least the kernel's point count;
/// `cos_bit` and `stage_range` must cover every stage of that kernel.
pub fn inv_txfm1d(
    kind: TxfmType,
    input: &[i32],
    output: &mut [i32],
    cos_bit: &[i8],
    stage_range: &[i8],
) {
    match kind {
        TxfmType::Dct4 => idct4(input, output, cos_bit, stage_range),
        TxfmType::Dct8 => idct8(input, output, cos_bit, stage_range),
        TxfmType::Dct16 => idct16(input, output, cos_bit, stage_range),
        TxfmType::Dct32 => idct32(input, output, cos_bit, stage_range),
        TxfmType::Adst4 => iadst4(input, output, cos_bit, stage_range),
        TxfmType::Adst8 => iadst8(input, output, cos_bit, stage_range),
        TxfmType::Adst16 => iadst16(input, output, cos_bit, stage_range),
        TxfmType::Adst32 => iadst32(input, output, cos_bit, stage_range),
    }
}

/// 4-point inverse DCT.
pub fn idct4(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    // One length check up front so the stage bodies index without rechecks.
    assert!(input.len() >= 4 && output.len() >= 4);
    assert!(cos_bit.len() >= 4 && stage_range.len() >= 4);
    let mut step = [0i32; 4];

    // stage 0
    range_check(0, &input[..4], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[2];
    output[2] = input[1];
    output[3] = input[3];
    range_check(1, &output[..4], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = half_btf(cospi[32], output[0], cospi[32], output[1], cos_bit[2]);
    step[1] = half_btf(cospi[32], output[0], -cospi[32], output[1], cos_bit[2]);
    step[2] = half_btf(cospi[48], output[2], -cospi[16], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[16], output[2], cospi[48], output[3], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[3];
    output[1] = step[1] + step[2];
    output[2] = step[1] - step[2];
    output[3] = step[0] - step[3];
    range_check(3, &output[..4], stage_range[3]);
}

/// 8-point inverse DCT.
pub fn idct8(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    assert!(input.len() >= 8 && output.len() >= 8);
    assert!(cos_bit.len() >= 6 && stage_range.len() >= 6);
    let mut step = [0i32; 8];

    // stage 0
    range_check(0, &input[..8], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[4];
    output[2] = input[2];
    output[3] = input[6];
    output[4] = input[1];
    output[5] = input[5];
    output[6] = input[3];
    output[7] = input[7];
    range_check(1, &output[..8], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = half_btf(cospi[56], output[4], -cospi[8], output[7], cos_bit[2]);
    step[5] = half_btf(cospi[24], output[5], -cospi[40], output[6], cos_bit[2]);
    step[6] = half_btf(cospi[40], output[5], cospi[24], output[6], cos_bit[2]);
    step[7] = half_btf(cospi[8], output[4], cospi[56], output[7], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    let cospi = cospi_arr(cos_bit[3]);
    output[0] = half_btf(cospi[32], step[0], cospi[32], step[1], cos_bit[3]);
    output[1] = half_btf(cospi[32], step[0], -cospi[32], step[1], cos_bit[3]);
    output[2] = half_btf(cospi[48], step[2], -cospi[16], step[3], cos_bit[3]);
    output[3] = half_btf(cospi[16], step[2], cospi[48], step[3], cos_bit[3]);
    output[4] = step[4] + step[5];
    output[5] = step[4] - step[5];
    output[6] = -step[6] + step[7];
    output[7] = step[6] + step[7];
    range_check(3, &output[..8], stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = output[0] + output[3];
    step[1] = output[1] + output[2];
    step[2] = output[1] - output[2];
    step[3] = output[0] - output[3];
    step[4] = output[4];
    step[5] = half_btf(-cospi[32], output[5], cospi[32], output[6], cos_bit[4]);
    step[6] = half_btf(cospi[32], output[5], cospi[32], output[6], cos_bit[4]);
    step[7] = output[7];
    range_check(4, &step, stage_range[4]);

    // stage 5
    output[0] = step[0] + step[7];
    output[1] = step[1] + step[6];
    output[2] = step[2] + step[5];
    output[3] = step[3] + step[4];
    output[4] = step[3] - step[4];
    output[5] = step[2] - step[5];
    output[6] = step[1] - step[6];
    output[7] = step[0] - step[7];
    range_check(5, &output[..8], stage_range[5]);
}

/// 16-point inverse DCT.
pub fn idct16(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    assert!(input.len() >= 16 && output.len() >= 16);
    assert!(cos_bit.len() >= 8 && stage_range.len() >= 8);
    let mut step = [0i32; 16];

    // stage 0
    range_check(0, &input[..16], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[8];
    output[2] = input[4];
    output[3] = input[12];
    output[4] = input[2];
    output[5] = input[10];
    output[6] = input[6];
    output[7] = input[14];
    output[8] = input[1];
    output[9] = input[9];
    output[10] = input[5];
    output[11] = input[13];
    output[12] = input[3];
    output[13] = input[11];
    output[14] = input[7];
    output[15] = input[15];
    range_check(1, &output[..16], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = output[4];
    step[5] = output[5];
    step[6] = output[6];
    step[7] = output[7];
    step[8] = half_btf(cospi[60], output[8], -cospi[4], output[15], cos_bit[2]);
    step[9] = half_btf(cospi[28], output[9], -cospi[36], output[14], cos_bit[2]);
    step[10] = half_btf(cospi[44], output[10], -cospi[20], output[13], cos_bit[2]);
    step[11] = half_btf(cospi[12], output[11], -cospi[52], output[12], cos_bit[2]);
    step[12] = half_btf(cospi[52], output[11], cospi[12], output[12], cos_bit[2]);
    step[13] = half_btf(cospi[20], output[10], cospi[44], output[13], cos_bit[2]);
    step[14] = half_btf(cospi[36], output[9], cospi[28], output[14], cos_bit[2]);
    step[15] = half_btf(cospi[4], output[8], cospi[60], output[15], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    let cospi = cospi_arr(cos_bit[3]);
    output[0] = step[0];
    output[1] = step[1];
    output[2] = step[2];
    output[3] = step[3];
    output[4] = half_btf(cospi[56], step[4], -cospi[8], step[7], cos_bit[3]);
    output[5] = half_btf(cospi[24], step[5], -cospi[40], step[6], cos_bit[3]);
    output[6] = half_btf(cospi[40], step[5], cospi[24], step[6], cos_bit[3]);
    output[7] = half_btf(cospi[8], step[4], cospi[56], step[7], cos_bit[3]);
    output[8] = step[8] + step[9];
    output[9] = step[8] - step[9];
    output[10] = -step[10] + step[11];
    output[11] = step[10] + step[11];
    output[12] = step[12] + step[13];
    output[13] = step[12] - step[13];
    output[14] = -step[14] + step[15];
    output[15] = step[14] + step[15];
    range_check(3, &output[..16], stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = half_btf(cospi[32], output[0], cospi[32], output[1], cos_bit[4]);
    step[1] = half_btf(cospi[32], output[0], -cospi[32], output[1], cos_bit[4]);
    step[2] = half_btf(cospi[48], output[2], -cospi[16], output[3], cos_bit[4]);
    step[3] = half_btf(cospi[16], output[2], cospi[48], output[3], cos_bit[4]);
    step[4] = output[4] + output[5];
    step[5] = output[4] - output[5];
    step[6] = -output[6] + output[7];
    step[7] = output[6] + output[7];
    step[8] = output[8];
    step[9] = half_btf(-cospi[16], output[9], cospi[48], output[14], cos_bit[4]);
    step[10] = half_btf(-cospi[48], output[10], -cospi[16], output[13], cos_bit[4]);
    step[11] = output[11];
    step[12] = output[12];
    step[13] = half_btf(-cospi[16], output[10], cospi[48], output[13], cos_bit[4]);
    step[14] = half_btf(cospi[48], output[9], cospi[16], output[14], cos_bit[4]);
    step[15] = output[15];
    range_check(4, &step, stage_range[4]);

    // stage 5
    let cospi = cospi_arr(cos_bit[5]);
    output[0] = step[0] + step[3];
    output[1] = step[1] + step[2];
    output[2] = step[1] - step[2];
    output[3] = step[0] - step[3];
    output[4] = step[4];
    output[5] = half_btf(-cospi[32], step[5], cospi[32], step[6], cos_bit[5]);
    output[6] = half_btf(cospi[32], step[5], cospi[32], step[6], cos_bit[5]);
    output[7] = step[7];
    output[8] = step[8] + step[11];
    output[9] = step[9] + step[10];
    output[10] = step[9] - step[10];
    output[11] = step[8] - step[11];
    output[12] = -step[12] + step[15];
    output[13] = -step[13] + step[14];
    output[14] = step[13] + step[14];
    output[15] = step[12] + step[15];
    range_check(5, &output[..16], stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = output[0] + output[7];
    step[1] = output[1] + output[6];
    step[2] = output[2] + output[5];
    step[3] = output[3] + output[4];
    step[4] = output[3] - output[4];
    step[5] = output[2] - output[5];
    step[6] = output[1] - output[6];
    step[7] = output[0] - output[7];
    step[8] = output[8];
    step[9] = output[9];
    step[10] = half_btf(-cospi[32], output[10], cospi[32], output[13], cos_bit[6]);
    step[11] = half_btf(-cospi[32], output[11], cospi[32], output[12], cos_bit[6]);
    step[12] = half_btf(cospi[32], output[11], cospi[32], output[12], cos_bit[6]);
    step[13] = half_btf(cospi[32], output[10], cospi[32], output[13], cos_bit[6]);
    step[14] = output[14];
    step[15] = output[15];
    range_check(6, &step, stage_range[6]);

    // stage 7
    output[0] = step[0] + step[15];
    output[1] = step[1] + step[14];
    output[2] = step[2] + step[13];
    output[3] = step[3] + step[12];
    output[4] = step[4] + step[11];
    output[5] = step[5] + step[10];
    output[6] = step[6] + step[9];
    output[7] = step[7] + step[8];
    output[8] = step[7] - step[8];
    output[9] = step[6] - step[9];
    output[10] = step[5] - step[10];
    output[11] = step[4] - step[11];
    output[12] = step[3] - step[12];
    output[13] = step[2] - step[13];
    output[14] = step[1] - step[14];
    output[15] = step[0] - step[15];
    range_check(7, &output[..16], stage_range[7]);
}

/// 32-point inverse DCT.
pub fn idct32(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    assert!(input.len() >= 32 && output.len() >= 32);
    assert!(cos_bit.len() >= 10 && stage_range.len() >= 10);
    let mut step = [0i32; 32];

    // stage 0
    range_check(0, &input[..32], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = input[16];
    output[2] = input[8];
    output[3] = input[24];
    output[4] = input[4];
    output[5] = input[20];
    output[6] = input[12];
    output[7] = input[28];
    output[8] = input[2];
    output[9] = input[18];
    output[10] = input[10];
    output[11] = input[26];
    output[12] = input[6];
    output[13] = input[22];
    output[14] = input[14];
    output[15] = input[30];
    output[16] = input[1];
    output[17] = input[17];
    output[18] = input[9];
    output[19] = input[25];
    output[20] = input[5];
    output[21] = input[21];
    output[22] = input[13];
    output[23] = input[29];
    output[24] = input[3];
    output[25] = input[19];
    output[26] = input[11];
    output[27] = input[27];
    output[28] = input[7];
    output[29] = input[23];
    output[30] = input[15];
    output[31] = input[31];
    range_check(1, &output[..32], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = output[4];
    step[5] = output[5];
    step[6] = output[6];
    step[7] = output[7];
    step[8] = output[8];
    step[9] = output[9];
    step[10] = output[10];
    step[11] = output[11];
    step[12] = output[12];
    step[13] = output[13];
    step[14] = output[14];
    step[15] = output[15];
    step[16] = half_btf(cospi[62], output[16], -cospi[2], output[31], cos_bit[2]);
    step[17] = half_btf(cospi[30], output[17], -cospi[34], output[30], cos_bit[2]);
    step[18] = half_btf(cospi[46], output[18], -cospi[18], output[29], cos_bit[2]);
    step[19] = half_btf(cospi[14], output[19], -cospi[50], output[28], cos_bit[2]);
    step[20] = half_btf(cospi[54], output[20], -cospi[10], output[27], cos_bit[2]);
    step[21] = half_btf(cospi[22], output[21], -cospi[42], output[26], cos_bit[2]);
    step[22] = half_btf(cospi[38], output[22], -cospi[26], output[25], cos_bit[2]);
    step[23] = half_btf(cospi[6], output[23], -cospi[58], output[24], cos_bit[2]);
    step[24] = half_btf(cospi[58], output[23], cospi[6], output[24], cos_bit[2]);
    step[25] = half_btf(cospi[26], output[22], cospi[38], output[25], cos_bit[2]);
    step[26] = half_btf(cospi[42], output[21], cospi[22], output[26], cos_bit[2]);
    step[27] = half_btf(cospi[10], output[20], cospi[54], output[27], cos_bit[2]);
    step[28] = half_btf(cospi[50], output[19], cospi[14], output[28], cos_bit[2]);
    step[29] = half_btf(cospi[18], output[18], cospi[46], output[29], cos_bit[2]);
    step[30] = half_btf(cospi[34], output[17], cospi[30], output[30], cos_bit[2]);
    step[31] = half_btf(cospi[2], output[16], cospi[62], output[31], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    let cospi = cospi_arr(cos_bit[3]);
    output[0] = step[0];
    output[1] = step[1];
    output[2] = step[2];
    output[3] = step[3];
    output[4] = step[4];
    output[5] = step[5];
    output[6] = step[6];
    output[7] = step[7];
    output[8] = half_btf(cospi[60], step[8], -cospi[4], step[15], cos_bit[3]);
    output[9] = half_btf(cospi[28], step[9], -cospi[36], step[14], cos_bit[3]);
    output[10] = half_btf(cospi[44], step[10], -cospi[20], step[13], cos_bit[3]);
    output[11] = half_btf(cospi[12], step[11], -cospi[52], step[12], cos_bit[3]);
    output[12] = half_btf(cospi[52], step[11], cospi[12], step[12], cos_bit[3]);
    output[13] = half_btf(cospi[20], step[10], cospi[44], step[13], cos_bit[3]);
    output[14] = half_btf(cospi[36], step[9], cospi[28], step[14], cos_bit[3]);
    output[15] = half_btf(cospi[4], step[8], cospi[60], step[15], cos_bit[3]);
    output[16] = step[16] + step[17];
    output[17] = step[16] - step[17];
    output[18] = -step[18] + step[19];
    output[19] = step[18] + step[19];
    output[20] = step[20] + step[21];
    output[21] = step[20] - step[21];
    output[22] = -step[22] + step[23];
    output[23] = step[22] + step[23];
    output[24] = step[24] + step[25];
    output[25] = step[24] - step[25];
    output[26] = -step[26] + step[27];
    output[27] = step[26] + step[27];
    output[28] = step[28] + step[29];
    output[29] = step[28] - step[29];
    output[30] = -step[30] + step[31];
    output[31] = step[30] + step[31];
    range_check(3, &output[..32], stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = half_btf(cospi[56], output[4], -cospi[8], output[7], cos_bit[4]);
    step[5] = half_btf(cospi[24], output[5], -cospi[40], output[6], cos_bit[4]);
    step[6] = half_btf(cospi[40], output[5], cospi[24], output[6], cos_bit[4]);
    step[7] = half_btf(cospi[8], output[4], cospi[56], output[7], cos_bit[4]);
    step[8] = output[8] + output[9];
    step[9] = output[8] - output[9];
    step[10] = -output[10] + output[11];
    step[11] = output[10] + output[11];
    step[12] = output[12] + output[13];
    step[13] = output[12] - output[13];
    step[14] = -output[14] + output[15];
    step[15] = output[14] + output[15];
    step[16] = output[16];
    step[17] = half_btf(-cospi[8], output[17], cospi[56], output[30], cos_bit[4]);
    step[18] = half_btf(-cospi[56], output[18], -cospi[8], output[29], cos_bit[4]);
    step[19] = output[19];
    step[20] = output[20];
    step[21] = half_btf(-cospi[40], output[21], cospi[24], output[26], cos_bit[4]);
    step[22] = half_btf(-cospi[24], output[22], -cospi[40], output[25], cos_bit[4]);
    step[23] = output[23];
    step[24] = output[24];
    step[25] = half_btf(-cospi[40], output[22], cospi[24], output[25], cos_bit[4]);
    step[26] = half_btf(cospi[24], output[21], cospi[40], output[26], cos_bit[4]);
    step[27] = output[27];
    step[28] = output[28];
    step[29] = half_btf(-cospi[8], output[18], cospi[56], output[29], cos_bit[4]);
    step[30] = half_btf(cospi[56], output[17], cospi[8], output[30], cos_bit[4]);
    step[31] = output[31];
    range_check(4, &step, stage_range[4]);

    // stage 5
    let cospi = cospi_arr(cos_bit[5]);
    output[0] = half_btf(cospi[32], step[0], cospi[32], step[1], cos_bit[5]);
    output[1] = half_btf(cospi[32], step[0], -cospi[32], step[1], cos_bit[5]);
    output[2] = half_btf(cospi[48], step[2], -cospi[16], step[3], cos_bit[5]);
    output[3] = half_btf(cospi[16], step[2], cospi[48], step[3], cos_bit[5]);
    output[4] = step[4] + step[5];
    output[5] = step[4] - step[5];
    output[6] = -step[6] + step[7];
    output[7] = step[6] + step[7];
    output[8] = step[8];
    output[9] = half_btf(-cospi[16], step[9], cospi[48], step[14], cos_bit[5]);
    output[10] = half_btf(-cospi[48], step[10], -cospi[16], step[13], cos_bit[5]);
    output[11] = step[11];
    output[12] = step[12];
    output[13] = half_btf(-cospi[16], step[10], cospi[48], step[13], cos_bit[5]);
    output[14] = half_btf(cospi[48], step[9], cospi[16], step[14], cos_bit[5]);
    output[15] = step[15];
    output[16] = step[16] + step[19];
    output[17] = step[17] + step[18];
    output[18] = step[17] - step[18];
    output[19] = step[16] - step[19];
    output[20] = -step[20] + step[23];
    output[21] = -step[21] + step[22];
    output[22] = step[21] + step[22];
    output[23] = step[20] + step[23];
    output[24] = step[24] + step[27];
    output[25] = step[25] + step[26];
    output[26] = step[25] - step[26];
    output[27] = step[24] - step[27];
    output[28] = -step[28] + step[31];
    output[29] = -step[29] + step[30];
    output[30] = step[29] + step[30];
    output[31] = step[28] + step[31];
    range_check(5, &output[..32], stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = output[0] + output[3];
    step[1] = output[1] + output[2];
    step[2] = output[1] - output[2];
    step[3] = output[0] - output[3];
    step[4] = output[4];
    step[5] = half_btf(-cospi[32], output[5], cospi[32], output[6], cos_bit[6]);
    step[6] = half_btf(cospi[32], output[5], cospi[32], output[6], cos_bit[6]);
    step[7] = output[7];
    step[8] = output[8] + output[11];
    step[9] = output[9] + output[10];
    step[10] = output[9] - output[10];
    step[11] = output[8] - output[11];
    step[12] = -output[12] + output[15];
    step[13] = -output[13] + output[14];
    step[14] = output[13] + output[14];
    step[15] = output[12] + output[15];
    step[16] = output[16];
    step[17] = output[17];
    step[18] = half_btf(-cospi[16], output[18], cospi[48], output[29], cos_bit[6]);
    step[19] = half_btf(-cospi[16], output[19], cospi[48], output[28], cos_bit[6]);
    step[20] = half_btf(-cospi[48], output[20], -cospi[16], output[27], cos_bit[6]);
    step[21] = half_btf(-cospi[48], output[21], -cospi[16], output[26], cos_bit[6]);
    step[22] = output[22];
    step[23] = output[23];
    step[24] = output[24];
    step[25] = output[25];
    step[26] = half_btf(-cospi[16], output[21], cospi[48], output[26], cos_bit[6]);
    step[27] = half_btf(-cospi[16], output[20], cospi[48], output[27], cos_bit[6]);
    step[28] = half_btf(cospi[48], output[19], cospi[16], output[28], cos_bit[6]);
    step[29] = half_btf(cospi[48], output[18], cospi[16], output[29], cos_bit[6]);
    step[30] = output[30];
    step[31] = output[31];
    range_check(6, &step, stage_range[6]);

    // stage 7
    let cospi = cospi_arr(cos_bit[7]);
    output[0] = step[0] + step[7];
    output[1] = step[1] + step[6];
    output[2] = step[2] + step[5];
    output[3] = step[3] + step[4];
    output[4] = step[3] - step[4];
    output[5] = step[2] - step[5];
    output[6] = step[1] - step[6];
    output[7] = step[0] - step[7];
    output[8] = step[8];
    output[9] = step[9];
    output[10] = half_btf(-cospi[32], step[10], cospi[32], step[13], cos_bit[7]);
    output[11] = half_btf(-cospi[32], step[11], cospi[32], step[12], cos_bit[7]);
    output[12] = half_btf(cospi[32], step[11], cospi[32], step[12], cos_bit[7]);
    output[13] = half_btf(cospi[32], step[10], cospi[32], step[13], cos_bit[7]);
    output[14] = step[14];
    output[15] = step[15];
    output[16] = step[16] + step[23];
    output[17] = step[17] + step[22];
    output[18] = step[18] + step[21];
    output[19] = step[19] + step[20];
    output[20] = step[19] - step[20];
    output[21] = step[18] - step[21];
    output[22] = step[17] - step[22];
    output[23] = step[16] - step[23];
    output[24] = -step[24] + step[31];
    output[25] = -step[25] + step[30];
    output[26] = -step[26] + step[29];
    output[27] = -step[27] + step[28];
    output[28] = step[27] + step[28];
    output[29] = step[26] + step[29];
    output[30] = step[25] + step[30];
    output[31] = step[24] + step[31];
    range_check(7, &output[..32], stage_range[7]);

    // stage 8
    let cospi = cospi_arr(cos_bit[8]);
    step[0] = output[0] + output[15];
    step[1] = output[1] + output[14];
    step[2] = output[2] + output[13];
    step[3] = output[3] + output[12];
    step[4] = output[4] + output[11];
    step[5] = output[5] + output[10];
    step[6] = output[6] + output[9];
    step[7] = output[7] + output[8];
    step[8] = output[7] - output[8];
    step[9] = output[6] - output[9];
    step[10] = output[5] - output[10];
    step[11] = output[4] - output[11];
    step[12] = output[3] - output[12];
    step[13] = output[2] - output[13];
    step[14] = output[1] - output[14];
    step[15] = output[0] - output[15];
    step[16] = output[16];
    step[17] = output[17];
    step[18] = output[18];
    step[19] = output[19];
    step[20] = half_btf(-cospi[32], output[20], cospi[32], output[27], cos_bit[8]);
    step[21] = half_btf(-cospi[32], output[21], cospi[32], output[26], cos_bit[8]);
    step[22] = half_btf(-cospi[32], output[22], cospi[32], output[25], cos_bit[8]);
    step[23] = half_btf(-cospi[32], output[23], cospi[32], output[24], cos_bit[8]);
    step[24] = half_btf(cospi[32], output[23], cospi[32], output[24], cos_bit[8]);
    step[25] = half_btf(cospi[32], output[22], cospi[32], output[25], cos_bit[8]);
    step[26] = half_btf(cospi[32], output[21], cospi[32], output[26], cos_bit[8]);
    step[27] = half_btf(cospi[32], output[20], cospi[32], output[27], cos_bit[8]);
    step[28] = output[28];
    step[29] = output[29];
    step[30] = output[30];
    step[31] = output[31];
    range_check(8, &step, stage_range[8]);

    // stage 9
    output[0] = step[0] + step[31];
    output[1] = step[1] + step[30];
    output[2] = step[2] + step[29];
    output[3] = step[3] + step[28];
    output[4] = step[4] + step[27];
    output[5] = step[5] + step[26];
    output[6] = step[6] + step[25];
    output[7] = step[7] + step[24];
    output[8] = step[8] + step[23];
    output[9] = step[9] + step[22];
    output[10] = step[10] + step[21];
    output[11] = step[11] + step[20];
    output[12] = step[12] + step[19];
    output[13] = step[13] + step[18];
    output[14] = step[14] + step[17];
    output[15] = step[15] + step[16];
    output[16] = step[15] - step[16];
    output[17] = step[14] - step[17];
    output[18] = step[13] - step[18];
    output[19] = step[12] - step[19];
    output[20] = step[11] - step[20];
    output[21] = step[10] - step[21];
    output[22] = step[9] - step[22];
    output[23] = step[8] - step[23];
    output[24] = step[7] - step[24];
    output[25] = step[6] - step[25];
    output[26] = step[5] - step[26];
    output[27] = step[4] - step[27];
    output[28] = step[3] - step[28];
    output[29] = step[2] - step[29];
    output[30] = step[1] - step[30];
    output[31] = step[0] - step[31];
    range_check(9, &output[..32], stage_range[9]);
}

/// 4-point inverse ADST.
pub fn iadst4(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    assert!(input.len() >= 4 && output.len() >= 4);
    assert!(cos_bit.len() >= 6 && stage_range.len() >= 6);
    let mut step = [0i32; 4];

    // stage 0
    range_check(0, &input[..4], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = -input[3];
    output[2] = -input[1];
    output[3] = input[2];
    range_check(1, &output[..4], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = half_btf(cospi[32], output[2], cospi[32], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[32], output[2], -cospi[32], output[3], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[2];
    output[1] = step[1] + step[3];
    output[2] = step[0] - step[2];
    output[3] = step[1] - step[3];
    range_check(3, &output[..4], stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = half_btf(cospi[8], output[0], cospi[56], output[1], cos_bit[4]);
    step[1] = half_btf(cospi[56], output[0], -cospi[8], output[1], cos_bit[4]);
    step[2] = half_btf(cospi[40], output[2], cospi[24], output[3], cos_bit[4]);
    step[3] = half_btf(cospi[24], output[2], -cospi[40], output[3], cos_bit[4]);
    range_check(4, &step, stage_range[4]);

    // stage 5
    output[0] = step[1];
    output[1] = step[2];
    output[2] = step[3];
    output[3] = step[0];
    range_check(5, &output[..4], stage_range[5]);
}

/// 8-point inverse ADST.
pub fn iadst8(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    assert!(input.len() >= 8 && output.len() >= 8);
    assert!(cos_bit.len() >= 8 && stage_range.len() >= 8);
    let mut step = [0i32; 8];

    // stage 0
    range_check(0, &input[..8], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = -input[7];
    output[2] = -input[3];
    output[3] = input[4];
    output[4] = -input[1];
    output[5] = input[6];
    output[6] = input[2];
    output[7] = -input[5];
    range_check(1, &output[..8], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = half_btf(cospi[32], output[2], cospi[32], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[32], output[2], -cospi[32], output[3], cos_bit[2]);
    step[4] = output[4];
    step[5] = output[5];
    step[6] = half_btf(cospi[32], output[6], cospi[32], output[7], cos_bit[2]);
    step[7] = half_btf(cospi[32], output[6], -cospi[32], output[7], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[2];
    output[1] = step[1] + step[3];
    output[2] = step[0] - step[2];
    output[3] = step[1] - step[3];
    output[4] = step[4] + step[6];
    output[5] = step[5] + step[7];
    output[6] = step[4] - step[6];
    output[7] = step[5] - step[7];
    range_check(3, &output[..8], stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = half_btf(cospi[16], output[4], cospi[48], output[5], cos_bit[4]);
    step[5] = half_btf(cospi[48], output[4], -cospi[16], output[5], cos_bit[4]);
    step[6] = half_btf(-cospi[48], output[6], cospi[16], output[7], cos_bit[4]);
    step[7] = half_btf(cospi[16], output[6], cospi[48], output[7], cos_bit[4]);
    range_check(4, &step, stage_range[4]);

    // stage 5
    output[0] = step[0] + step[4];
    output[1] = step[1] + step[5];
    output[2] = step[2] + step[6];
    output[3] = step[3] + step[7];
    output[4] = step[0] - step[4];
    output[5] = step[1] - step[5];
    output[6] = step[2] - step[6];
    output[7] = step[3] - step[7];
    range_check(5, &output[..8], stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = half_btf(cospi[4], output[0], cospi[60], output[1], cos_bit[6]);
    step[1] = half_btf(cospi[60], output[0], -cospi[4], output[1], cos_bit[6]);
    step[2] = half_btf(cospi[20], output[2], cospi[44], output[3], cos_bit[6]);
    step[3] = half_btf(cospi[44], output[2], -cospi[20], output[3], cos_bit[6]);
    step[4] = half_btf(cospi[36], output[4], cospi[28], output[5], cos_bit[6]);
    step[5] = half_btf(cospi[28], output[4], -cospi[36], output[5], cos_bit[6]);
    step[6] = half_btf(cospi[52], output[6], cospi[12], output[7], cos_bit[6]);
    step[7] = half_btf(cospi[12], output[6], -cospi[52], output[7], cos_bit[6]);
    range_check(6, &step, stage_range[6]);

    // stage 7
    output[0] = step[1];
    output[1] = step[6];
    output[2] = step[3];
    output[3] = step[4];
    output[4] = step[5];
    output[5] = step[2];
    output[6] = step[7];
    output[7] = step[0];
    range_check(7, &output[..8], stage_range[7]);
}

/// 16-point inverse ADST.
pub fn iadst16(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    assert!(input.len() >= 16 && output.len() >= 16);
    assert!(cos_bit.len() >= 10 && stage_range.len() >= 10);
    let mut step = [0i32; 16];

    // stage 0
    range_check(0, &input[..16], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = -input[15];
    output[2] = -input[7];
    output[3] = input[8];
    output[4] = -input[3];
    output[5] = input[12];
    output[6] = input[4];
    output[7] = -input[11];
    output[8] = -input[1];
    output[9] = input[14];
    output[10] = input[6];
    output[11] = -input[9];
    output[12] = input[2];
    output[13] = -input[13];
    output[14] = -input[5];
    output[15] = input[10];
    range_check(1, &output[..16], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = half_btf(cospi[32], output[2], cospi[32], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[32], output[2], -cospi[32], output[3], cos_bit[2]);
    step[4] = output[4];
    step[5] = output[5];
    step[6] = half_btf(cospi[32], output[6], cospi[32], output[7], cos_bit[2]);
    step[7] = half_btf(cospi[32], output[6], -cospi[32], output[7], cos_bit[2]);
    step[8] = output[8];
    step[9] = output[9];
    step[10] = half_btf(cospi[32], output[10], cospi[32], output[11], cos_bit[2]);
    step[11] = half_btf(cospi[32], output[10], -cospi[32], output[11], cos_bit[2]);
    step[12] = output[12];
    step[13] = output[13];
    step[14] = half_btf(cospi[32], output[14], cospi[32], output[15], cos_bit[2]);
    step[15] = half_btf(cospi[32], output[14], -cospi[32], output[15], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[2];
    output[1] = step[1] + step[3];
    output[2] = step[0] - step[2];
    output[3] = step[1] - step[3];
    output[4] = step[4] + step[6];
    output[5] = step[5] + step[7];
    output[6] = step[4] - step[6];
    output[7] = step[5] - step[7];
    output[8] = step[8] + step[10];
    output[9] = step[9] + step[11];
    output[10] = step[8] - step[10];
    output[11] = step[9] - step[11];
    output[12] = step[12] + step[14];
    output[13] = step[13] + step[15];
    output[14] = step[12] - step[14];
    output[15] = step[13] - step[15];
    range_check(3, &output[..16], stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = half_btf(cospi[16], output[4], cospi[48], output[5], cos_bit[4]);
    step[5] = half_btf(cospi[48], output[4], -cospi[16], output[5], cos_bit[4]);
    step[6] = half_btf(-cospi[48], output[6], cospi[16], output[7], cos_bit[4]);
    step[7] = half_btf(cospi[16], output[6], cospi[48], output[7], cos_bit[4]);
    step[8] = output[8];
    step[9] = output[9];
    step[10] = output[10];
    step[11] = output[11];
    step[12] = half_btf(cospi[16], output[12], cospi[48], output[13], cos_bit[4]);
    step[13] = half_btf(cospi[48], output[12], -cospi[16], output[13], cos_bit[4]);
    step[14] = half_btf(-cospi[48], output[14], cospi[16], output[15], cos_bit[4]);
    step[15] = half_btf(cospi[16], output[14], cospi[48], output[15], cos_bit[4]);
    range_check(4, &step, stage_range[4]);

    // stage 5
    output[0] = step[0] + step[4];
    output[1] = step[1] + step[5];
    output[2] = step[2] + step[6];
    output[3] = step[3] + step[7];
    output[4] = step[0] - step[4];
    output[5] = step[1] - step[5];
    output[6] = step[2] - step[6];
    output[7] = step[3] - step[7];
    output[8] = step[8] + step[12];
    output[9] = step[9] + step[13];
    output[10] = step[10] + step[14];
    output[11] = step[11] + step[15];
    output[12] = step[8] - step[12];
    output[13] = step[9] - step[13];
    output[14] = step[10] - step[14];
    output[15] = step[11] - step[15];
    range_check(5, &output[..16], stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = output[4];
    step[5] = output[5];
    step[6] = output[6];
    step[7] = output[7];
    step[8] = half_btf(cospi[8], output[8], cospi[56], output[9], cos_bit[6]);
    step[9] = half_btf(cospi[56], output[8], -cospi[8], output[9], cos_bit[6]);
    step[10] = half_btf(cospi[40], output[10], cospi[24], output[11], cos_bit[6]);
    step[11] = half_btf(cospi[24], output[10], -cospi[40], output[11], cos_bit[6]);
    step[12] = half_btf(-cospi[56], output[12], cospi[8], output[13], cos_bit[6]);
    step[13] = half_btf(cospi[8], output[12], cospi[56], output[13], cos_bit[6]);
    step[14] = half_btf(-cospi[24], output[14], cospi[40], output[15], cos_bit[6]);
    step[15] = half_btf(cospi[40], output[14], cospi[24], output[15], cos_bit[6]);
    range_check(6, &step, stage_range[6]);

    // stage 7
    output[0] = step[0] + step[8];
    output[1] = step[1] + step[9];
    output[2] = step[2] + step[10];
    output[3] = step[3] + step[11];
    output[4] = step[4] + step[12];
    output[5] = step[5] + step[13];
    output[6] = step[6] + step[14];
    output[7] = step[7] + step[15];
    output[8] = step[0] - step[8];
    output[9] = step[1] - step[9];
    output[10] = step[2] - step[10];
    output[11] = step[3] - step[11];
    output[12] = step[4] - step[12];
    output[13] = step[5] - step[13];
    output[14] = step[6] - step[14];
    output[15] = step[7] - step[15];
    range_check(7, &output[..16], stage_range[7]);

    // stage 8
    let cospi = cospi_arr(cos_bit[8]);
    step[0] = half_btf(cospi[2], output[0], cospi[62], output[1], cos_bit[8]);
    step[1] = half_btf(cospi[62], output[0], -cospi[2], output[1], cos_bit[8]);
    step[2] = half_btf(cospi[10], output[2], cospi[54], output[3], cos_bit[8]);
    step[3] = half_btf(cospi[54], output[2], -cospi[10], output[3], cos_bit[8]);
    step[4] = half_btf(cospi[18], output[4], cospi[46], output[5], cos_bit[8]);
    step[5] = half_btf(cospi[46], output[4], -cospi[18], output[5], cos_bit[8]);
    step[6] = half_btf(cospi[26], output[6], cospi[38], output[7], cos_bit[8]);
    step[7] = half_btf(cospi[38], output[6], -cospi[26], output[7], cos_bit[8]);
    step[8] = half_btf(cospi[34], output[8], cospi[30], output[9], cos_bit[8]);
    step[9] = half_btf(cospi[30], output[8], -cospi[34], output[9], cos_bit[8]);
    step[10] = half_btf(cospi[42], output[10], cospi[22], output[11], cos_bit[8]);
    step[11] = half_btf(cospi[22], output[10], -cospi[42], output[11], cos_bit[8]);
    step[12] = half_btf(cospi[50], output[12], cospi[14], output[13], cos_bit[8]);
    step[13] = half_btf(cospi[14], output[12], -cospi[50], output[13], cos_bit[8]);
    step[14] = half_btf(cospi[58], output[14], cospi[6], output[15], cos_bit[8]);
    step[15] = half_btf(cospi[6], output[14], -cospi[58], output[15], cos_bit[8]);
    range_check(8, &step, stage_range[8]);

    // stage 9
    output[0] = step[1];
    output[1] = step[14];
    output[2] = step[3];
    output[3] = step[12];
    output[4] = step[5];
    output[5] = step[10];
    output[6] = step[7];
    output[7] = step[8];
    output[8] = step[9];
    output[9] = step[6];
    output[10] = step[11];
    output[11] = step[4];
    output[12] = step[13];
    output[13] = step[2];
    output[14] = step[15];
    output[15] = step[0];
    range_check(9, &output[..16], stage_range[9]);
}

/// 32-point inverse ADST.
pub fn iadst32(input: &[i32], output: &mut [i32], cos_bit: &[i8], stage_range: &[i8]) {
    assert!(input.len() >= 32 && output.len() >= 32);
    assert!(cos_bit.len() >= 12 && stage_range.len() >= 12);
    let mut step = [0i32; 32];

    // stage 0
    range_check(0, &input[..32], stage_range[0]);

    // stage 1
    output[0] = input[0];
    output[1] = -input[31];
    output[2] = -input[15];
    output[3] = input[16];
    output[4] = -input[7];
    output[5] = input[24];
    output[6] = input[8];
    output[7] = -input[23];
    output[8] = -input[3];
    output[9] = input[28];
    output[10] = input[12];
    output[11] = -input[19];
    output[12] = input[4];
    output[13] = -input[27];
    output[14] = -input[11];
    output[15] = input[20];
    output[16] = -input[1];
    output[17] = input[30];
    output[18] = input[14];
    output[19] = -input[17];
    output[20] = input[6];
    output[21] = -input[25];
    output[22] = -input[9];
    output[23] = input[22];
    output[24] = input[2];
    output[25] = -input[29];
    output[26] = -input[13];
    output[27] = input[18];
    output[28] = -input[5];
    output[29] = input[26];
    output[30] = input[10];
    output[31] = -input[21];
    range_check(1, &output[..32], stage_range[1]);

    // stage 2
    let cospi = cospi_arr(cos_bit[2]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = half_btf(cospi[32], output[2], cospi[32], output[3], cos_bit[2]);
    step[3] = half_btf(cospi[32], output[2], -cospi[32], output[3], cos_bit[2]);
    step[4] = output[4];
    step[5] = output[5];
    step[6] = half_btf(cospi[32], output[6], cospi[32], output[7], cos_bit[2]);
    step[7] = half_btf(cospi[32], output[6], -cospi[32], output[7], cos_bit[2]);
    step[8] = output[8];
    step[9] = output[9];
    step[10] = half_btf(cospi[32], output[10], cospi[32], output[11], cos_bit[2]);
    step[11] = half_btf(cospi[32], output[10], -cospi[32], output[11], cos_bit[2]);
    step[12] = output[12];
    step[13] = output[13];
    step[14] = half_btf(cospi[32], output[14], cospi[32], output[15], cos_bit[2]);
    step[15] = half_btf(cospi[32], output[14], -cospi[32], output[15], cos_bit[2]);
    step[16] = output[16];
    step[17] = output[17];
    step[18] = half_btf(cospi[32], output[18], cospi[32], output[19], cos_bit[2]);
    step[19] = half_btf(cospi[32], output[18], -cospi[32], output[19], cos_bit[2]);
    step[20] = output[20];
    step[21] = output[21];
    step[22] = half_btf(cospi[32], output[22], cospi[32], output[23], cos_bit[2]);
    step[23] = half_btf(cospi[32], output[22], -cospi[32], output[23], cos_bit[2]);
    step[24] = output[24];
    step[25] = output[25];
    step[26] = half_btf(cospi[32], output[26], cospi[32], output[27], cos_bit[2]);
    step[27] = half_btf(cospi[32], output[26], -cospi[32], output[27], cos_bit[2]);
    step[28] = output[28];
    step[29] = output[29];
    step[30] = half_btf(cospi[32], output[30], cospi[32], output[31], cos_bit[2]);
    step[31] = half_btf(cospi[32], output[30], -cospi[32], output[31], cos_bit[2]);
    range_check(2, &step, stage_range[2]);

    // stage 3
    output[0] = step[0] + step[2];
    output[1] = step[1] + step[3];
    output[2] = step[0] - step[2];
    output[3] = step[1] - step[3];
    output[4] = step[4] + step[6];
    output[5] = step[5] + step[7];
    output[6] = step[4] - step[6];
    output[7] = step[5] - step[7];
    output[8] = step[8] + step[10];
    output[9] = step[9] + step[11];
    output[10] = step[8] - step[10];
    output[11] = step[9] - step[11];
    output[12] = step[12] + step[14];
    output[13] = step[13] + step[15];
    output[14] = step[12] - step[14];
    output[15] = step[13] - step[15];
    output[16] = step[16] + step[18];
    output[17] = step[17] + step[19];
    output[18] = step[16] - step[18];
    output[19] = step[17] - step[19];
    output[20] = step[20] + step[22];
    output[21] = step[21] + step[23];
    output[22] = step[20] - step[22];
    output[23] = step[21] - step[23];
    output[24] = step[24] + step[26];
    output[25] = step[25] + step[27];
    output[26] = step[24] - step[26];
    output[27] = step[25] - step[27];
    output[28] = step[28] + step[30];
    output[29] = step[29] + step[31];
    output[30] = step[28] - step[30];
    output[31] = step[29] - step[31];
    range_check(3, &output[..32], stage_range[3]);

    // stage 4
    let cospi = cospi_arr(cos_bit[4]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = half_btf(cospi[16], output[4], cospi[48], output[5], cos_bit[4]);
    step[5] = half_btf(cospi[48], output[4], -cospi[16], output[5], cos_bit[4]);
    step[6] = half_btf(-cospi[48], output[6], cospi[16], output[7], cos_bit[4]);
    step[7] = half_btf(cospi[16], output[6], cospi[48], output[7], cos_bit[4]);
    step[8] = output[8];
    step[9] = output[9];
    step[10] = output[10];
    step[11] = output[11];
    step[12] = half_btf(cospi[16], output[12], cospi[48], output[13], cos_bit[4]);
    step[13] = half_btf(cospi[48], output[12], -cospi[16], output[13], cos_bit[4]);
    step[14] = half_btf(-cospi[48], output[14], cospi[16], output[15], cos_bit[4]);
    step[15] = half_btf(cospi[16], output[14], cospi[48], output[15], cos_bit[4]);
    step[16] = output[16];
    step[17] = output[17];
    step[18] = output[18];
    step[19] = output[19];
    step[20] = half_btf(cospi[16], output[20], cospi[48], output[21], cos_bit[4]);
    step[21] = half_btf(cospi[48], output[20], -cospi[16], output[21], cos_bit[4]);
    step[22] = half_btf(-cospi[48], output[22], cospi[16], output[23], cos_bit[4]);
    step[23] = half_btf(cospi[16], output[22], cospi[48], output[23], cos_bit[4]);
    step[24] = output[24];
    step[25] = output[25];
    step[26] = output[26];
    step[27] = output[27];
    step[28] = half_btf(cospi[16], output[28], cospi[48], output[29], cos_bit[4]);
    step[29] = half_btf(cospi[48], output[28], -cospi[16], output[29], cos_bit[4]);
    step[30] = half_btf(-cospi[48], output[30], cospi[16], output[31], cos_bit[4]);
    step[31] = half_btf(cospi[16], output[30], cospi[48], output[31], cos_bit[4]);
    range_check(4, &step, stage_range[4]);

    // stage 5
    output[0] = step[0] + step[4];
    output[1] = step[1] + step[5];
    output[2] = step[2] + step[6];
    output[3] = step[3] + step[7];
    output[4] = step[0] - step[4];
    output[5] = step[1] - step[5];
    output[6] = step[2] - step[6];
    output[7] = step[3] - step[7];
    output[8] = step[8] + step[12];
    output[9] = step[9] + step[13];
    output[10] = step[10] + step[14];
    output[11] = step[11] + step[15];
    output[12] = step[8] - step[12];
    output[13] = step[9] - step[13];
    output[14] = step[10] - step[14];
    output[15] = step[11] - step[15];
    output[16] = step[16] + step[20];
    output[17] = step[17] + step[21];
    output[18] = step[18] + step[22];
    output[19] = step[19] + step[23];
    output[20] = step[16] - step[20];
    output[21] = step[17] - step[21];
    output[22] = step[18] - step[22];
    output[23] = step[19] - step[23];
    output[24] = step[24] + step[28];
    output[25] = step[25] + step[29];
    output[26] = step[26] + step[30];
    output[27] = step[27] + step[31];
    output[28] = step[24] - step[28];
    output[29] = step[25] - step[29];
    output[30] = step[26] - step[30];
    output[31] = step[27] - step[31];
    range_check(5, &output[..32], stage_range[5]);

    // stage 6
    let cospi = cospi_arr(cos_bit[6]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = output[4];
    step[5] = output[5];
    step[6] = output[6];
    step[7] = output[7];
    step[8] = half_btf(cospi[8], output[8], cospi[56], output[9], cos_bit[6]);
    step[9] = half_btf(cospi[56], output[8], -cospi[8], output[9], cos_bit[6]);
    step[10] = half_btf(cospi[40], output[10], cospi[24], output[11], cos_bit[6]);
    step[11] = half_btf(cospi[24], output[10], -cospi[40], output[11], cos_bit[6]);
    step[12] = half_btf(-cospi[56], output[12], cospi[8], output[13], cos_bit[6]);
    step[13] = half_btf(cospi[8], output[12], cospi[56], output[13], cos_bit[6]);
    step[14] = half_btf(-cospi[24], output[14], cospi[40], output[15], cos_bit[6]);
    step[15] = half_btf(cospi[40], output[14], cospi[24], output[15], cos_bit[6]);
    step[16] = output[16];
    step[17] = output[17];
    step[18] = output[18];
    step[19] = output[19];
    step[20] = output[20];
    step[21] = output[21];
    step[22] = output[22];
    step[23] = output[23];
    step[24] = half_btf(cospi[8], output[24], cospi[56], output[25], cos_bit[6]);
    step[25] = half_btf(cospi[56], output[24], -cospi[8], output[25], cos_bit[6]);
    step[26] = half_btf(cospi[40], output[26], cospi[24], output[27], cos_bit[6]);
    step[27] = half_btf(cospi[24], output[26], -cospi[40], output[27], cos_bit[6]);
    step[28] = half_btf(-cospi[56], output[28], cospi[8], output[29], cos_bit[6]);
    step[29] = half_btf(cospi[8], output[28], cospi[56], output[29], cos_bit[6]);
    step[30] = half_btf(-cospi[24], output[30], cospi[40], output[31], cos_bit[6]);
    step[31] = half_btf(cospi[40], output[30], cospi[24], output[31], cos_bit[6]);
    range_check(6, &step, stage_range[6]);

    // stage 7
    output[0] = step[0] + step[8];
    output[1] = step[1] + step[9];
    output[2] = step[2] + step[10];
    output[3] = step[3] + step[11];
    output[4] = step[4] + step[12];
    output[5] = step[5] + step[13];
    output[6] = step[6] + step[14];
    output[7] = step[7] + step[15];
    output[8] = step[0] - step[8];
    output[9] = step[1] - step[9];
    output[10] = step[2] - step[10];
    output[11] = step[3] - step[11];
    output[12] = step[4] - step[12];
    output[13] = step[5] - step[13];
    output[14] = step[6] - step[14];
    output[15] = step[7] - step[15];
    output[16] = step[16] + step[24];
    output[17] = step[17] + step[25];
    output[18] = step[18] + step[26];
    output[19] = step[19] + step[27];
    output[20] = step[20] + step[28];
    output[21] = step[21] + step[29];
    output[22] = step[22] + step[30];
    output[23] = step[23] + step[31];
    output[24] = step[16] - step[24];
    output[25] = step[17] - step[25];
    output[26] = step[18] - step[26];
    output[27] = step[19] - step[27];
    output[28] = step[20] - step[28];
    output[29] = step[21] - step[29];
    output[30] = step[22] - step[30];
    output[31] = step[23] - step[31];
    range_check(7, &output[..32], stage_range[7]);

    // stage 8
    let cospi = cospi_arr(cos_bit[8]);
    step[0] = output[0];
    step[1] = output[1];
    step[2] = output[2];
    step[3] = output[3];
    step[4] = output[4];
    step[5] = output[5];
    step[6] = output[6];
    step[7] = output[7];
    step[8] = output[8];
    step[9] = output[9];
    step[10] = output[10];
    step[11] = output[11];
    step[12] = output[12];
    step[13] = output[13];
    step[14] = output[14];
    step[15] = output[15];
    step[16] = half_btf(cospi[4], output[16], cospi[60], output[17], cos_bit[8]);
    step[17] = half_btf(cospi[60], output[16], -cospi[4], output[17], cos_bit[8]);
    step[18] = half_btf(cospi[20], output[18], cospi[44], output[19], cos_bit[8]);
    step[19] = half_btf(cospi[44], output[18], -cospi[20], output[19], cos_bit[8]);
    step[20] = half_btf(cospi[36], output[20], cospi[28], output[21], cos_bit[8]);
    step[21] = half_btf(cospi[28], output[20], -cospi[36], output[21], cos_bit[8]);
    step[22] = half_btf(cospi[52], output[22], cospi[12], output[23], cos_bit[8]);
    step[23] = half_btf(cospi[12], output[22], -cospi[52], output[23], cos_bit[8]);
    step[24] = half_btf(-cospi[60], output[24], cospi[4], output[25], cos_bit[8]);
    step[25] = half_btf(cospi[4], output[24], cospi[60], output[25], cos_bit[8]);
    step[26] = half_btf(-cospi[44], output[26], cospi[20], output[27], cos_bit[8]);
    step[27] = half_btf(cospi[20], output[26], cospi[44], output[27], cos_bit[8]);
    step[28] = half_btf(-cospi[28], output[28], cospi[36], output[29], cos_bit[8]);
    step[29] = half_btf(cospi[36], output[28], cospi[28], output[29], cos_bit[8]);
    step[30] = half_btf(-cospi[12], output[30], cospi[52], output[31], cos_bit[8]);
    step[31] = half_btf(cospi[52], output[30], cospi[12], output[31], cos_bit[8]);
    range_check(8, &step, stage_range[8]);

    // stage 9
    output[0] = step[0] + step[16];
    output[1] = step[1] + step[17];
    output[2] = step[2] + step[18];
    output[3] = step[3] + step[19];
    output[4] = step[4] + step[20];
    output[5] = step[5] + step[21];
    output[6] = step[6] + step[22];
    output[7] = step[7] + step[23];
    output[8] = step[8] + step[24];
    output[9] = step[9] + step[25];
    output[10] = step[10] + step[26];
    output[11] = step[11] + step[27];
    output[12] = step[12] + step[28];
    output[13] = step[13] + step[29];
    output[14] = step[14] + step[30];
    output[15] = step[15] + step[31];
    output[16] = step[0] - step[16];
    output[17] = step[1] - step[17];
    output[18] = step[2] - step[18];
    output[19] = step[3] - step[19];
    output[20] = step[4] - step[20];
    output[21] = step[5] - step[21];
    output[22] = step[6] - step[22];
    output[23] = step[7] - step[23];
    output[24] = step[8] - step[24];
    output[25] = step[9] - step[25];
    output[26] = step[10] - step[26];
    output[27] = step[11] - step[27];
    output[28] = step[12] - step[28];
    output[29] = step[13] - step[29];
    output[30] = step[14] - step[30];
    output[31] = step[15] - step[31];
    range_check(9, &output[..32], stage_range[9]);

    // stage 10
    let cospi = cospi_arr(cos_bit[10]);
    step[0] = half_btf(cospi[1], output[0], cospi[63], output[1], cos_bit[10]);
    step[1] = half_btf(cospi[63], output[0], -cospi[1], output[1], cos_bit[10]);
    step[2] = half_btf(cospi[5], output[2], cospi[59], output[3], cos_bit[10]);
    step[3] = half_btf(cospi[59], output[2], -cospi[5], output[3], cos_bit[10]);
    step[4] = half_btf(cospi[9], output[4], cospi[55], output[5], cos_bit[10]);
    step[5] = half_btf(cospi[55], output[4], -cospi[9], output[5], cos_bit[10]);
    step[6] = half_btf(cospi[13], output[6], cospi[51], output[7], cos_bit[10]);
    step[7] = half_btf(cospi[51], output[6], -cospi[13], output[7], cos_bit[10]);
    step[8] = half_btf(cospi[17], output[8], cospi[47], output[9], cos_bit[10]);
    step[9] = half_btf(cospi[47], output[8], -cospi[17], output[9], cos_bit[10]);
    step[10] = half_btf(cospi[21], output[10], cospi[43], output[11], cos_bit[10]);
    step[11] = half_btf(cospi[43], output[10], -cospi[21], output[11], cos_bit[10]);
    step[12] = half_btf(cospi[25], output[12], cospi[39], output[13], cos_bit[10]);
    step[13] = half_btf(cospi[39], output[12], -cospi[25], output[13], cos_bit[10]);
    step[14] = half_btf(cospi[29], output[14], cospi[35], output[15], cos_bit[10]);
    step[15] = half_btf(cospi[35], output[14], -cospi[29], output[15], cos_bit[10]);
    step[16] = half_btf(cospi[33], output[16], cospi[31], output[17], cos_bit[10]);
    step[17] = half_btf(cospi[31], output[16], -cospi[33], output[17], cos_bit[10]);
    step[18] = half_btf(cospi[37], output[18], cospi[27], output[19], cos_bit[10]);
    step[19] = half_btf(cospi[27], output[18], -cospi[37], output[19], cos_bit[10]);
    step[20] = half_btf(cospi[41], output[20], cospi[23], output[21], cos_bit[10]);
    step[21] = half_btf(cospi[23], output[20], -cospi[41], output[21], cos_bit[10]);
    step[22] = half_btf(cospi[45], output[22], cospi[19], output[23], cos_bit[10]);
    step[23] = half_btf(cospi[19], output[22], -cospi[45], output[23], cos_bit[10]);
    step[24] = half_btf(cospi[49], output[24], cospi[15], output[25], cos_bit[10]);
    step[25] = half_btf(cospi[15], output[24], -cospi[49], output[25], cos_bit[10]);
    step[26] = half_btf(cospi[53], output[26], cospi[11], output[27], cos_bit[10]);
    step[27] = half_btf(cospi[11], output[26], -cospi[53], output[27], cos_bit[10]);
    step[28] = half_btf(cospi[57], output[28], cospi[7], output[29], cos_bit[10]);
    step[29] = half_btf(cospi[7], output[28], -cospi[57], output[29], cos_bit[10]);
    step[30] = half_btf(cospi[61], output[30], cospi[3], output[31], cos_bit[10]);
    step[31] = half_btf(cospi[3], output[30], -cospi[61], output[31], cos_bit[10]);
    range_check(10, &step, stage_range[10]);

    // stage 11
    output[0] = step[1];
    output[1] = step[30];
    output[2] = step[3];
    output[3] = step[28];
    output[4] = step[5];
    output[5] = step[26];
    output[6] = step[7];
    output[7] = step[24];
    output[8] = step[9];
    output[9] = step[22];
    output[10] = step[11];
    output[11] = step[20];
    output[12] = step[13];
    output[13] = step[18];
    output[14] = step[15];
    output[15] = step[16];
    output[16] = step[17];
    output[17] = step[14];
    output[18] = step[19];
    output[19] = step[12];
    output[20] = step[21];
    output[21] = step[10];
    output[22] = step[23];
    output[23] = step[8];
    output[24] = step[25];
    output[25] = step[6];
    output[26] = step[27];
    output[27] = step[4];
    output[28] = step[29];
    output[29] = step[2];
    output[30] = step[31];
    output[31] = step[0];
    range_check(11, &output[..32], stage_range[11]);
}

#[cfg(test)]
mod tests {
    use super::*;

    const COS_BIT: [i8; 12] = [14; 12];
    const STAGE_RANGE: [i8; 12] = [30; 12];

    #[test]
    fn idct4_dc_only_reconstructs_flat_line() {
        let input = [4096, 0, 0, 0];
        let mut output = [0i32; 4];
        idct4(&input, &mut output, &COS_BIT, &STAGE_RANGE);
        // 4096 scaled by cos(pi/4) at 14-bit precision.
        assert_eq!(output, [2896, 2896, 2896, 2896]);
    }

    #[test]
    fn idct4_highest_frequency_is_odd_symmetric() {
        let input = [0, 0, 0, 1000];
        let mut output = [0i32; 4];
        idct4(&input, &mut output, &COS_BIT, &STAGE_RANGE);
        assert_eq!(
            output[0], -output[3],
            "outer lanes must mirror with opposite sign, got {:?}",
            output
        );
        assert_eq!(
            output[1], -output[2],
            "inner lanes must mirror with opposite sign, got {:?}",
            output
        );
        assert!(output.iter().all(|&v| v != 0));
    }

    #[test]
    fn idct_kernels_zero_input_zero_output() {
        let input = [0i32; 32];
        for kind in [
            TxfmType::Dct4,
            TxfmType::Dct8,
            TxfmType::Dct16,
            TxfmType::Dct32,
        ] {
            let mut output = [0x7f7f; 32];
            inv_txfm1d(kind, &input, &mut output, &COS_BIT, &STAGE_RANGE);
            let n = kind.size();
            assert!(
                output[..n].iter().all(|&v| v == 0),
                "{:?} left nonzero output {:?}",
                kind,
                &output[..n]
            );
        }
    }

    #[test]
    fn iadst_kernels_zero_input_zero_output() {
        let input = [0i32; 32];
        for kind in [
            TxfmType::Adst4,
            TxfmType::Adst8,
            TxfmType::Adst16,
            TxfmType::Adst32,
        ] {
            let mut output = [-1i32; 32];
            inv_txfm1d(kind, &input, &mut output, &COS_BIT, &STAGE_RANGE);
            let n = kind.size();
            assert!(
                output[..n].iter().all(|&v| v == 0),
                "{:?} left nonzero output {:?}",
                kind,
                &output[..n]
            );
        }
    }
}
