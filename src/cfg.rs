//! Transform configuration registry.
//!
//! Every (transform type, size) pair maps to a static configuration carrying
//! the per-stage cosine precision and range budgets for its column and row
//! kernels, plus the shifts applied between passes. The flipped ADST
//! variants do not own tables: they fold onto the unflipped configuration
//! and carry flip flags instead.

use crate::error::CfgError;

/// 1-D transform kernels, named by family and point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxfmType {
    /// 4-point DCT.
    Dct4,
    /// 8-point DCT.
    Dct8,
    /// 16-point DCT.
    Dct16,
    /// 32-point DCT.
    Dct32,
    /// 4-point ADST.
    Adst4,
    /// 8-point ADST.
    Adst8,
    /// 16-point ADST.
    Adst16,
    /// 32-point ADST.
    Adst32,
}

impl TxfmType {
    /// Point count of the kernel.
    pub const fn size(self) -> usize {
        match self {
            TxfmType::Dct4 | TxfmType::Adst4 => 4,
            TxfmType::Dct8 | TxfmType::Adst8 => 8,
            TxfmType::Dct16 | TxfmType::Adst16 => 16,
            TxfmType::Dct32 | TxfmType::Adst32 => 32,
        }
    }
}

/// 2-D transform selection: the column kernel family crossed with the row
/// kernel family.
///
/// Discriminants match the bitstream's transform type indices, so a raw
/// syntax element converts via [`TryFrom<u8>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TxType {
    /// DCT in both directions.
    DctDct = 0,
    /// ADST on columns, DCT on rows.
    AdstDct = 1,
    /// DCT on columns, ADST on rows.
    DctAdst = 2,
    /// ADST in both directions.
    AdstAdst = 3,
    /// Flipped ADST on columns, DCT on rows.
    FlipadstDct = 4,
    /// DCT on columns, flipped ADST on rows.
    DctFlipadst = 5,
    /// Flipped ADST in both directions.
    FlipadstFlipadst = 6,
    /// ADST on columns, flipped ADST on rows.
    AdstFlipadst = 7,
    /// Flipped ADST on columns, ADST on rows.
    FlipadstAdst = 8,
}

impl TryFrom<u8> for TxType {
    type Error = CfgError;

    fn try_from(value: u8) -> Result<Self, CfgError> {
        match value {
            0 => Ok(TxType::DctDct),
            1 => Ok(TxType::AdstDct),
            2 => Ok(TxType::DctAdst),
            3 => Ok(TxType::AdstAdst),
            4 => Ok(TxType::FlipadstDct),
            5 => Ok(TxType::DctFlipadst),
            6 => Ok(TxType::FlipadstFlipadst),
            7 => Ok(TxType::AdstFlipadst),
            8 => Ok(TxType::FlipadstAdst),
            _ => Err(CfgError::InvalidTxType(value)),
        }
    }
}

/// Supported square transform sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TxSize {
    /// 4x4 block.
    X4 = 0,
    /// 8x8 block.
    X8 = 1,
    /// 16x16 block.
    X16 = 2,
    /// 32x32 block.
    X32 = 3,
}

impl TxSize {
    /// Block edge length in samples.
    pub const fn size(self) -> usize {
        match self {
            TxSize::X4 => 4,
            TxSize::X8 => 8,
            TxSize::X16 => 16,
            TxSize::X32 => 32,
        }
    }
}

impl TryFrom<u8> for TxSize {
    type Error = CfgError;

    fn try_from(value: u8) -> Result<Self, CfgError> {
        match value {
            0 => Ok(TxSize::X4),
            1 => Ok(TxSize::X8),
            2 => Ok(TxSize::X16),
            3 => Ok(TxSize::X32),
            _ => Err(CfgError::InvalidTxSize(value)),
        }
    }
}

/// Parameter tables for one direction of one 2-D transform.
///
/// `shift` carries three entries for the forward direction (before the
/// column pass, after it, and after the row pass) and two for the inverse
/// (after the row pass, after the column pass). Each entry `s` is applied
/// as a rounding shift by `-s`: positive entries scale up to add headroom,
/// negative entries round bits away.
#[derive(Debug)]
pub struct Txfm2dCfg {
    /// Block edge length in samples.
    pub txfm_size: usize,
    /// Stage count of the column kernel.
    pub stage_num_col: usize,
    /// Stage count of the row kernel.
    pub stage_num_row: usize,
    /// Inter-pass shifts, see the type docs for ordering.
    pub shift: &'static [i8],
    /// Per-stage value range budget of the column kernel, in bits.
    pub stage_range_col: &'static [i8],
    /// Per-stage value range budget of the row kernel, in bits.
    pub stage_range_row: &'static [i8],
    /// Per-stage cosine precision of the column kernel.
    pub cos_bit_col: &'static [i8],
    /// Per-stage cosine precision of the row kernel.
    pub cos_bit_row: &'static [i8],
    /// Kernel applied along columns.
    pub txfm_type_col: TxfmType,
    /// Kernel applied along rows.
    pub txfm_type_row: TxfmType,
}

/// A configuration plus the flip flags of the flipped ADST variants.
#[derive(Debug, Clone, Copy)]
pub struct Txfm2dFlipCfg {
    /// Mirror vertically: the column direction runs bottom-up.
    pub ud_flip: bool,
    /// Mirror horizontally: the row direction runs right-to-left.
    pub lr_flip: bool,
    /// The shared parameter tables.
    pub cfg: &'static Txfm2dCfg,
}

// The four unflipped column/row family pairs that own parameter tables.
#[derive(Clone, Copy)]
enum BasePair {
    DctDct,
    AdstDct,
    DctAdst,
    AdstAdst,
}

impl TxType {
    fn flip_split(self) -> (bool, bool, BasePair) {
        match self {
            TxType::DctDct => (false, false, BasePair::DctDct),
            TxType::AdstDct => (false, false, BasePair::AdstDct),
            TxType::DctAdst => (false, false, BasePair::DctAdst),
            TxType::AdstAdst => (false, false, BasePair::AdstAdst),
            TxType::FlipadstDct => (true, false, BasePair::AdstDct),
            TxType::DctFlipadst => (false, true, BasePair::DctAdst),
            TxType::FlipadstFlipadst => (true, true, BasePair::AdstAdst),
            TxType::AdstFlipadst => (false, true, BasePair::AdstAdst),
            TxType::FlipadstAdst => (true, false, BasePair::AdstAdst),
        }
    }
}

/// Forward configuration for a 2-D transform selection.
pub fn fwd_txfm_cfg(tx_type: TxType, tx_size: TxSize) -> Txfm2dFlipCfg {
    let (ud_flip, lr_flip, base) = tx_type.flip_split();
    let cfg = match (base, tx_size) {
        (BasePair::DctDct, TxSize::X4) => &FWD_CFG_DCT_DCT_4,
        (BasePair::DctDct, TxSize::X8) => &FWD_CFG_DCT_DCT_8,
        (BasePair::DctDct, TxSize::X16) => &FWD_CFG_DCT_DCT_16,
        (BasePair::DctDct, TxSize::X32) => &FWD_CFG_DCT_DCT_32,
        (BasePair::AdstDct, TxSize::X4) => &FWD_CFG_ADST_DCT_4,
        (BasePair::AdstDct, TxSize::X8) => &FWD_CFG_ADST_DCT_8,
        (BasePair::AdstDct, TxSize::X16) => &FWD_CFG_ADST_DCT_16,
        (BasePair::AdstDct, TxSize::X32) => &FWD_CFG_ADST_DCT_32,
        (BasePair::DctAdst, TxSize::X4) => &FWD_CFG_DCT_ADST_4,
        (BasePair::DctAdst, TxSize::X8) => &FWD_CFG_DCT_ADST_8,
        (BasePair::DctAdst, TxSize::X16) => &FWD_CFG_DCT_ADST_16,
        (BasePair::DctAdst, TxSize::X32) => &FWD_CFG_DCT_ADST_32,
        (BasePair::AdstAdst, TxSize::X4) => &FWD_CFG_ADST_ADST_4,
        (BasePair::AdstAdst, TxSize::X8) => &FWD_CFG_ADST_ADST_8,
        (BasePair::AdstAdst, TxSize::X16) => &FWD_CFG_ADST_ADST_16,
        (BasePair::AdstAdst, TxSize::X32) => &FWD_CFG_ADST_ADST_32,
    };
    Txfm2dFlipCfg {
        ud_flip,
        lr_flip,
        cfg,
    }
}

/// Inverse configuration for a 2-D transform selection.
pub fn inv_txfm_cfg(tx_type: TxType, tx_size: TxSize) -> Txfm2dFlipCfg {
    let (ud_flip, lr_flip, base) = tx_type.flip_split();
    let cfg = match (base, tx_size) {
        (BasePair::DctDct, TxSize::X4) => &INV_CFG_DCT_DCT_4,
        (BasePair::DctDct, TxSize::X8) => &INV_CFG_DCT_DCT_8,
        (BasePair::DctDct, TxSize::X16) => &INV_CFG_DCT_DCT_16,
        (BasePair::DctDct, TxSize::X32) => &INV_CFG_DCT_DCT_32,
        (BasePair::AdstDct, TxSize::X4) => &INV_CFG_ADST_DCT_4,
        (BasePair::AdstDct, TxSize::X8) => &INV_CFG_ADST_DCT_8,
        (BasePair::AdstDct, TxSize::X16) => &INV_CFG_ADST_DCT_16,
        (BasePair::AdstDct, TxSize::X32) => &INV_CFG_ADST_DCT_32,
        (BasePair::DctAdst, TxSize::X4) => &INV_CFG_DCT_ADST_4,
        (BasePair::DctAdst, TxSize::X8) => &INV_CFG_DCT_ADST_8,
        (BasePair::DctAdst, TxSize::X16) => &INV_CFG_DCT_ADST_16,
        (BasePair::DctAdst, TxSize::X32) => &INV_CFG_DCT_ADST_32,
        (BasePair::AdstAdst, TxSize::X4) => &INV_CFG_ADST_ADST_4,
        (BasePair::AdstAdst, TxSize::X8) => &INV_CFG_ADST_ADST_8,
        (BasePair::AdstAdst, TxSize::X16) => &INV_CFG_ADST_ADST_16,
        (BasePair::AdstAdst, TxSize::X32) => &INV_CFG_ADST_ADST_32,
    };
    Txfm2dFlipCfg {
        ud_flip,
        lr_flip,
        cfg,
    }
}

static FWD_CFG_DCT_DCT_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 4,
    stage_num_row: 4,
    shift: &[4, 0, -2],
    stage_range_col: &[15, 16, 17, 17],
    stage_range_row: &[17, 18, 18, 18],
    cos_bit_col: &[16, 16, 15, 15],
    cos_bit_row: &[15, 14, 14, 14],
    txfm_type_col: TxfmType::Dct4,
    txfm_type_row: TxfmType::Dct4,
};

static FWD_CFG_DCT_DCT_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 6,
    stage_num_row: 6,
    shift: &[5, -3, -1],
    stage_range_col: &[16, 17, 18, 19, 19, 19],
    stage_range_row: &[16, 17, 18, 18, 18, 18],
    cos_bit_col: &[16, 15, 14, 13, 13, 13],
    cos_bit_row: &[16, 15, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Dct8,
    txfm_type_row: TxfmType::Dct8,
};

static FWD_CFG_DCT_DCT_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 8,
    stage_num_row: 8,
    shift: &[4, -3, -1],
    stage_range_col: &[15, 16, 17, 18, 19, 19, 19, 19],
    stage_range_row: &[16, 17, 18, 19, 19, 19, 19, 19],
    cos_bit_col: &[16, 16, 15, 14, 13, 13, 13, 13],
    cos_bit_row: &[16, 15, 14, 13, 13, 13, 13, 13],
    txfm_type_col: TxfmType::Dct16,
    txfm_type_row: TxfmType::Dct16,
};

static FWD_CFG_DCT_DCT_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 10,
    stage_num_row: 10,
    shift: &[3, -3, -1],
    stage_range_col: &[14, 15, 16, 17, 18, 19, 19, 19, 19, 19],
    stage_range_row: &[16, 17, 18, 19, 20, 20, 20, 20, 20, 20],
    cos_bit_col: &[16, 16, 16, 15, 14, 13, 13, 13, 13, 13],
    cos_bit_row: &[16, 15, 14, 13, 12, 12, 12, 12, 12, 12],
    txfm_type_col: TxfmType::Dct32,
    txfm_type_row: TxfmType::Dct32,
};

static FWD_CFG_DCT_ADST_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 4,
    stage_num_row: 6,
    shift: &[5, -2, -1],
    stage_range_col: &[16, 17, 18, 18],
    stage_range_row: &[16, 16, 16, 17, 17, 17],
    cos_bit_col: &[16, 15, 14, 14],
    cos_bit_row: &[16, 16, 16, 15, 15, 15],
    txfm_type_col: TxfmType::Dct4,
    txfm_type_row: TxfmType::Adst4,
};

static FWD_CFG_DCT_ADST_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 6,
    stage_num_row: 8,
    shift: &[7, -3, -3],
    stage_range_col: &[18, 19, 20, 21, 21, 21],
    stage_range_row: &[18, 18, 18, 19, 19, 20, 20, 20],
    cos_bit_col: &[14, 13, 12, 11, 11, 11],
    cos_bit_row: &[14, 14, 14, 13, 13, 12, 12, 12],
    txfm_type_col: TxfmType::Dct8,
    txfm_type_row: TxfmType::Adst8,
};

static FWD_CFG_DCT_ADST_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 8,
    stage_num_row: 10,
    shift: &[4, -1, -3],
    stage_range_col: &[15, 16, 17, 18, 19, 19, 19, 19],
    stage_range_row: &[18, 18, 18, 19, 19, 20, 20, 21, 21, 21],
    cos_bit_col: &[16, 16, 15, 14, 13, 13, 13, 13],
    cos_bit_row: &[14, 14, 14, 13, 13, 12, 12, 11, 11, 11],
    txfm_type_col: TxfmType::Dct16,
    txfm_type_row: TxfmType::Adst16,
};

static FWD_CFG_DCT_ADST_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 10,
    stage_num_row: 12,
    shift: &[3, -1, -4],
    stage_range_col: &[14, 15, 16, 17, 18, 19, 19, 19, 19, 19],
    stage_range_row: &[18, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 22],
    cos_bit_col: &[16, 16, 16, 15, 14, 13, 13, 13, 13, 13],
    cos_bit_row: &[14, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 10],
    txfm_type_col: TxfmType::Dct32,
    txfm_type_row: TxfmType::Adst32,
};

static FWD_CFG_ADST_ADST_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 6,
    stage_num_row: 6,
    shift: &[6, 1, -5],
    stage_range_col: &[17, 17, 18, 19, 19, 19],
    stage_range_row: &[20, 20, 20, 21, 21, 21],
    cos_bit_col: &[15, 15, 14, 13, 13, 13],
    cos_bit_row: &[12, 12, 12, 11, 11, 11],
    txfm_type_col: TxfmType::Adst4,
    txfm_type_row: TxfmType::Adst4,
};

static FWD_CFG_ADST_ADST_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 8,
    stage_num_row: 8,
    shift: &[3, -1, -1],
    stage_range_col: &[14, 14, 15, 16, 16, 17, 17, 17],
    stage_range_row: &[16, 16, 16, 17, 17, 18, 18, 18],
    cos_bit_col: &[16, 16, 16, 16, 16, 15, 15, 15],
    cos_bit_row: &[16, 16, 16, 15, 15, 14, 14, 14],
    txfm_type_col: TxfmType::Adst8,
    txfm_type_row: TxfmType::Adst8,
};

static FWD_CFG_ADST_ADST_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 10,
    stage_num_row: 10,
    shift: &[2, 0, -2],
    stage_range_col: &[13, 13, 14, 15, 15, 16, 16, 17, 17, 17],
    stage_range_row: &[17, 17, 17, 18, 18, 19, 19, 20, 20, 20],
    cos_bit_col: &[16, 16, 16, 16, 16, 16, 16, 15, 15, 15],
    cos_bit_row: &[15, 15, 15, 14, 14, 13, 13, 12, 12, 12],
    txfm_type_col: TxfmType::Adst16,
    txfm_type_row: TxfmType::Adst16,
};

static FWD_CFG_ADST_ADST_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 12,
    stage_num_row: 12,
    shift: &[4, -2, -4],
    stage_range_col: &[15, 15, 16, 17, 17, 18, 18, 19, 19, 20, 20, 20],
    stage_range_row: &[18, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 22],
    cos_bit_col: &[16, 16, 16, 15, 15, 14, 14, 13, 13, 12, 12, 12],
    cos_bit_row: &[14, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 10],
    txfm_type_col: TxfmType::Adst32,
    txfm_type_row: TxfmType::Adst32,
};

static FWD_CFG_ADST_DCT_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 6,
    stage_num_row: 4,
    shift: &[5, -4, 1],
    stage_range_col: &[16, 16, 17, 18, 18, 18],
    stage_range_row: &[14, 15, 15, 15],
    cos_bit_col: &[16, 16, 15, 14, 14, 14],
    cos_bit_row: &[16, 16, 16, 16],
    txfm_type_col: TxfmType::Adst4,
    txfm_type_row: TxfmType::Dct4,
};

static FWD_CFG_ADST_DCT_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 8,
    stage_num_row: 6,
    shift: &[5, 1, -5],
    stage_range_col: &[16, 16, 17, 18, 18, 19, 19, 19],
    stage_range_row: &[20, 21, 22, 22, 22, 22],
    cos_bit_col: &[16, 16, 15, 14, 14, 13, 13, 13],
    cos_bit_row: &[12, 11, 10, 10, 10, 10],
    txfm_type_col: TxfmType::Adst8,
    txfm_type_row: TxfmType::Dct8,
};

static FWD_CFG_ADST_DCT_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 10,
    stage_num_row: 8,
    shift: &[4, -3, -1],
    stage_range_col: &[15, 15, 16, 17, 17, 18, 18, 19, 19, 19],
    stage_range_row: &[16, 17, 18, 19, 19, 19, 19, 19],
    cos_bit_col: &[16, 16, 16, 15, 15, 14, 14, 13, 13, 13],
    cos_bit_row: &[16, 15, 14, 13, 13, 13, 13, 13],
    txfm_type_col: TxfmType::Adst16,
    txfm_type_row: TxfmType::Dct16,
};

static FWD_CFG_ADST_DCT_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 12,
    stage_num_row: 10,
    shift: &[5, -4, -3],
    stage_range_col: &[16, 16, 17, 18, 18, 19, 19, 20, 20, 21, 21, 21],
    stage_range_row: &[17, 18, 19, 20, 21, 21, 21, 21, 21, 21],
    cos_bit_col: &[16, 16, 15, 14, 14, 13, 13, 12, 12, 11, 11, 11],
    cos_bit_row: &[15, 14, 13, 12, 11, 11, 11, 11, 11, 11],
    txfm_type_col: TxfmType::Adst32,
    txfm_type_row: TxfmType::Dct32,
};

static INV_CFG_DCT_DCT_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 4,
    stage_num_row: 4,
    shift: &[1, -5],
    stage_range_col: &[17, 17, 16, 16],
    stage_range_row: &[16, 16, 16, 16],
    cos_bit_col: &[15, 15, 15, 16],
    cos_bit_row: &[16, 16, 16, 16],
    txfm_type_col: TxfmType::Dct4,
    txfm_type_row: TxfmType::Dct4,
};

static INV_CFG_DCT_DCT_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 6,
    stage_num_row: 6,
    shift: &[0, -5],
    stage_range_col: &[17, 17, 17, 17, 16, 16],
    stage_range_row: &[17, 17, 17, 17, 17, 17],
    cos_bit_col: &[15, 15, 15, 15, 15, 16],
    cos_bit_row: &[15, 15, 15, 15, 15, 15],
    txfm_type_col: TxfmType::Dct8,
    txfm_type_row: TxfmType::Dct8,
};

static INV_CFG_DCT_DCT_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 8,
    stage_num_row: 8,
    shift: &[0, -6],
    stage_range_col: &[18, 18, 18, 18, 18, 18, 17, 17],
    stage_range_row: &[18, 18, 18, 18, 18, 18, 18, 18],
    cos_bit_col: &[14, 14, 14, 14, 14, 14, 14, 15],
    cos_bit_row: &[14, 14, 14, 14, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Dct16,
    txfm_type_row: TxfmType::Dct16,
};

static INV_CFG_DCT_DCT_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 10,
    stage_num_row: 10,
    shift: &[-1, -6],
    stage_range_col: &[18, 18, 18, 18, 18, 18, 18, 18, 17, 17],
    stage_range_row: &[19, 19, 19, 19, 19, 19, 19, 19, 19, 19],
    cos_bit_col: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 15],
    cos_bit_row: &[13, 13, 13, 13, 13, 13, 13, 13, 13, 13],
    txfm_type_col: TxfmType::Dct32,
    txfm_type_row: TxfmType::Dct32,
};

static INV_CFG_DCT_ADST_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 4,
    stage_num_row: 6,
    shift: &[1, -5],
    stage_range_col: &[17, 17, 16, 16],
    stage_range_row: &[16, 16, 16, 16, 16, 16],
    cos_bit_col: &[15, 15, 15, 16],
    cos_bit_row: &[16, 16, 16, 16, 16, 16],
    txfm_type_col: TxfmType::Dct4,
    txfm_type_row: TxfmType::Adst4,
};

static INV_CFG_DCT_ADST_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 6,
    stage_num_row: 8,
    shift: &[-1, -4],
    stage_range_col: &[16, 16, 16, 16, 15, 15],
    stage_range_row: &[17, 17, 17, 17, 17, 17, 17, 17],
    cos_bit_col: &[16, 16, 16, 16, 16, 16],
    cos_bit_row: &[15, 15, 15, 15, 15, 15, 15, 15],
    txfm_type_col: TxfmType::Dct8,
    txfm_type_row: TxfmType::Adst8,
};

static INV_CFG_DCT_ADST_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 8,
    stage_num_row: 10,
    shift: &[1, -7],
    stage_range_col: &[19, 19, 19, 19, 19, 19, 18, 18],
    stage_range_row: &[18, 18, 18, 18, 18, 18, 18, 18, 18, 18],
    cos_bit_col: &[13, 13, 13, 13, 13, 13, 13, 14],
    cos_bit_row: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Dct16,
    txfm_type_row: TxfmType::Adst16,
};

static INV_CFG_DCT_ADST_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 10,
    stage_num_row: 12,
    shift: &[0, -6],
    stage_range_col: &[18, 18, 18, 18, 18, 18, 18, 18, 17, 17],
    stage_range_row: &[18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18],
    cos_bit_col: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 15],
    cos_bit_row: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Dct32,
    txfm_type_row: TxfmType::Adst32,
};

static INV_CFG_ADST_ADST_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 6,
    stage_num_row: 6,
    shift: &[0, -4],
    stage_range_col: &[16, 16, 16, 16, 15, 15],
    stage_range_row: &[16, 16, 16, 16, 16, 16],
    cos_bit_col: &[16, 16, 16, 16, 16, 16],
    cos_bit_row: &[16, 16, 16, 16, 16, 16],
    txfm_type_col: TxfmType::Adst4,
    txfm_type_row: TxfmType::Adst4,
};

static INV_CFG_ADST_ADST_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 8,
    stage_num_row: 8,
    shift: &[-1, -4],
    stage_range_col: &[16, 16, 16, 16, 16, 16, 15, 15],
    stage_range_row: &[17, 17, 17, 17, 17, 17, 17, 17],
    cos_bit_col: &[16, 16, 16, 16, 16, 16, 16, 16],
    cos_bit_row: &[15, 15, 15, 15, 15, 15, 15, 15],
    txfm_type_col: TxfmType::Adst8,
    txfm_type_row: TxfmType::Adst8,
};

static INV_CFG_ADST_ADST_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 10,
    stage_num_row: 10,
    shift: &[0, -6],
    stage_range_col: &[18, 18, 18, 18, 18, 18, 18, 18, 17, 17],
    stage_range_row: &[18, 18, 18, 18, 18, 18, 18, 18, 18, 18],
    cos_bit_col: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 15],
    cos_bit_row: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Adst16,
    txfm_type_row: TxfmType::Adst16,
};

static INV_CFG_ADST_ADST_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 12,
    stage_num_row: 12,
    shift: &[0, -6],
    stage_range_col: &[18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 17, 17],
    stage_range_row: &[18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 18],
    cos_bit_col: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 15],
    cos_bit_row: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Adst32,
    txfm_type_row: TxfmType::Adst32,
};

static INV_CFG_ADST_DCT_4: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 4,
    stage_num_col: 6,
    stage_num_row: 4,
    shift: &[1, -5],
    stage_range_col: &[17, 17, 17, 17, 16, 16],
    stage_range_row: &[16, 16, 16, 16],
    cos_bit_col: &[15, 15, 15, 15, 15, 16],
    cos_bit_row: &[16, 16, 16, 16],
    txfm_type_col: TxfmType::Adst4,
    txfm_type_row: TxfmType::Dct4,
};

static INV_CFG_ADST_DCT_8: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 8,
    stage_num_col: 8,
    stage_num_row: 6,
    shift: &[-1, -4],
    stage_range_col: &[16, 16, 16, 16, 16, 16, 15, 15],
    stage_range_row: &[17, 17, 17, 17, 17, 17],
    cos_bit_col: &[16, 16, 16, 16, 16, 16, 16, 16],
    cos_bit_row: &[15, 15, 15, 15, 15, 15],
    txfm_type_col: TxfmType::Adst8,
    txfm_type_row: TxfmType::Dct8,
};

static INV_CFG_ADST_DCT_16: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 16,
    stage_num_col: 10,
    stage_num_row: 8,
    shift: &[-1, -5],
    stage_range_col: &[17, 17, 17, 17, 17, 17, 17, 17, 16, 16],
    stage_range_row: &[18, 18, 18, 18, 18, 18, 18, 18],
    cos_bit_col: &[15, 15, 15, 15, 15, 15, 15, 15, 15, 16],
    cos_bit_row: &[14, 14, 14, 14, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Adst16,
    txfm_type_row: TxfmType::Dct16,
};

static INV_CFG_ADST_DCT_32: Txfm2dCfg = Txfm2dCfg {
    txfm_size: 32,
    stage_num_col: 12,
    stage_num_row: 10,
    shift: &[0, -6],
    stage_range_col: &[18, 18, 18, 18, 18, 18, 18, 18, 18, 18, 17, 17],
    stage_range_row: &[18, 18, 18, 18, 18, 18, 18, 18, 18, 18],
    cos_bit_col: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 15],
    cos_bit_row: &[14, 14, 14, 14, 14, 14, 14, 14, 14, 14],
    txfm_type_col: TxfmType::Adst32,
    txfm_type_row: TxfmType::Dct32,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cospi::{COS_BIT_MAX, COS_BIT_MIN};

    const TX_TYPES: [TxType; 9] = [
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
    const TX_SIZES: [TxSize; 4] = [TxSize::X4, TxSize::X8, TxSize::X16, TxSize::X32];

    #[test]
    fn selector_indices_roundtrip() {
        for tx_type in TX_TYPES {
            assert_eq!(TxType::try_from(tx_type as u8), Ok(tx_type));
        }
        for tx_size in TX_SIZES {
            assert_eq!(TxSize::try_from(tx_size as u8), Ok(tx_size));
        }
        assert_eq!(TxType::try_from(9), Err(CfgError::InvalidTxType(9)));
        assert_eq!(TxType::try_from(255), Err(CfgError::InvalidTxType(255)));
        assert_eq!(TxSize::try_from(4), Err(CfgError::InvalidTxSize(4)));
    }

    #[test]
    fn tables_cover_every_stage() {
        for tx_type in TX_TYPES {
            for tx_size in TX_SIZES {
                for flip_cfg in [fwd_txfm_cfg(tx_type, tx_size), inv_txfm_cfg(tx_type, tx_size)] {
                    let cfg = flip_cfg.cfg;
                    assert_eq!(cfg.txfm_size, tx_size.size());
                    assert_eq!(cfg.txfm_type_col.size(), tx_size.size());
                    assert_eq!(cfg.txfm_type_row.size(), tx_size.size());
                    assert_eq!(cfg.stage_range_col.len(), cfg.stage_num_col);
                    assert_eq!(cfg.stage_range_row.len(), cfg.stage_num_row);
                    assert_eq!(cfg.cos_bit_col.len(), cfg.stage_num_col);
                    assert_eq!(cfg.cos_bit_row.len(), cfg.stage_num_row);
                    for &bit in cfg.cos_bit_col.iter().chain(cfg.cos_bit_row) {
                        assert!(
                            (COS_BIT_MIN..=COS_BIT_MAX).contains(&bit),
                            "{:?} {:?}: cosine bit {} outside table range",
                            tx_type,
                            tx_size,
                            bit
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn forward_carries_three_shifts_inverse_two() {
        for tx_type in TX_TYPES {
            for tx_size in TX_SIZES {
                assert_eq!(fwd_txfm_cfg(tx_type, tx_size).cfg.shift.len(), 3);
                assert_eq!(inv_txfm_cfg(tx_type, tx_size).cfg.shift.len(), 2);
            }
        }
    }

    #[test]
    fn flipped_variants_share_unflipped_tables() {
        for tx_size in TX_SIZES {
            let ud = fwd_txfm_cfg(TxType::FlipadstDct, tx_size);
            assert!(core::ptr::eq(ud.cfg, fwd_txfm_cfg(TxType::AdstDct, tx_size).cfg));
            assert!(ud.ud_flip && !ud.lr_flip);

            let lr = fwd_txfm_cfg(TxType::DctFlipadst, tx_size);
            assert!(core::ptr::eq(lr.cfg, fwd_txfm_cfg(TxType::DctAdst, tx_size).cfg));
            assert!(!lr.ud_flip && lr.lr_flip);

            let both = inv_txfm_cfg(TxType::FlipadstFlipadst, tx_size);
            assert!(core::ptr::eq(both.cfg, inv_txfm_cfg(TxType::AdstAdst, tx_size).cfg));
            assert!(both.ud_flip && both.lr_flip);

            let plain = inv_txfm_cfg(TxType::DctDct, tx_size);
            assert!(!plain.ud_flip && !plain.lr_flip);
        }
    }
}
