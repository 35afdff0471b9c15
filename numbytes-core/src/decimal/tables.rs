//! Power-of-ten tables for the decimal converter
//!
//! Every mantissa is normalized so bit 63 is set and rounded to nearest.
//! Entry `k - 1` holds `10^k` (or `10^-k`) as `mantissa / 2^64 * 2^exp`,
//! where `exp` comes from the shared exponent table: the reciprocal of a
//! power with exponent `e` has exponent `1 - e`.

/// Number of entries in the low (`10^1..=10^15`) tables
pub const LOW_POWERS: usize = 15;

/// Number of entries in the high (`10^16..=10^336` step 16) tables
pub const HIGH_POWERS: usize = 21;

/// Decimal exponents at or above this magnitude always overflow or underflow
pub const MAX_DECIMAL_EXPONENT: u32 = 22 * 16;

/// Mantissas of `10^1` through `10^15` (exact)
pub const POWERS_OF_10: [u64; LOW_POWERS] = [
    0xa000_0000_0000_0000,
    0xc800_0000_0000_0000,
    0xfa00_0000_0000_0000,
    0x9c40_0000_0000_0000,
    0xc350_0000_0000_0000,
    0xf424_0000_0000_0000,
    0x9896_8000_0000_0000,
    0xbebc_2000_0000_0000,
    0xee6b_2800_0000_0000,
    0x9502_f900_0000_0000,
    0xba43_b740_0000_0000,
    0xe8d4_a510_0000_0000,
    0x9184_e72a_0000_0000,
    0xb5e6_20f4_8000_0000,
    0xe35f_a931_a000_0000,
];

/// Mantissas of `10^-1` through `10^-15`
pub const POWERS_OF_0_1: [u64; LOW_POWERS] = [
    0xcccc_cccc_cccc_cccd,
    0xa3d7_0a3d_70a3_d70a,
    0x8312_6e97_8d4f_df3b,
    0xd1b7_1758_e219_652c,
    0xa7c5_ac47_1b47_8423,
    0x8637_bd05_af6c_69b6,
    0xd6bf_94d5_e57a_42bc,
    0xabcc_7711_8461_cefd,
    0x8970_5f41_36b4_a597,
    0xdbe6_fece_bded_d5bf,
    0xafeb_ff0b_cb24_aaff,
    0x8cbc_cc09_6f50_88cc,
    0xe12e_1342_4bb4_0e13,
    0xb424_dc35_095c_d80f,
    0x901d_7cf7_3ab0_acd9,
];

/// Binary exponents shared by `10^k` and `10^-k` for `k` in `1..=15`
pub const POWER_EXPONENTS: [i32; LOW_POWERS] = [
    4,
    7,
    10,
    14,
    17,
    20,
    24,
    27,
    30,
    34,
    37,
    40,
    44,
    47,
    50,
];

/// Mantissas of `10^16` through `10^336` in steps of 16
pub const POWERS_OF_1E16: [u64; HIGH_POWERS] = [
    0x8e1b_c9bf_0400_0000,
    0x9dc5_ada8_2b70_b59e,
    0xaf29_8d05_0e43_95d7,
    0xc278_1f49_ffcf_a6d5,
    0xd7e7_7a8f_87da_f7fc,
    0xefb3_ab16_c59b_14a3,
    0x850f_adc0_9923_329e,
    0x93ba_47c9_80e9_8ce0,
    0xa402_b9c5_a8d3_a6e7,
    0xb616_a12b_7fe6_17aa,
    0xca28_a291_859b_bf93,
    0xe070_f78d_3927_556b,
    0xf92e_0c35_3782_6146,
    0x8a52_96ff_e33c_c930,
    0x9991_a6f3_d6bf_1766,
    0xaa7e_ebfb_9df9_de8e,
    0xbd49_d14a_a79d_bc82,
    0xd226_fc19_5c6a_2f8c,
    0xe950_df20_247c_83fd,
    0x8184_2f29_f2cc_e376,
    0x8fca_c257_558e_e4e6,
];

/// Mantissas of `10^-16` through `10^-336` in steps of 16
pub const POWERS_OF_1E_16: [u64; HIGH_POWERS] = [
    0xe695_94be_c44d_e15b,
    0xcfb1_1ead_4539_94ba,
    0xbb12_7c53_b17e_c159,
    0xa87f_ea27_a539_e9a5,
    0x97c5_60ba_6b09_19a6,
    0x88b4_02f7_fd75_539b,
    0xf643_35bc_f065_d37d,
    0xddd0_467c_64bc_e4a1,
    0xc7ca_ba6e_7c53_82c9,
    0xb3f4_e093_db73_a093,
    0xa217_27db_38cb_0030,
    0x91ff_8377_5423_cc06,
    0x8380_dea9_3da4_bc60,
    0xece5_3cec_4a31_4ebe,
    0xd560_5fcd_cf32_e1d7,
    0xc031_4325_637a_193a,
    0xad1c_8eab_5ee4_3b67,
    0x9bec_ce62_836a_c577,
    0x8c71_dcd9_ba0b_4926,
    0xfd00_b897_4782_38d1,
    0xe3e2_7a44_4d8d_98b8,
];

/// Binary exponents shared by `10^16k` and `10^-16k` for `k` in `1..=21`
pub const POWER_EXPONENTS_1E16: [i32; HIGH_POWERS] = [
    54,
    107,
    160,
    213,
    266,
    319,
    373,
    426,
    479,
    532,
    585,
    638,
    691,
    745,
    798,
    851,
    904,
    957,
    1010,
    1064,
    1117,
];
