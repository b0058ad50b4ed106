use super::{ChecksumAlgorithm, ChecksumVariant};

// Weights are laid out as id (2), branch (4), base (8), suffix (4).

static VARIANT_A: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [0, 0, 6, 3, 7, 9, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0],
    modulo: 11,
    special_case: false,
};

static VARIANT_B: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [0, 0, 0, 0, 0, 0, 0, 0, 10, 5, 8, 4, 2, 1, 0, 0, 0, 0],
    modulo: 11,
    special_case: false,
};

static VARIANT_C: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [3, 7, 0, 0, 0, 0, 9, 1, 10, 5, 3, 4, 2, 1, 0, 0, 0, 0],
    modulo: 11,
    special_case: false,
};

static VARIANT_D: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [0, 0, 0, 0, 0, 0, 0, 7, 6, 5, 4, 3, 2, 1, 0, 0, 0, 0],
    modulo: 11,
    special_case: false,
};

static VARIANT_E: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 4, 3, 2, 0, 0, 0, 1],
    modulo: 11,
    special_case: true,
};

static VARIANT_F: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [0, 0, 0, 0, 0, 0, 0, 1, 7, 3, 1, 7, 3, 1, 0, 0, 0, 0],
    modulo: 10,
    special_case: false,
};

static VARIANT_G: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [0, 0, 0, 0, 0, 0, 0, 1, 3, 7, 1, 3, 7, 1, 0, 3, 7, 1],
    modulo: 10,
    special_case: true,
};

// Banks without a checksum rule: every total divides by 1.
static VARIANT_X: ChecksumAlgorithm = ChecksumAlgorithm {
    weighting: [0; 18],
    modulo: 1,
    special_case: false,
};

pub fn get_checksum_algorithm(variant: ChecksumVariant) -> &'static ChecksumAlgorithm {
    match variant {
        ChecksumVariant::A => &VARIANT_A,
        ChecksumVariant::B => &VARIANT_B,
        ChecksumVariant::C => &VARIANT_C,
        ChecksumVariant::D => &VARIANT_D,
        ChecksumVariant::E => &VARIANT_E,
        ChecksumVariant::F => &VARIANT_F,
        ChecksumVariant::G => &VARIANT_G,
        ChecksumVariant::X => &VARIANT_X,
    }
}
