use crate::checksum::ChecksumVariant;
use crate::parts::Part;
use crate::str_utils::pad_left;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Account bases below this number use variant A for banks registered under
/// [`RangeKey::AOrB`], the rest use variant B.
pub const AB_BASE_THRESHOLD: u32 = 990_000;

/// The checksum rule attached to a group of bank branches.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeKey {
    /// Variant A or B, depending on the account base.
    AOrB,
    Variant(ChecksumVariant),
}

impl RangeKey {
    pub fn resolve(self, base: u32) -> ChecksumVariant {
        match self {
            RangeKey::AOrB if base < AB_BASE_THRESHOLD => ChecksumVariant::A,
            RangeKey::AOrB => ChecksumVariant::B,
            RangeKey::Variant(variant) => variant,
        }
    }
}

#[derive(Debug)]
pub struct BankRanges {
    pub id: &'static str,
    pub ranges: &'static [RangeInclusive<u32>],
}

#[derive(Debug)]
pub struct BranchRangeEntry {
    pub key: RangeKey,
    pub banks: &'static [BankRanges],
}

impl BranchRangeEntry {
    /// Branch ranges registered for a zero-padded bank id.
    pub fn ranges_for(&self, padded_id: &str) -> Option<&'static [RangeInclusive<u32>]> {
        self.banks
            .iter()
            .find(|bank| bank.id == padded_id)
            .map(|bank| bank.ranges)
    }

    pub fn contains(&self, padded_id: &str, branch: u32) -> bool {
        self.ranges_for(padded_id)
            .is_some_and(|ranges| ranges.iter().any(|range| range.contains(&branch)))
    }
}

/// Find the first entry, in declaration order, that registers `branch` for the
/// bank `id`. The id is zero-padded before the lookup; the branch is compared
/// numerically and range bounds are inclusive.
pub fn find_branch_range(id: &str, branch: u32) -> Option<&'static BranchRangeEntry> {
    let padded_id = pad_left(id, Part::Id.max_len());
    BANK_BRANCH_RANGES
        .iter()
        .find(|entry| entry.contains(&padded_id, branch))
}

pub static BANK_BRANCH_RANGES: &[BranchRangeEntry] = &[
    BranchRangeEntry {
        key: RangeKey::AOrB,
        banks: &[
            BankRanges {
                id: "01",
                ranges: &[1..=999, 1100..=1199, 1800..=1899],
            },
            BankRanges {
                id: "02",
                ranges: &[1..=999, 1200..=1299],
            },
            BankRanges {
                id: "03",
                ranges: &[
                    1..=999,
                    1300..=1399,
                    1500..=1599,
                    1700..=1799,
                    1900..=1999,
                ],
            },
            BankRanges {
                id: "06",
                ranges: &[1..=999, 1400..=1499],
            },
            BankRanges {
                id: "11",
                ranges: &[5000..=6499, 6600..=8999],
            },
            BankRanges {
                id: "12",
                ranges: &[3000..=3299, 3400..=3499, 3600..=3699],
            },
            BankRanges {
                id: "13",
                ranges: &[4900..=4999],
            },
            BankRanges {
                id: "14",
                ranges: &[4700..=4799],
            },
            BankRanges {
                id: "15",
                ranges: &[3900..=3999],
            },
            BankRanges {
                id: "16",
                ranges: &[4400..=4499],
            },
            BankRanges {
                id: "17",
                ranges: &[3300..=3399],
            },
            BankRanges {
                id: "18",
                ranges: &[3500..=3599],
            },
            BankRanges {
                id: "19",
                ranges: &[4600..=4649],
            },
            BankRanges {
                id: "20",
                ranges: &[4100..=4199],
            },
            BankRanges {
                id: "21",
                ranges: &[4800..=4899],
            },
            BankRanges {
                id: "22",
                ranges: &[4000..=4049],
            },
            BankRanges {
                id: "23",
                ranges: &[3700..=3799],
            },
            BankRanges {
                id: "24",
                ranges: &[4300..=4349],
            },
            BankRanges {
                id: "27",
                ranges: &[3800..=3849],
            },
            BankRanges {
                id: "30",
                ranges: &[2900..=2949],
            },
            BankRanges {
                id: "35",
                ranges: &[2400..=2499],
            },
            BankRanges {
                id: "38",
                ranges: &[9000..=9499],
            },
        ],
    },
    BranchRangeEntry {
        key: RangeKey::Variant(ChecksumVariant::D),
        banks: &[BankRanges {
            id: "08",
            ranges: &[6500..=6599],
        }],
    },
    BranchRangeEntry {
        key: RangeKey::Variant(ChecksumVariant::E),
        banks: &[BankRanges {
            id: "09",
            ranges: &[0..=0],
        }],
    },
    BranchRangeEntry {
        key: RangeKey::Variant(ChecksumVariant::F),
        banks: &[
            BankRanges {
                id: "25",
                ranges: &[2500..=2599],
            },
            BankRanges {
                id: "33",
                ranges: &[6700..=6799],
            },
        ],
    },
    BranchRangeEntry {
        key: RangeKey::Variant(ChecksumVariant::G),
        banks: &[
            BankRanges {
                id: "26",
                ranges: &[2600..=2699],
            },
            BankRanges {
                id: "28",
                ranges: &[2100..=2149],
            },
            BankRanges {
                id: "29",
                ranges: &[2150..=2299],
            },
        ],
    },
    BranchRangeEntry {
        key: RangeKey::Variant(ChecksumVariant::X),
        banks: &[BankRanges {
            id: "31",
            ranges: &[2800..=2849],
        }],
    },
];
