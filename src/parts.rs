use crate::str_utils::is_digits_only;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumIter, IntoEnumIterator};

/// The four components of a NZ bank account number, in account order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Part {
    Id,
    Branch,
    Base,
    Suffix,
}

impl Part {
    /// Maximum number of digits a part may hold. Shorter values are zero-padded
    /// up to this width before any lookup or checksum.
    pub const fn max_len(self) -> usize {
        match self {
            Part::Id => 2,
            Part::Branch => 4,
            Part::Base => 8,
            Part::Suffix => 4,
        }
    }
}

// (start, end) byte offsets used when an account number is given without any delimiter.
const FIXED_WIDTH_SLICES: [(usize, Option<usize>); 4] =
    [(0, Some(2)), (2, Some(5)), (5, Some(12)), (12, None)];

/// An account number split into its parts. Parts are kept as strings so that
/// leading zeros survive; a part is `None` when the input did not provide it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountParts {
    pub id: Option<String>,
    pub branch: Option<String>,
    pub base: Option<String>,
    pub suffix: Option<String>,
}

impl AccountParts {
    pub fn new(
        id: impl Into<String>,
        branch: impl Into<String>,
        base: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        AccountParts {
            id: Some(id.into()),
            branch: Some(branch.into()),
            base: Some(base.into()),
            suffix: Some(suffix.into()),
        }
    }

    fn from_segments(segments: &[&str]) -> Self {
        let segment = |index: usize| segments.get(index).map(|s| s.to_string());
        AccountParts {
            id: segment(0),
            branch: segment(1),
            base: segment(2),
            suffix: segment(3),
        }
    }

    pub fn get(&self, part: Part) -> Option<&str> {
        match part {
            Part::Id => self.id.as_deref(),
            Part::Branch => self.branch.as_deref(),
            Part::Base => self.base.as_deref(),
            Part::Suffix => self.suffix.as_deref(),
        }
    }

    /// Every part is present, made of digits only, and no longer than its
    /// maximum width.
    pub fn is_structurally_valid(&self) -> bool {
        Part::iter().all(|part| match self.get(part) {
            Some(value) => is_digits_only(value) && value.len() <= part.max_len(),
            None => false,
        })
    }

    /// Rebuild a full account number with `separator` between the parts.
    /// Missing parts are rendered as empty strings.
    pub fn join(&self, separator: &str) -> String {
        Part::iter()
            .map(|part| self.get(part).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// The shapes of input accepted by the parser. The kind of input is decided
/// once, at the boundary, instead of being probed during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountInput {
    /// A full account number, with or without delimiters.
    Text(String),
    /// An account number that was already split by the caller.
    Parts(AccountParts),
    /// Anything else. Always parses to an empty record.
    Unrecognized,
}

impl From<&str> for AccountInput {
    fn from(value: &str) -> Self {
        AccountInput::Text(value.to_string())
    }
}

impl From<String> for AccountInput {
    fn from(value: String) -> Self {
        AccountInput::Text(value)
    }
}

impl From<&String> for AccountInput {
    fn from(value: &String) -> Self {
        AccountInput::Text(value.clone())
    }
}

impl From<AccountParts> for AccountInput {
    fn from(value: AccountParts) -> Self {
        AccountInput::Parts(value)
    }
}

impl From<&AccountParts> for AccountInput {
    fn from(value: &AccountParts) -> Self {
        AccountInput::Parts(value.clone())
    }
}

impl From<&Value> for AccountInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => AccountInput::Text(text.clone()),
            Value::Object(map)
                if map.len() == 4 && Part::iter().all(|p| map.contains_key(&p.to_string())) =>
            {
                // Non-string values are kept as missing parts, so they fail the structural check.
                let field = |part: Part| {
                    map.get(&part.to_string())
                        .and_then(Value::as_str)
                        .map(str::to_string)
                };
                AccountInput::Parts(AccountParts {
                    id: field(Part::Id),
                    branch: field(Part::Branch),
                    base: field(Part::Base),
                    suffix: field(Part::Suffix),
                })
            }
            _ => AccountInput::Unrecognized,
        }
    }
}

impl From<Value> for AccountInput {
    fn from(value: Value) -> Self {
        AccountInput::from(&value)
    }
}

/// Split an input into its parts without validating anything.
///
/// Strings are split on every character that is not an ASCII digit. When the
/// string has no delimiter at all it is sliced at fixed offsets instead
/// (2, 3 and 7 characters, the rest being the suffix). Empty segments are
/// dropped and the remaining ones are assigned in order to id, branch, base
/// and suffix. Pre-split parts are returned as they are.
pub fn get_parts_object(input: impl Into<AccountInput>) -> AccountParts {
    match input.into() {
        AccountInput::Parts(parts) => parts,
        AccountInput::Text(text) => AccountParts::from_segments(&split_account_string(&text)),
        AccountInput::Unrecognized => AccountParts::default(),
    }
}

fn split_account_string(input: &str) -> Vec<&str> {
    let segments: Vec<&str> = input.split(|c: char| !c.is_ascii_digit()).collect();

    let segments = if segments.len() == 1 {
        // No delimiter: the input is only ASCII digits, so byte offsets are char boundaries.
        FIXED_WIDTH_SLICES
            .iter()
            .map(|&(start, end)| slice_clamped(input, start, end))
            .collect()
    } else {
        segments
    };

    segments.into_iter().filter(|s| !s.is_empty()).collect()
}

fn slice_clamped(input: &str, start: usize, end: Option<usize>) -> &str {
    let len = input.len();
    let start = start.min(len);
    let end = end.map_or(len, |end| end.min(len)).max(start);
    &input[start..end]
}
