//! Identity types.

use serde::{Deserialize, Serialize};

/// External identifier of a row-source row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RowId(pub i32);

impl From<i32> for RowId {
    fn from(v: i32) -> Self {
        RowId(v)
    }
}

impl core::fmt::Display for RowId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
