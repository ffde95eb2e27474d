//! Pool entry entity for pre-generated short codes.

/// A single pre-generated short code in the allocation pool.
///
/// Codes are globally unique within the pool and transition from unused to
/// used exactly once; they are never reused or deleted while the mapping
/// they name is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    pub code: String,
    pub used: bool,
}

impl PoolEntry {
    /// Creates a fresh, unallocated pool entry.
    pub fn unused(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            used: false,
        }
    }
}
