use crate::types::{NativeEnum, TuResourceUsageKind};
use cindex_sys::*;

/// One category of memory used by a translation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceUsageEntry {
    /// `None` for categories newer than this crate.
    pub kind: Option<TuResourceUsageKind>,
    /// Bytes used by the category.
    pub amount: u64,
}

/// Snapshot of the memory used by a translation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceUsage {
    pub entries: Vec<ResourceUsageEntry>,
}

impl ResourceUsage {
    pub(crate) fn from_unit(unit: CXTranslationUnit) -> Self {
        let usage = unsafe { clang_getCXTUResourceUsage(unit) };
        let entries = if usage.entries.is_null() || usage.numEntries == 0 {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(usage.entries, usage.numEntries as usize) }
                .iter()
                .map(|entry| ResourceUsageEntry {
                    kind: TuResourceUsageKind::from_raw(entry.kind as i32),
                    amount: entry.amount as u64,
                })
                .collect()
        };
        unsafe { clang_disposeCXTUResourceUsage(usage) };
        ResourceUsage { entries }
    }

    /// Bytes used by `kind`, if libclang reported it.
    pub fn get(&self, kind: TuResourceUsageKind) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.kind == Some(kind))
            .map(|entry| entry.amount)
    }

    /// Bytes used across all categories.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }
}
