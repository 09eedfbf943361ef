use crate::types::{NativeEnum, PrintingPolicyProperty};
use cindex_sys::*;
use std::marker::PhantomData;

/// Options that control how declarations and types are pretty-printed.
/// Disposed on drop.
#[derive(Debug)]
pub struct PrintingPolicy<'tu> {
    raw: CXPrintingPolicy,
    _marker: PhantomData<&'tu ()>,
}

unsafe impl Send for PrintingPolicy<'_> {}

impl PrintingPolicy<'_> {
    pub(crate) fn from_raw(raw: CXPrintingPolicy) -> Self {
        PrintingPolicy {
            raw,
            _marker: PhantomData,
        }
    }

    pub(crate) fn as_raw(&self) -> CXPrintingPolicy {
        self.raw
    }

    pub fn get(&self, property: PrintingPolicyProperty) -> u32 {
        unsafe { clang_PrintingPolicy_getProperty(self.raw, property.to_raw() as CXPrintingPolicyProperty) }
    }

    pub fn set(&mut self, property: PrintingPolicyProperty, value: u32) {
        unsafe { clang_PrintingPolicy_setProperty(self.raw, property.to_raw() as CXPrintingPolicyProperty, value) }
    }

    pub fn is_enabled(&self, property: PrintingPolicyProperty) -> bool {
        self.get(property) != 0
    }

    pub fn set_enabled(&mut self, property: PrintingPolicyProperty, enabled: bool) {
        self.set(property, enabled as u32)
    }
}

impl Drop for PrintingPolicy<'_> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { clang_PrintingPolicy_dispose(self.raw) }
        }
    }
}
