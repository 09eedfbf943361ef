//! Enumerations, option sets, and callback results shared across the crate.
//!
//! These are pure translations of libclang's integer constants and never
//! hold a native handle.

pub mod callbacks;
pub mod cursor_kind;
pub mod enums;
pub mod flags;
pub mod indexing;
pub mod type_kind;

pub use callbacks::{ChildVisit, VisitResult, VisitorResult};
pub use cursor_kind::CursorKind;
pub use enums::*;
pub use flags::*;
pub use indexing::*;
pub use type_kind::TypeKind;

use num_enum::TryFromPrimitive;

/// Conversion between a closed enum and the libclang constant it mirrors.
///
/// Decoding is partial: a newer libclang may hand back constants this crate
/// predates, and those decode to `None`. Encoding is total.
pub trait NativeEnum: Sized + Copy {
    /// Looks up the case for a raw constant.
    fn from_raw(raw: i32) -> Option<Self>;

    /// Returns the raw constant for this case.
    fn to_raw(self) -> i32;
}

impl<T> NativeEnum for T
where
    T: TryFromPrimitive<Primitive = i32> + Into<i32> + Copy,
{
    fn from_raw(raw: i32) -> Option<Self> {
        T::try_from_primitive(raw).ok()
    }

    fn to_raw(self) -> i32 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cindex_sys::*;

    /// Scans a raw range and checks that every decoded case encodes back to
    /// a value that decodes to the same case.
    fn assert_round_trips<T: NativeEnum + PartialEq + std::fmt::Debug>(range: std::ops::RangeInclusive<i32>) -> usize {
        let mut mapped = 0;
        for raw in range {
            if let Some(case) = T::from_raw(raw) {
                assert_eq!(T::from_raw(case.to_raw()), Some(case), "raw value {}", raw);
                mapped += 1;
            }
        }
        mapped
    }

    #[test]
    fn test_cursor_kind_round_trip() {
        let mapped = assert_round_trips::<CursorKind>(-16..=1024);
        assert!(mapped > 250);
        assert_eq!(CursorKind::from_raw(0), None);
        assert_eq!(CursorKind::from_raw(99), None);
        assert_eq!(CursorKind::from_raw(i32::MAX), None);
    }

    #[test]
    fn test_type_kind_round_trip() {
        assert_round_trips::<TypeKind>(-16..=1024);
        assert_eq!(TypeKind::from_raw(41), None);
        assert_eq!(TypeKind::from_raw(-1), None);
    }

    #[test]
    fn test_small_tables_round_trip() {
        assert_eq!(assert_round_trips::<ErrorCode>(-8..=64), 5);
        assert_eq!(assert_round_trips::<DiagnosticSeverity>(-8..=64), 5);
        assert_eq!(assert_round_trips::<TypeLayoutError>(-64..=64), 6);
        assert_eq!(assert_round_trips::<CompletionChunkKind>(-8..=64), 21);
        assert_eq!(assert_round_trips::<ExceptionSpecificationKind>(-8..=64), 10);
        assert_eq!(assert_round_trips::<IdxEntityKind>(-8..=64), 28);
        assert_eq!(assert_round_trips::<TuResourceUsageKind>(-8..=64), 14);
        assert_eq!(assert_round_trips::<PrintingPolicyProperty>(-8..=64), 26);
        assert_eq!(assert_round_trips::<CallingConvention>(-8..=256), 24);
        assert_eq!(assert_round_trips::<CommentKind>(-8..=64), 13);
        assert_eq!(assert_round_trips::<IdxEntityLanguage>(-8..=64), 5);
        assert_eq!(assert_round_trips::<Nullability>(-8..=64), 5);
    }

    #[test]
    fn test_choice_round_trip() {
        for choice in [Choice::Default, Choice::Enabled, Choice::Disabled] {
            assert_eq!(Choice::from_raw(choice.to_raw()), Some(choice));
        }
        assert_eq!(Choice::Default.to_raw(), CXChoice_Default as i32);
        assert_eq!(Choice::Enabled.to_raw(), CXChoice_Enabled as i32);
        assert_eq!(Choice::Disabled.to_raw(), CXChoice_Disabled as i32);
        assert_eq!(Choice::from_raw(3), None);
    }

    #[test]
    fn test_tables_agree_with_headers() {
        assert_eq!(CursorKind::StructDecl.to_raw(), CXCursor_StructDecl as i32);
        assert_eq!(CursorKind::CxxMethod.to_raw(), CXCursor_CXXMethod as i32);
        assert_eq!(CursorKind::TranslationUnit.to_raw(), CXCursor_TranslationUnit as i32);
        assert_eq!(CursorKind::MacroExpansion.to_raw(), CXCursor_MacroInstantiation as i32);
        assert_eq!(CursorKind::GccAsmStmt.to_raw(), CXCursor_AsmStmt as i32);
        assert_eq!(CursorKind::OverloadCandidate.to_raw(), CXCursor_OverloadCandidate as i32);
        assert_eq!(TypeKind::Record.to_raw(), CXType_Record as i32);
        assert_eq!(TypeKind::Elaborated.to_raw(), CXType_Elaborated as i32);
        assert_eq!(TypeKind::Atomic.to_raw(), CXType_Atomic as i32);
        assert_eq!(CallingConvention::Win64.to_raw(), CXCallingConv_X86_64Win64 as i32);
        assert_eq!(CallingConvention::Unexposed.to_raw(), CXCallingConv_Unexposed as i32);
        assert_eq!(TypeLayoutError::Undeduced.to_raw(), CXTypeLayoutError_Undeduced as i32);
        assert_eq!(TokenKind::Comment.to_raw(), CXToken_Comment as i32);
        assert_eq!(
            PrintingPolicyProperty::LAST.to_raw(),
            CXPrintingPolicy_LastProperty as i32
        );
        assert_eq!(TuResourceUsageKind::LAST.to_raw(), CXTUResourceUsage_Last as i32);
        assert_eq!(TuResourceUsageKind::FIRST.to_raw(), CXTUResourceUsage_First as i32);
    }

    #[test]
    fn test_aliases_decode_to_one_case() {
        assert_eq!(CursorKind::ASM_STMT, CursorKind::GccAsmStmt);
        assert_eq!(
            CursorKind::from_raw(CXCursor_MacroInstantiation as i32),
            Some(CursorKind::MacroExpansion)
        );
        assert_eq!(
            TypeKind::from_raw(TypeKind::OCL_INTEL_SUBGROUP_AVC_IME_RESULT_SINGLE_REF_STREAMOUT.to_raw()),
            Some(TypeKind::OclIntelSubgroupAvcImeResultSingleReferenceStreamout)
        );
        assert_eq!(CallingConvention::from_raw(10), Some(CallingConvention::X86_64_WIN64));
    }

    #[test]
    fn test_sentinels_delimit_ranges() {
        assert!(CursorKind::FIRST_DECL.to_raw() <= CursorKind::LAST_DECL.to_raw());
        assert!(CursorKind::LAST_DECL.to_raw() < CursorKind::FIRST_REF.to_raw());
        assert_eq!(CursorKind::FIRST_EXPR.to_raw(), 100);
        assert_eq!(CursorKind::FIRST_STMT.to_raw(), 200);
        assert_eq!(TypeKind::FIRST_BUILTIN, TypeKind::Void);
        assert_eq!(TuResourceUsageKind::MEMORY_IN_BYTES_BEGIN, TuResourceUsageKind::FIRST);
        assert_eq!(TuResourceUsageKind::MEMORY_IN_BYTES_END, TuResourceUsageKind::LAST);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(CursorKind::StructDecl.is_declaration());
        assert!(CursorKind::TypeRef.is_reference());
        assert!(CursorKind::CallExpr.is_expression());
        assert!(CursorKind::ReturnStmt.is_statement());
        assert!(CursorKind::PackedAttr.is_attribute());
        assert!(CursorKind::NoDeclFound.is_invalid());
        assert!(CursorKind::TranslationUnit.is_translation_unit());
        assert!(CursorKind::MacroDefinition.is_preprocessing());
        assert!(CursorKind::UnexposedExpr.is_unexposed());
        assert_eq!(CursorKind::StructDecl.spelling(), "StructDecl");
        assert_eq!(TypeKind::Pointer.spelling(), "Pointer");
        assert!(TypeKind::Int.is_integer());
        assert!(TypeKind::Double.is_floating_point());
        assert!(TypeKind::ConstantArray.is_array());
    }

    #[test]
    fn test_resource_usage_kinds_have_names() {
        for raw in TuResourceUsageKind::FIRST.to_raw()..=TuResourceUsageKind::LAST.to_raw() {
            let kind = TuResourceUsageKind::from_raw(raw).expect("contiguous kinds");
            assert!(!kind.name().is_empty(), "{:?}", kind);
        }
    }
}
