//! Type kinds.
//!
//! Discriminants are the stable `CXTypeKind` values.

use crate::types::NativeEnum;
use cindex_sys::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The kind of a [`Type`](crate::core::ty::Type).
///
/// `CXType_Invalid` is part of the table so that raw values round-trip,
/// but [`Type`](crate::core::ty::Type) is never constructed with it: every
/// accessor that may produce an invalid type returns `Option<Type>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum TypeKind {
    /// Represents an invalid type (e.g. where no type is available).
    Invalid = 0,
    /// A type whose specific kind is not exposed via this interface.
    Unexposed = 1,

    // ========== BUILTIN TYPES ==========
    Void = 2,
    Bool = 3,
    /// `char` on targets where it is unsigned.
    CharU = 4,
    UChar = 5,
    Char16 = 6,
    Char32 = 7,
    UShort = 8,
    UInt = 9,
    ULong = 10,
    ULongLong = 11,
    UInt128 = 12,
    /// `char` on targets where it is signed.
    CharS = 13,
    SChar = 14,
    WChar = 15,
    Short = 16,
    Int = 17,
    Long = 18,
    LongLong = 19,
    Int128 = 20,
    Float = 21,
    Double = 22,
    LongDouble = 23,
    NullPtr = 24,
    Overload = 25,
    Dependent = 26,
    ObjCId = 27,
    ObjCClass = 28,
    ObjCSel = 29,
    Float128 = 30,
    Half = 31,
    Float16 = 32,
    ShortAccum = 33,
    Accum = 34,
    LongAccum = 35,
    UShortAccum = 36,
    UAccum = 37,
    ULongAccum = 38,
    BFloat16 = 39,
    Ibm128 = 40,

    // ========== COMPOUND TYPES ==========
    Complex = 100,
    Pointer = 101,
    BlockPointer = 102,
    LValueReference = 103,
    RValueReference = 104,
    Record = 105,
    Enum = 106,
    Typedef = 107,
    ObjCInterface = 108,
    ObjCObjectPointer = 109,
    FunctionNoProto = 110,
    FunctionProto = 111,
    ConstantArray = 112,
    Vector = 113,
    IncompleteArray = 114,
    VariableArray = 115,
    DependentSizedArray = 116,
    MemberPointer = 117,
    Auto = 118,
    /// A type that was referred to using an elaborated type keyword, e.g.
    /// `struct S`, or via a qualified name, e.g. `N::M::type`.
    Elaborated = 119,
    Pipe = 120,

    // ========== OPENCL IMAGES ==========
    OclImage1dRo = 121,
    OclImage1dArrayRo = 122,
    OclImage1dBufferRo = 123,
    OclImage2dRo = 124,
    OclImage2dArrayRo = 125,
    OclImage2dDepthRo = 126,
    OclImage2dArrayDepthRo = 127,
    OclImage2dMsaaRo = 128,
    OclImage2dArrayMsaaRo = 129,
    OclImage2dMsaaDepthRo = 130,
    OclImage2dArrayMsaaDepthRo = 131,
    OclImage3dRo = 132,
    OclImage1dWo = 133,
    OclImage1dArrayWo = 134,
    OclImage1dBufferWo = 135,
    OclImage2dWo = 136,
    OclImage2dArrayWo = 137,
    OclImage2dDepthWo = 138,
    OclImage2dArrayDepthWo = 139,
    OclImage2dMsaaWo = 140,
    OclImage2dArrayMsaaWo = 141,
    OclImage2dMsaaDepthWo = 142,
    OclImage2dArrayMsaaDepthWo = 143,
    OclImage3dWo = 144,
    OclImage1dRw = 145,
    OclImage1dArrayRw = 146,
    OclImage1dBufferRw = 147,
    OclImage2dRw = 148,
    OclImage2dArrayRw = 149,
    OclImage2dDepthRw = 150,
    OclImage2dArrayDepthRw = 151,
    OclImage2dMsaaRw = 152,
    OclImage2dArrayMsaaRw = 153,
    OclImage2dMsaaDepthRw = 154,
    OclImage2dArrayMsaaDepthRw = 155,
    OclImage3dRw = 156,
    OclSampler = 157,
    OclEvent = 158,
    OclQueue = 159,
    OclReserveId = 160,

    ObjCObject = 161,
    ObjCTypeParam = 162,
    Attributed = 163,

    // ========== INTEL SUBGROUP AVC ==========
    OclIntelSubgroupAvcMcePayload = 164,
    OclIntelSubgroupAvcImePayload = 165,
    OclIntelSubgroupAvcRefPayload = 166,
    OclIntelSubgroupAvcSicPayload = 167,
    OclIntelSubgroupAvcMceResult = 168,
    OclIntelSubgroupAvcImeResult = 169,
    OclIntelSubgroupAvcRefResult = 170,
    OclIntelSubgroupAvcSicResult = 171,
    OclIntelSubgroupAvcImeResultSingleReferenceStreamout = 172,
    OclIntelSubgroupAvcImeResultDualReferenceStreamout = 173,
    OclIntelSubgroupAvcImeSingleReferenceStreamin = 174,
    OclIntelSubgroupAvcImeDualReferenceStreamin = 175,

    ExtVector = 176,
    Atomic = 177,
    BtfTagAttributed = 178,
    HlslResource = 179,
    HlslAttributedResource = 180,
    HlslInlineSpirv = 181,
}

impl TypeKind {
    pub const FIRST_BUILTIN: TypeKind = TypeKind::Void;
    pub const LAST_BUILTIN: TypeKind = TypeKind::Ibm128;

    /// Older spellings of the Intel AVC streamout/streamin kinds.
    pub const OCL_INTEL_SUBGROUP_AVC_IME_RESULT_SINGLE_REF_STREAMOUT: TypeKind =
        TypeKind::OclIntelSubgroupAvcImeResultSingleReferenceStreamout;
    pub const OCL_INTEL_SUBGROUP_AVC_IME_RESULT_DUAL_REF_STREAMOUT: TypeKind =
        TypeKind::OclIntelSubgroupAvcImeResultDualReferenceStreamout;
    pub const OCL_INTEL_SUBGROUP_AVC_IME_SINGLE_REF_STREAMIN: TypeKind =
        TypeKind::OclIntelSubgroupAvcImeSingleReferenceStreamin;
    pub const OCL_INTEL_SUBGROUP_AVC_IME_DUAL_REF_STREAMIN: TypeKind =
        TypeKind::OclIntelSubgroupAvcImeDualReferenceStreamin;

    /// Returns libclang's name for this kind, e.g. `"Pointer"`.
    pub fn spelling(self) -> String {
        crate::internal::utils::from_cx_string(unsafe {
            clang_getTypeKindSpelling(self.to_raw() as CXTypeKind)
        })
    }

    /// Whether this is one of the builtin scalar kinds.
    pub fn is_builtin(self) -> bool {
        (Self::FIRST_BUILTIN.to_raw()..=Self::LAST_BUILTIN.to_raw()).contains(&self.to_raw())
    }

    /// Whether values of this kind are integers.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TypeKind::Bool
                | TypeKind::CharU
                | TypeKind::UChar
                | TypeKind::Char16
                | TypeKind::Char32
                | TypeKind::UShort
                | TypeKind::UInt
                | TypeKind::ULong
                | TypeKind::ULongLong
                | TypeKind::UInt128
                | TypeKind::CharS
                | TypeKind::SChar
                | TypeKind::WChar
                | TypeKind::Short
                | TypeKind::Int
                | TypeKind::Long
                | TypeKind::LongLong
                | TypeKind::Int128
        )
    }

    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            TypeKind::Float
                | TypeKind::Double
                | TypeKind::LongDouble
                | TypeKind::Float128
                | TypeKind::Half
                | TypeKind::Float16
                | TypeKind::BFloat16
                | TypeKind::Ibm128
        )
    }

    /// Whether this is one of the array kinds.
    pub fn is_array(self) -> bool {
        matches!(
            self,
            TypeKind::ConstantArray
                | TypeKind::IncompleteArray
                | TypeKind::VariableArray
                | TypeKind::DependentSizedArray
        )
    }

    pub fn is_function(self) -> bool {
        matches!(self, TypeKind::FunctionProto | TypeKind::FunctionNoProto)
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
