use crate::core::cursor::Cursor;
use crate::core::error::{ClangError, ClangResult};
#[cfg(feature = "clang_17")]
use crate::core::printing_policy::PrintingPolicy;
use crate::core::translation_unit::TranslationUnit;
use crate::internal::layout::layout_result;
use crate::internal::utils::{from_cx_string, from_cx_string_opt, to_cstring};
use crate::internal::visitor;
use crate::types::{
    CallingConvention, ExceptionSpecificationKind, NativeEnum, Nullability, RefQualifier,
    TypeKind, VisitorResult,
};
use cindex_sys::*;
use std::fmt;

/// A view of a type in a translation unit.
///
/// Types are cheap to copy and borrow their unit. Invalid types are never
/// handed out; accessors that may not produce a type return `Option`.
#[derive(Clone, Copy)]
pub struct Type<'tu> {
    raw: CXType,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Type<'tu> {
    pub(crate) fn from_raw(raw: CXType, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        (raw.kind != CXType_Invalid).then_some(Type { raw, tu })
    }

    fn derived(&self, raw: CXType) -> Option<Type<'tu>> {
        Type::from_raw(raw, self.tu)
    }

    /// The raw `CXTypeKind`.
    pub fn raw_kind(&self) -> i32 {
        self.raw.kind as i32
    }

    /// # Panics
    ///
    /// Panics if libclang reports a kind this crate does not know, which
    /// means the loaded libclang is newer than the kind table.
    pub fn kind(&self) -> TypeKind {
        let raw = self.raw_kind();
        TypeKind::from_raw(raw).unwrap_or_else(|| panic!("Unknown type kind: {}", raw))
    }

    /// The type as written, e.g. `const char *`.
    pub fn spelling(&self) -> String {
        from_cx_string(unsafe { clang_getTypeSpelling(self.raw) })
    }

    /// The type with typedefs and sugar removed.
    pub fn canonical(&self) -> Type<'tu> {
        Type {
            raw: unsafe { clang_getCanonicalType(self.raw) },
            tu: self.tu,
        }
    }

    /// The declaration of a tag, typedef or Objective-C interface type.
    pub fn declaration(&self) -> Option<Cursor<'tu>> {
        Cursor::from_raw(unsafe { clang_getTypeDeclaration(self.raw) }, self.tu)
    }

    pub fn typedef_name(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_getTypedefName(self.raw) })
    }

    // ========== QUALIFIERS ==========

    /// Whether the type is `const`, looking through typedefs.
    pub fn is_const_qualified(&self) -> bool {
        unsafe { clang_isConstQualifiedType(self.canonical().raw) != 0 }
    }

    pub fn is_volatile_qualified(&self) -> bool {
        unsafe { clang_isVolatileQualifiedType(self.canonical().raw) != 0 }
    }

    pub fn is_restrict_qualified(&self) -> bool {
        unsafe { clang_isRestrictQualifiedType(self.canonical().raw) != 0 }
    }

    /// Whether `const` is written on this type itself. A typedef of a
    /// `const` type is not literally `const`.
    pub fn is_literally_const_qualified(&self) -> bool {
        unsafe { clang_isConstQualifiedType(self.raw) != 0 }
    }

    pub fn is_literally_volatile_qualified(&self) -> bool {
        unsafe { clang_isVolatileQualifiedType(self.raw) != 0 }
    }

    pub fn is_literally_restrict_qualified(&self) -> bool {
        unsafe { clang_isRestrictQualifiedType(self.raw) != 0 }
    }

    pub fn address_space(&self) -> u32 {
        unsafe { clang_getAddressSpace(self.raw) }
    }

    pub fn nullability(&self) -> Option<Nullability> {
        Nullability::from_raw(unsafe { clang_Type_getNullability(self.raw) } as i32)
            .filter(|nullability| *nullability != Nullability::Invalid)
    }

    /// The ref-qualifier of a C++ member function type.
    pub fn ref_qualifier(&self) -> Option<RefQualifier> {
        RefQualifier::from_raw(unsafe { clang_Type_getCXXRefQualifier(self.raw) } as i32)
            .filter(|qualifier| *qualifier != RefQualifier::None)
    }

    /// The type without `const`, `volatile` and `restrict`.
    #[cfg(feature = "clang_16")]
    pub fn unqualified(&self) -> Type<'tu> {
        Type {
            raw: unsafe { clang_getUnqualifiedType(self.raw) },
            tu: self.tu,
        }
    }

    /// The referenced type of a reference, or the type itself.
    #[cfg(feature = "clang_16")]
    pub fn non_reference(&self) -> Type<'tu> {
        Type {
            raw: unsafe { clang_getNonReferenceType(self.raw) },
            tu: self.tu,
        }
    }

    // ========== COMPONENTS ==========

    /// The pointee of a pointer, reference or block pointer type.
    pub fn pointee(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_getPointeeType(self.raw) })
    }

    /// The element type of an array, vector or complex type.
    pub fn element_type(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_getElementType(self.raw) })
    }

    pub fn array_element_type(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_getArrayElementType(self.raw) })
    }

    pub fn array_size(&self) -> Option<u64> {
        u64::try_from(unsafe { clang_getArraySize(self.raw) }).ok()
    }

    /// Element count of an array or vector type.
    pub fn num_elements(&self) -> Option<u64> {
        u64::try_from(unsafe { clang_getNumElements(self.raw) }).ok()
    }

    /// The type named by an elaborated type, e.g. `S` in `struct S`.
    pub fn named_type(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_Type_getNamedType(self.raw) })
    }

    /// The type an attributed type modifies.
    pub fn modified_type(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_Type_getModifiedType(self.raw) })
    }

    /// The value type of an `_Atomic` type.
    pub fn value_type(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_Type_getValueType(self.raw) })
    }

    /// The class of a member pointer type.
    pub fn class_type(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_Type_getClassType(self.raw) })
    }

    pub fn template_arguments(&self) -> Option<Vec<Type<'tu>>> {
        let count = u32::try_from(unsafe { clang_Type_getNumTemplateArguments(self.raw) }).ok()?;
        Some(
            (0..count)
                .filter_map(|i| self.derived(unsafe { clang_Type_getTemplateArgumentAsType(self.raw, i) }))
                .collect(),
        )
    }

    pub fn objc_encoding(&self) -> String {
        from_cx_string(unsafe { clang_Type_getObjCEncoding(self.raw) })
    }

    // ========== FUNCTIONS ==========

    /// The return type of a function type.
    pub fn result_type(&self) -> Option<Type<'tu>> {
        self.derived(unsafe { clang_getResultType(self.raw) })
    }

    /// The parameter types of a function type.
    pub fn argument_types(&self) -> Option<Vec<Type<'tu>>> {
        let count = u32::try_from(unsafe { clang_getNumArgTypes(self.raw) }).ok()?;
        Some(
            (0..count)
                .filter_map(|i| self.derived(unsafe { clang_getArgType(self.raw, i) }))
                .collect(),
        )
    }

    pub fn is_variadic(&self) -> bool {
        unsafe { clang_isFunctionTypeVariadic(self.raw) != 0 }
    }

    pub fn calling_convention(&self) -> Option<CallingConvention> {
        CallingConvention::from_raw(unsafe { clang_getFunctionTypeCallingConv(self.raw) } as i32)
            .filter(|convention| *convention != CallingConvention::Invalid)
    }

    pub fn exception_specification(&self) -> Option<ExceptionSpecificationKind> {
        ExceptionSpecificationKind::from_raw(unsafe { clang_getExceptionSpecificationType(self.raw) })
    }

    // ========== LAYOUT ==========

    pub fn is_pod(&self) -> bool {
        unsafe { clang_isPODType(self.raw) != 0 }
    }

    pub fn is_transparent_tag_typedef(&self) -> bool {
        unsafe { clang_Type_isTransparentTagTypedef(self.raw) != 0 }
    }

    /// Size in bytes.
    pub fn size_of(&self) -> ClangResult<u64> {
        layout_result(unsafe { clang_Type_getSizeOf(self.raw) })
    }

    /// Alignment in bytes.
    pub fn align_of(&self) -> ClangResult<u64> {
        layout_result(unsafe { clang_Type_getAlignOf(self.raw) })
    }

    /// Offset in bits of the field named `field` in this record type.
    pub fn offset_of(&self, field: &str) -> ClangResult<u64> {
        let field = to_cstring(field)?;
        layout_result(unsafe { clang_Type_getOffsetOf(self.raw, field.as_ptr()) })
    }

    fn expect_record(&self) -> ClangResult<()> {
        expect_record_kind(self.canonical().raw_kind())
    }

    /// Visits the fields of a record type. An anonymous struct or union
    /// member is reported as one unnamed field. Returns `true` if the traversal was stopped with
    /// [`VisitorResult::Break`].
    pub fn visit_fields<F>(&self, mut callback: F) -> ClangResult<bool>
    where
        F: FnMut(Cursor<'tu>) -> VisitorResult,
    {
        self.expect_record()?;
        let tu = self.tu;
        Ok(visitor::visit_fields(self.raw, |field| {
            callback(Cursor::wrap(field, tu))
        }))
    }

    /// The fields of a record type.
    pub fn fields(&self) -> ClangResult<Vec<Cursor<'tu>>> {
        let mut fields = Vec::new();
        self.visit_fields(|field| {
            fields.push(field);
            VisitorResult::Continue
        })?;
        Ok(fields)
    }

    /// The type as clang would print it under `policy`.
    #[cfg(feature = "clang_17")]
    pub fn pretty_printed(&self, policy: &PrintingPolicy<'_>) -> String {
        from_cx_string(unsafe { clang_getTypePrettyPrinted(self.raw, policy.as_raw()) })
    }
}

fn expect_record_kind(raw: i32) -> ClangResult<()> {
    match TypeKind::from_raw(raw) {
        Some(TypeKind::Record) => Ok(()),
        found => Err(ClangError::UnexpectedTypeKind {
            expected: "record",
            found,
        }),
    }
}

impl PartialEq for Type<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_equalTypes(self.raw, other.raw) != 0 }
    }
}

impl Eq for Type<'_> {}

impl fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("kind", &TypeKind::from_raw(self.raw_kind()))
            .field("spelling", &self.spelling())
            .finish()
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}
