use crate::core::availability::AvailabilityInfo;
use crate::core::comment::Comment;
use crate::core::evaluation::EvalResult;
use crate::core::printing_policy::PrintingPolicy;
use crate::core::source::{File, SourceLocation, SourceRange};
use crate::core::token::Token;
use crate::core::translation_unit::TranslationUnit;
use crate::core::ty::Type;
use crate::internal::utils::{from_cx_string, from_cx_string_opt, from_cx_string_set};
use crate::internal::{layout::layout_result, visitor};
use crate::core::error::ClangResult;
use crate::types::{
    AccessSpecifier, AvailabilityKind, ChildVisit, CursorKind, ExceptionSpecificationKind,
    Language, Linkage, NameRefFlags, NativeEnum, ObjCDeclQualifiers, ObjCPropertyAttributes,
    StorageClass, TemplateArgumentKind, TlsKind, Visibility,
};
use cindex_sys::*;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::os::raw::c_uint;

/// A view of an AST node: a declaration, statement, expression,
/// reference, attribute, preprocessing entity, or the translation unit
/// itself.
///
/// Cursors are cheap to copy and borrow the unit they came from, so a
/// cursor cannot outlive its unit:
///
/// ```compile_fail,E0597
/// use cindex::prelude::*;
///
/// let cursor = {
///     let unit = TranslationUnit::from_source(
///         "int x;",
///         Language::C,
///         &[] as &[&str],
///         TranslationUnitFlags::NONE,
///     )
///     .unwrap();
///     unit.cursor()
/// };
/// println!("{}", cursor.spelling());
/// ```
///
/// Accessors that only make sense for some kinds of cursor return
/// `Option` and yield `None` elsewhere. Null and invalid cursors are never
/// handed out.
#[derive(Clone, Copy)]
pub struct Cursor<'tu> {
    raw: CXCursor,
    tu: &'tu TranslationUnit<'tu>,
}

/// One template argument of a specialization cursor.
#[derive(Debug, Clone, Copy)]
pub struct TemplateArgument<'tu> {
    pub kind: Option<TemplateArgumentKind>,
    /// Set for [`TemplateArgumentKind::Type`] arguments.
    pub ty: Option<Type<'tu>>,
    /// Set for [`TemplateArgumentKind::Integral`] arguments.
    pub value: Option<i64>,
}

impl<'tu> Cursor<'tu> {
    /// Wraps a cursor that is known to be valid.
    pub(crate) fn wrap(raw: CXCursor, tu: &'tu TranslationUnit<'tu>) -> Self {
        Cursor { raw, tu }
    }

    /// Wraps a cursor, mapping null and invalid cursors to `None`.
    pub(crate) fn from_raw(raw: CXCursor, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        let is_null = unsafe { clang_Cursor_isNull(raw) } != 0;
        let is_invalid = unsafe { clang_isInvalid(raw.kind) } != 0;
        (!is_null && !is_invalid).then_some(Cursor { raw, tu })
    }

    pub(crate) fn as_raw(&self) -> CXCursor {
        self.raw
    }

    pub fn translation_unit(&self) -> &'tu TranslationUnit<'tu> {
        self.tu
    }

    /// The raw `CXCursorKind`.
    pub fn raw_kind(&self) -> i32 {
        self.raw.kind as i32
    }

    /// # Panics
    ///
    /// Panics if libclang reports a kind this crate does not know, which
    /// means the loaded libclang is newer than the kind table.
    pub fn kind(&self) -> CursorKind {
        let raw = self.raw_kind();
        CursorKind::from_raw(raw).unwrap_or_else(|| panic!("Unknown cursor kind: {}", raw))
    }

    // ========== IDENTITY ==========

    /// The name of the entity, e.g. `main` for a function declaration.
    pub fn spelling(&self) -> String {
        from_cx_string(unsafe { clang_getCursorSpelling(self.raw) })
    }

    /// The name with extra context, e.g. `main(int, char **)`.
    pub fn display_name(&self) -> String {
        from_cx_string(unsafe { clang_getCursorDisplayName(self.raw) })
    }

    /// The Unified Symbol Resolution string, stable across units.
    pub fn usr(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_getCursorUSR(self.raw) })
    }

    pub fn mangling(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_Cursor_getMangling(self.raw) })
    }

    /// All manglings of a C++ constructor or destructor.
    pub fn cxx_manglings(&self) -> Vec<String> {
        from_cx_string_set(unsafe { clang_Cursor_getCXXManglings(self.raw) })
    }

    // ========== STRUCTURE ==========

    /// Visits the children of this cursor. Returns `true` if the
    /// traversal was stopped with [`ChildVisit::Break`].
    ///
    /// A panic in `callback` stops the traversal and is resumed once
    /// libclang has returned.
    pub fn visit_children<F>(&self, mut callback: F) -> bool
    where
        F: FnMut(Cursor<'tu>, Cursor<'tu>) -> ChildVisit,
    {
        let tu = self.tu;
        visitor::visit_children(self.raw, |child, parent| {
            callback(Cursor::wrap(child, tu), Cursor::wrap(parent, tu))
        })
    }

    /// Like [`Cursor::visit_children`], but the callback may fail. The
    /// first error stops the traversal and is returned.
    pub fn try_visit_children<E, F>(&self, mut callback: F) -> Result<bool, E>
    where
        F: FnMut(Cursor<'tu>, Cursor<'tu>) -> Result<ChildVisit, E>,
    {
        let mut failure = None;
        let stopped = self.visit_children(|child, parent| match callback(child, parent) {
            Ok(visit) => visit,
            Err(error) => {
                failure = Some(error);
                ChildVisit::Break
            }
        });
        match failure {
            Some(error) => Err(error),
            None => Ok(stopped),
        }
    }

    /// The direct children of this cursor.
    pub fn children(&self) -> Vec<Cursor<'tu>> {
        let mut children = Vec::new();
        self.visit_children(|child, _| {
            children.push(child);
            ChildVisit::Continue
        });
        children
    }

    /// Every descendant of this cursor in pre-order.
    pub fn descendants(&self) -> Vec<Cursor<'tu>> {
        let mut descendants = Vec::new();
        self.visit_children(|child, _| {
            descendants.push(child);
            ChildVisit::Recurse
        });
        descendants
    }

    /// The first descendant, in pre-order, that satisfies `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<Cursor<'tu>>
    where
        P: FnMut(&Cursor<'tu>) -> bool,
    {
        let mut found = None;
        self.visit_children(|child, _| {
            if predicate(&child) {
                found = Some(child);
                ChildVisit::Break
            } else {
                ChildVisit::Recurse
            }
        });
        found
    }

    /// The scope that declares this entity, e.g. the class of a method.
    pub fn semantic_parent(&self) -> Option<Cursor<'tu>> {
        Cursor::from_raw(unsafe { clang_getCursorSemanticParent(self.raw) }, self.tu)
    }

    /// The scope the entity was written in, which differs from the
    /// semantic parent for out-of-line definitions.
    pub fn lexical_parent(&self) -> Option<Cursor<'tu>> {
        Cursor::from_raw(unsafe { clang_getCursorLexicalParent(self.raw) }, self.tu)
    }

    /// The entity a reference or expression refers to.
    pub fn referenced(&self) -> Option<Cursor<'tu>> {
        Cursor::from_raw(unsafe { clang_getCursorReferenced(self.raw) }, self.tu)
    }

    /// The definition of the entity, if it is defined in this unit.
    pub fn definition(&self) -> Option<Cursor<'tu>> {
        Cursor::from_raw(unsafe { clang_getCursorDefinition(self.raw) }, self.tu)
    }

    /// The first declaration of the entity.
    pub fn canonical(&self) -> Cursor<'tu> {
        Cursor::wrap(unsafe { clang_getCanonicalCursor(self.raw) }, self.tu)
    }

    /// The candidates of an overloaded declaration reference.
    pub fn overloaded_declarations(&self) -> Vec<Cursor<'tu>> {
        let count = unsafe { clang_getNumOverloadedDecls(self.raw) };
        (0..count)
            .filter_map(|i| Cursor::from_raw(unsafe { clang_getOverloadedDecl(self.raw, i) }, self.tu))
            .collect()
    }

    /// The arguments of a call expression or function declaration.
    pub fn arguments(&self) -> Option<Vec<Cursor<'tu>>> {
        let count = unsafe { clang_Cursor_getNumArguments(self.raw) };
        let count = u32::try_from(count).ok()?;
        Some(
            (0..count)
                .filter_map(|i| Cursor::from_raw(unsafe { clang_Cursor_getArgument(self.raw, i) }, self.tu))
                .collect(),
        )
    }

    /// The template arguments of a specialization, e.g. a function
    /// template instantiation.
    pub fn template_arguments(&self) -> Option<Vec<TemplateArgument<'tu>>> {
        let count = unsafe { clang_Cursor_getNumTemplateArguments(self.raw) };
        let count = u32::try_from(count).ok()?;
        Some(
            (0..count)
                .map(|i| {
                    let kind = TemplateArgumentKind::from_raw(unsafe {
                        clang_Cursor_getTemplateArgumentKind(self.raw, i)
                    } as i32);
                    let ty = match kind {
                        Some(TemplateArgumentKind::Type) => Type::from_raw(
                            unsafe { clang_Cursor_getTemplateArgumentType(self.raw, i) },
                            self.tu,
                        ),
                        _ => None,
                    };
                    let value = match kind {
                        Some(TemplateArgumentKind::Integral) => {
                            Some(unsafe { clang_Cursor_getTemplateArgumentValue(self.raw, i) })
                        }
                        _ => None,
                    };
                    TemplateArgument { kind, ty, value }
                })
                .collect(),
        )
    }

    /// The template this cursor specializes or instantiates.
    pub fn specialized_template(&self) -> Option<Cursor<'tu>> {
        Cursor::from_raw(unsafe { clang_getSpecializedCursorTemplate(self.raw) }, self.tu)
    }

    /// The kind of declaration a template cursor would produce when
    /// instantiated.
    pub fn template_kind(&self) -> Option<CursorKind> {
        let raw = unsafe { clang_getTemplateCursorKind(self.raw) };
        (unsafe { clang_isInvalid(raw) } == 0)
            .then(|| CursorKind::from_raw(raw as i32))
            .flatten()
    }

    // ========== SOURCE ==========

    pub fn location(&self) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { clang_getCursorLocation(self.raw) })
    }

    /// The source range covered by the cursor.
    pub fn extent(&self) -> SourceRange<'tu> {
        SourceRange::from_raw(unsafe { clang_getCursorExtent(self.raw) })
    }

    pub fn is_from_main_file(&self) -> bool {
        self.location().is_in_main_file()
    }

    pub fn is_in_system_header(&self) -> bool {
        self.location().is_in_system_header()
    }

    /// The tokens inside [`Cursor::extent`].
    pub fn tokens(&self) -> Vec<Token<'tu>> {
        self.tu.tokens(self.extent())
    }

    /// The range of one piece of the cursor's name. Most names have a
    /// single piece; Objective-C selectors have one per keyword.
    /// `options` is passed through to libclang, which reserves it; pass 0.
    pub fn spelling_name_range(&self, piece: u32, options: u32) -> Option<SourceRange<'tu>> {
        SourceRange::from_raw_opt(unsafe {
            clang_Cursor_getSpellingNameRange(self.raw, piece as c_uint, options as c_uint)
        })
    }

    pub fn reference_name_range(&self, flags: NameRefFlags, piece: u32) -> Option<SourceRange<'tu>> {
        SourceRange::from_raw_opt(unsafe {
            clang_getCursorReferenceNameRange(self.raw, flags.bits() as c_uint, piece)
        })
    }

    /// The file named by an inclusion directive.
    pub fn included_file(&self) -> Option<File<'tu>> {
        File::from_raw(unsafe { clang_getIncludedFile(self.raw) })
    }

    // ========== PROPERTIES ==========

    pub fn linkage(&self) -> Option<Linkage> {
        Linkage::from_raw(unsafe { clang_getCursorLinkage(self.raw) } as i32)
            .filter(|linkage| *linkage != Linkage::Invalid)
    }

    pub fn visibility(&self) -> Option<Visibility> {
        Visibility::from_raw(unsafe { clang_getCursorVisibility(self.raw) } as i32)
            .filter(|visibility| *visibility != Visibility::Invalid)
    }

    pub fn availability(&self) -> Option<AvailabilityKind> {
        AvailabilityKind::from_raw(unsafe { clang_getCursorAvailability(self.raw) } as i32)
    }

    /// Deprecation and per-platform availability attributes.
    pub fn platform_availability(&self) -> AvailabilityInfo {
        AvailabilityInfo::query(self.raw)
    }

    pub fn language(&self) -> Option<Language> {
        Language::from_raw(unsafe { clang_getCursorLanguage(self.raw) } as i32)
            .filter(|language| *language != Language::Invalid)
    }

    pub fn tls_kind(&self) -> Option<TlsKind> {
        TlsKind::from_raw(unsafe { clang_getCursorTLSKind(self.raw) } as i32)
    }

    pub fn storage_class(&self) -> Option<StorageClass> {
        StorageClass::from_raw(unsafe { clang_Cursor_getStorageClass(self.raw) } as i32)
            .filter(|storage| *storage != StorageClass::Invalid)
    }

    /// Access of a member or base class specifier.
    pub fn access_specifier(&self) -> Option<AccessSpecifier> {
        AccessSpecifier::from_raw(unsafe { clang_getCXXAccessSpecifier(self.raw) } as i32)
            .filter(|access| *access != AccessSpecifier::Invalid)
    }

    /// The exception specification of a function. `None` for cursors
    /// that are not functions.
    pub fn exception_specification(&self) -> Option<ExceptionSpecificationKind> {
        ExceptionSpecificationKind::from_raw(unsafe {
            clang_getCursorExceptionSpecificationType(self.raw)
        })
    }

    pub fn objc_property_attributes(&self) -> ObjCPropertyAttributes {
        ObjCPropertyAttributes::from_bits_retain(unsafe {
            clang_Cursor_getObjCPropertyAttributes(self.raw, 0)
        } as u32)
    }

    pub fn objc_decl_qualifiers(&self) -> ObjCDeclQualifiers {
        ObjCDeclQualifiers::from_bits_retain(unsafe { clang_Cursor_getObjCDeclQualifiers(self.raw) } as u32)
    }

    pub fn objc_property_getter_name(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_Cursor_getObjCPropertyGetterName(self.raw) })
    }

    pub fn objc_property_setter_name(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_Cursor_getObjCPropertySetterName(self.raw) })
    }

    pub fn objc_type_encoding(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_getDeclObjCTypeEncoding(self.raw) })
    }

    /// Index of the selector piece under a message expression's cursor.
    pub fn objc_selector_index(&self) -> Option<u32> {
        u32::try_from(unsafe { clang_Cursor_getObjCSelectorIndex(self.raw) }).ok()
    }

    pub fn bit_field_width(&self) -> Option<u32> {
        if !self.is_bit_field() {
            return None;
        }
        u32::try_from(unsafe { clang_getFieldDeclBitWidth(self.raw) }).ok()
    }

    // ========== PREDICATES ==========

    pub fn is_declaration(&self) -> bool {
        unsafe { clang_isDeclaration(self.raw.kind) != 0 }
    }

    pub fn is_reference(&self) -> bool {
        unsafe { clang_isReference(self.raw.kind) != 0 }
    }

    pub fn is_expression(&self) -> bool {
        unsafe { clang_isExpression(self.raw.kind) != 0 }
    }

    pub fn is_statement(&self) -> bool {
        unsafe { clang_isStatement(self.raw.kind) != 0 }
    }

    pub fn is_attribute(&self) -> bool {
        unsafe { clang_isAttribute(self.raw.kind) != 0 }
    }

    pub fn is_preprocessing(&self) -> bool {
        unsafe { clang_isPreprocessing(self.raw.kind) != 0 }
    }

    pub fn is_unexposed(&self) -> bool {
        unsafe { clang_isUnexposed(self.raw.kind) != 0 }
    }

    pub fn is_translation_unit(&self) -> bool {
        unsafe { clang_isTranslationUnit(self.raw.kind) != 0 }
    }

    /// Whether the kind is one of libclang's invalid-cursor kinds, such as
    /// `NoDeclFound`.
    pub fn is_invalid(&self) -> bool {
        unsafe { clang_isInvalid(self.raw.kind) != 0 }
    }

    /// Whether this cursor is the definition of its entity.
    pub fn is_definition(&self) -> bool {
        unsafe { clang_isCursorDefinition(self.raw) != 0 }
    }

    pub fn has_attributes(&self) -> bool {
        unsafe { clang_Cursor_hasAttrs(self.raw) != 0 }
    }

    pub fn is_anonymous(&self) -> bool {
        unsafe { clang_Cursor_isAnonymous(self.raw) != 0 }
    }

    /// Whether this is an anonymous struct or union that injects its
    /// members into the enclosing scope.
    pub fn is_anonymous_record_declaration(&self) -> bool {
        unsafe { clang_Cursor_isAnonymousRecordDecl(self.raw) != 0 }
    }

    pub fn is_inline_namespace(&self) -> bool {
        unsafe { clang_Cursor_isInlineNamespace(self.raw) != 0 }
    }

    pub fn is_bit_field(&self) -> bool {
        unsafe { clang_Cursor_isBitField(self.raw) != 0 }
    }

    pub fn is_variadic(&self) -> bool {
        unsafe { clang_Cursor_isVariadic(self.raw) != 0 }
    }

    /// Whether a call or message expression dispatches dynamically.
    pub fn is_dynamic_call(&self) -> bool {
        unsafe { clang_Cursor_isDynamicCall(self.raw) != 0 }
    }

    pub fn is_macro_function_like(&self) -> bool {
        unsafe { clang_Cursor_isMacroFunctionLike(self.raw) != 0 }
    }

    pub fn is_macro_builtin(&self) -> bool {
        unsafe { clang_Cursor_isMacroBuiltin(self.raw) != 0 }
    }

    pub fn is_function_inlined(&self) -> bool {
        unsafe { clang_Cursor_isFunctionInlined(self.raw) != 0 }
    }

    pub fn is_virtual_base(&self) -> bool {
        unsafe { clang_isVirtualBase(self.raw) != 0 }
    }

    pub fn is_scoped_enum(&self) -> bool {
        unsafe { clang_EnumDecl_isScoped(self.raw) != 0 }
    }

    pub fn is_const_method(&self) -> bool {
        unsafe { clang_CXXMethod_isConst(self.raw) != 0 }
    }

    pub fn is_static_method(&self) -> bool {
        unsafe { clang_CXXMethod_isStatic(self.raw) != 0 }
    }

    pub fn is_virtual_method(&self) -> bool {
        unsafe { clang_CXXMethod_isVirtual(self.raw) != 0 }
    }

    pub fn is_pure_virtual_method(&self) -> bool {
        unsafe { clang_CXXMethod_isPureVirtual(self.raw) != 0 }
    }

    /// Whether a special member function is explicitly defaulted.
    pub fn is_defaulted_method(&self) -> bool {
        unsafe { clang_CXXMethod_isDefaulted(self.raw) != 0 }
    }

    #[cfg(feature = "clang_16")]
    pub fn is_deleted_method(&self) -> bool {
        unsafe { clang_CXXMethod_isDeleted(self.raw) != 0 }
    }

    #[cfg(feature = "clang_16")]
    pub fn is_copy_assignment_operator(&self) -> bool {
        unsafe { clang_CXXMethod_isCopyAssignmentOperator(self.raw) != 0 }
    }

    #[cfg(feature = "clang_16")]
    pub fn is_move_assignment_operator(&self) -> bool {
        unsafe { clang_CXXMethod_isMoveAssignmentOperator(self.raw) != 0 }
    }

    /// Whether a constructor or conversion function is `explicit`.
    #[cfg(feature = "clang_17")]
    pub fn is_explicit(&self) -> bool {
        unsafe { clang_CXXMethod_isExplicit(self.raw) != 0 }
    }

    pub fn is_mutable_field(&self) -> bool {
        unsafe { clang_CXXField_isMutable(self.raw) != 0 }
    }

    pub fn is_converting_constructor(&self) -> bool {
        unsafe { clang_CXXConstructor_isConvertingConstructor(self.raw) != 0 }
    }

    pub fn is_copy_constructor(&self) -> bool {
        unsafe { clang_CXXConstructor_isCopyConstructor(self.raw) != 0 }
    }

    pub fn is_default_constructor(&self) -> bool {
        unsafe { clang_CXXConstructor_isDefaultConstructor(self.raw) != 0 }
    }

    pub fn is_move_constructor(&self) -> bool {
        unsafe { clang_CXXConstructor_isMoveConstructor(self.raw) != 0 }
    }

    pub fn is_abstract_record(&self) -> bool {
        unsafe { clang_CXXRecord_isAbstract(self.raw) != 0 }
    }

    /// Whether the declaration carries `external_source_symbol`.
    pub fn is_external_symbol(&self) -> bool {
        unsafe {
            clang_Cursor_isExternalSymbol(
                self.raw,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            ) != 0
        }
    }

    pub fn is_objc_optional(&self) -> bool {
        unsafe { clang_Cursor_isObjCOptional(self.raw) != 0 }
    }

    // ========== TYPES ==========

    /// The type of the entity, e.g. the declared type of a variable.
    pub fn ty(&self) -> Option<Type<'tu>> {
        Type::from_raw(unsafe { clang_getCursorType(self.raw) }, self.tu)
    }

    /// The return type of a function or method.
    pub fn result_type(&self) -> Option<Type<'tu>> {
        Type::from_raw(unsafe { clang_getCursorResultType(self.raw) }, self.tu)
    }

    pub fn enum_integer_type(&self) -> Option<Type<'tu>> {
        Type::from_raw(unsafe { clang_getEnumDeclIntegerType(self.raw) }, self.tu)
    }

    pub fn typedef_underlying_type(&self) -> Option<Type<'tu>> {
        Type::from_raw(unsafe { clang_getTypedefDeclUnderlyingType(self.raw) }, self.tu)
    }

    /// The type of the receiver of a method call or message.
    pub fn receiver_type(&self) -> Option<Type<'tu>> {
        Type::from_raw(unsafe { clang_Cursor_getReceiverType(self.raw) }, self.tu)
    }

    // ========== VALUES ==========

    pub fn enum_constant_value(&self) -> Option<i64> {
        (self.raw_kind() == CursorKind::EnumConstantDecl.to_raw())
            .then(|| unsafe { clang_getEnumConstantDeclValue(self.raw) })
    }

    pub fn enum_constant_unsigned_value(&self) -> Option<u64> {
        (self.raw_kind() == CursorKind::EnumConstantDecl.to_raw())
            .then(|| unsafe { clang_getEnumConstantDeclUnsignedValue(self.raw) })
    }

    /// The offset of a field in bits from the start of its record.
    pub fn offset_of_field(&self) -> ClangResult<u64> {
        layout_result(unsafe { clang_Cursor_getOffsetOfField(self.raw) })
    }

    /// Evaluates an expression, or the initializer of a variable, as a
    /// constant.
    pub fn evaluate(&self) -> Option<EvalResult> {
        EvalResult::evaluate(self.raw)
    }

    pub fn var_decl_initializer(&self) -> Option<Cursor<'tu>> {
        Cursor::from_raw(unsafe { clang_Cursor_getVarDeclInitializer(self.raw) }, self.tu)
    }

    /// `None` if this is not a variable declaration.
    pub fn has_var_decl_global_storage(&self) -> Option<bool> {
        match unsafe { clang_Cursor_hasVarDeclGlobalStorage(self.raw) } {
            -1 => None,
            value => Some(value != 0),
        }
    }

    /// `None` if this is not a variable declaration.
    pub fn has_var_decl_external_storage(&self) -> Option<bool> {
        match unsafe { clang_Cursor_hasVarDeclExternalStorage(self.raw) } {
            -1 => None,
            value => Some(value != 0),
        }
    }

    // ========== COMMENTS ==========

    /// The documentation comment attached to the declaration, verbatim.
    pub fn raw_comment(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_Cursor_getRawCommentText(self.raw) })
    }

    /// The first paragraph of the documentation comment, or its `\brief`.
    pub fn brief_comment(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_Cursor_getBriefCommentText(self.raw) })
    }

    pub fn comment_range(&self) -> Option<SourceRange<'tu>> {
        SourceRange::from_raw_opt(unsafe { clang_Cursor_getCommentRange(self.raw) })
    }

    /// The documentation comment parsed into a tree.
    pub fn parsed_comment(&self) -> Option<Comment<'tu>> {
        Comment::from_raw(unsafe { clang_Cursor_getParsedComment(self.raw) })
    }

    // ========== PRINTING ==========

    /// The printing policy of the unit, preconfigured for this cursor.
    pub fn printing_policy(&self) -> PrintingPolicy<'tu> {
        PrintingPolicy::from_raw(unsafe { clang_getCursorPrintingPolicy(self.raw) })
    }

    /// Source text of the declaration as clang would print it.
    pub fn pretty_printed(&self, policy: Option<&PrintingPolicy<'_>>) -> String {
        let policy = policy.map_or(std::ptr::null_mut(), |policy| policy.as_raw());
        from_cx_string(unsafe { clang_getCursorPrettyPrinted(self.raw, policy) })
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_equalCursors(self.raw, other.raw) != 0 }
    }
}

impl Eq for Cursor<'_> {}

impl Hash for Cursor<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsafe { clang_hashCursor(self.raw) }.hash(state)
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("kind", &CursorKind::from_raw(self.raw_kind()))
            .field("spelling", &self.spelling())
            .field("location", &self.location())
            .finish()
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}
