//! Option sets passed to and returned from libclang as raw bit masks.
//!
//! Conversions from raw integers keep unknown bits so that a mask read from
//! libclang can be handed back unchanged.

use bitflags::bitflags;
use cindex_sys::*;

bitflags! {
    /// Flags controlling how a translation unit is parsed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TranslationUnitFlags: u32 {
        const NONE = CXTranslationUnit_None as u32;
        /// Keep a detailed preprocessing record, including macro
        /// definitions and expansions, so cursors can reach them.
        const DETAILED_PREPROCESSING_RECORD = CXTranslationUnit_DetailedPreprocessingRecord as u32;
        /// The translation unit is incomplete, e.g. a header parsed on its
        /// own; suppresses template instantiation at end of file.
        const INCOMPLETE = CXTranslationUnit_Incomplete as u32;
        /// Build a precompiled preamble that speeds up reparsing.
        const PRECOMPILED_PREAMBLE = CXTranslationUnit_PrecompiledPreamble as u32;
        /// Cache code-completion results across completions.
        const CACHE_COMPLETION_RESULTS = CXTranslationUnit_CacheCompletionResults as u32;
        /// The unit will be serialized with `save`.
        const FOR_SERIALIZATION = CXTranslationUnit_ForSerialization as u32;
        /// Chained PCH. Retained for source compatibility only.
        const CXX_CHAINED_PCH = CXTranslationUnit_CXXChainedPCH as u32;
        /// Skip parsing of function bodies.
        const SKIP_FUNCTION_BODIES = CXTranslationUnit_SkipFunctionBodies as u32;
        /// Include brief documentation comments in completion results.
        const INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION = CXTranslationUnit_IncludeBriefCommentsInCodeCompletion as u32;
        /// Build the preamble on the first parse instead of the first reparse.
        const CREATE_PREAMBLE_ON_FIRST_PARSE = CXTranslationUnit_CreatePreambleOnFirstParse as u32;
        /// Do not stop processing after a fatal error such as a missing
        /// `#include`.
        const KEEP_GOING = CXTranslationUnit_KeepGoing as u32;
        /// Parse only the main file, ignoring `#include`s.
        const SINGLE_FILE_PARSE = CXTranslationUnit_SingleFileParse as u32;
        /// Restrict `SKIP_FUNCTION_BODIES` to the preamble.
        const LIMIT_SKIP_FUNCTION_BODIES_TO_PREAMBLE = CXTranslationUnit_LimitSkipFunctionBodiesToPreamble as u32;
        /// Expose attributed types as `TypeKind::Attributed`.
        const INCLUDE_ATTRIBUTED_TYPES = CXTranslationUnit_IncludeAttributedTypes as u32;
        /// Visit implicit attributes as cursor children.
        const VISIT_IMPLICIT_ATTRIBUTES = CXTranslationUnit_VisitImplicitAttributes as u32;
        /// Drop non-error diagnostics coming from included files.
        const IGNORE_NON_ERRORS_FROM_INCLUDED_FILES = CXTranslationUnit_IgnoreNonErrorsFromIncludedFiles as u32;
        /// Tokenize blocks excluded by `#if 0` and similar.
        const RETAIN_EXCLUDED_CONDITIONAL_BLOCKS = CXTranslationUnit_RetainExcludedConditionalBlocks as u32;
    }
}

impl TranslationUnitFlags {
    /// The flags libclang recommends for a unit that will be reparsed as
    /// it is edited.
    pub fn default_editing() -> Self {
        Self::from_bits_retain(unsafe { clang_defaultEditingTranslationUnitOptions() } as u32)
    }
}

bitflags! {
    /// Flags for [`TranslationUnit::reparse`](crate::core::translation_unit::TranslationUnit::reparse).
    /// libclang defines no reparse flags yet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ReparseFlags: u32 {
        const NONE = CXReparse_None as u32;
    }
}

bitflags! {
    /// Flags for [`TranslationUnit::save`](crate::core::translation_unit::TranslationUnit::save).
    /// libclang defines no save flags yet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SaveFlags: u32 {
        const NONE = CXSaveTranslationUnit_None as u32;
    }
}

bitflags! {
    /// Flags controlling code completion.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CodeCompleteFlags: u32 {
        /// Include macros in the results.
        const INCLUDE_MACROS = CXCodeComplete_IncludeMacros as u32;
        /// Include code patterns for language constructs, e.g. `for` loops.
        const INCLUDE_CODE_PATTERNS = CXCodeComplete_IncludeCodePatterns as u32;
        /// Include brief documentation comments.
        const INCLUDE_BRIEF_COMMENTS = CXCodeComplete_IncludeBriefComments as u32;
        /// Skip preamble entities; only results from the main file.
        const SKIP_PREAMBLE = CXCodeComplete_SkipPreamble as u32;
        /// Include results that need fix-its, e.g. `.` replaced by `->`.
        const INCLUDE_COMPLETIONS_WITH_FIX_ITS = CXCodeComplete_IncludeCompletionsWithFixIts as u32;
    }
}

impl CodeCompleteFlags {
    /// The flags libclang recommends for code completion.
    pub fn default_options() -> Self {
        Self::from_bits_retain(unsafe { clang_defaultCodeCompleteOptions() } as u32)
    }
}

bitflags! {
    /// The kinds of results that are appropriate at a completion point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CompletionContext: u32 {
        /// The context is unexposed.
        const UNEXPOSED = CXCompletionContext_Unexposed as u32;
        const ANY_TYPE = CXCompletionContext_AnyType as u32;
        const ANY_VALUE = CXCompletionContext_AnyValue as u32;
        const OBJC_OBJECT_VALUE = CXCompletionContext_ObjCObjectValue as u32;
        const OBJC_SELECTOR_VALUE = CXCompletionContext_ObjCSelectorValue as u32;
        const CXX_CLASS_TYPE_VALUE = CXCompletionContext_CXXClassTypeValue as u32;
        const DOT_MEMBER_ACCESS = CXCompletionContext_DotMemberAccess as u32;
        const ARROW_MEMBER_ACCESS = CXCompletionContext_ArrowMemberAccess as u32;
        const OBJC_PROPERTY_ACCESS = CXCompletionContext_ObjCPropertyAccess as u32;
        const ENUM_TAG = CXCompletionContext_EnumTag as u32;
        const UNION_TAG = CXCompletionContext_UnionTag as u32;
        const STRUCT_TAG = CXCompletionContext_StructTag as u32;
        const CLASS_TAG = CXCompletionContext_ClassTag as u32;
        const NAMESPACE = CXCompletionContext_Namespace as u32;
        const NESTED_NAME_SPECIFIER = CXCompletionContext_NestedNameSpecifier as u32;
        const OBJC_INTERFACE = CXCompletionContext_ObjCInterface as u32;
        const OBJC_PROTOCOL = CXCompletionContext_ObjCProtocol as u32;
        const OBJC_CATEGORY = CXCompletionContext_ObjCCategory as u32;
        const OBJC_INSTANCE_MESSAGE = CXCompletionContext_ObjCInstanceMessage as u32;
        const OBJC_CLASS_MESSAGE = CXCompletionContext_ObjCClassMessage as u32;
        const OBJC_SELECTOR_NAME = CXCompletionContext_ObjCSelectorName as u32;
        const MACRO_NAME = CXCompletionContext_MacroName as u32;
        const NATURAL_LANGUAGE = CXCompletionContext_NaturalLanguage as u32;
        const INCLUDED_FILE = CXCompletionContext_IncludedFile as u32;
        /// The current context is unknown, so set all contexts.
        const UNKNOWN = CXCompletionContext_Unknown as u32;
    }
}

bitflags! {
    /// Options for [`Diagnostic::format`](crate::core::diagnostic::Diagnostic::format).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DiagnosticDisplayOptions: u32 {
        /// Prefix with `file:line:`.
        const SOURCE_LOCATION = CXDiagnostic_DisplaySourceLocation as u32;
        /// Add the column to the location.
        const COLUMN = CXDiagnostic_DisplayColumn as u32;
        /// Add `{l:c-l:c}` source ranges after the location.
        const SOURCE_RANGES = CXDiagnostic_DisplaySourceRanges as u32;
        /// Append the option that enables the diagnostic, e.g. `[-Wconversion]`.
        const OPTION = CXDiagnostic_DisplayOption as u32;
        /// Append the category number.
        const CATEGORY_ID = CXDiagnostic_DisplayCategoryId as u32;
        /// Append the category name.
        const CATEGORY_NAME = CXDiagnostic_DisplayCategoryName as u32;
    }
}

impl DiagnosticDisplayOptions {
    /// The options libclang uses to mimic the compiler's own output.
    pub fn default_options() -> Self {
        Self::from_bits_retain(unsafe { clang_defaultDiagnosticDisplayOptions() } as u32)
    }
}

bitflags! {
    /// Attributes written on an Objective-C `@property`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjCPropertyAttributes: u32 {
        const NOATTR = CXObjCPropertyAttr_noattr as u32;
        const READONLY = CXObjCPropertyAttr_readonly as u32;
        const GETTER = CXObjCPropertyAttr_getter as u32;
        const ASSIGN = CXObjCPropertyAttr_assign as u32;
        const READWRITE = CXObjCPropertyAttr_readwrite as u32;
        const RETAIN = CXObjCPropertyAttr_retain as u32;
        const COPY = CXObjCPropertyAttr_copy as u32;
        const NONATOMIC = CXObjCPropertyAttr_nonatomic as u32;
        const SETTER = CXObjCPropertyAttr_setter as u32;
        const ATOMIC = CXObjCPropertyAttr_atomic as u32;
        const WEAK = CXObjCPropertyAttr_weak as u32;
        const STRONG = CXObjCPropertyAttr_strong as u32;
        const UNSAFE_UNRETAINED = CXObjCPropertyAttr_unsafe_unretained as u32;
        const CLASS = CXObjCPropertyAttr_class as u32;
    }
}

bitflags! {
    /// Objective-C declaration qualifiers on method parameters and results.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ObjCDeclQualifiers: u32 {
        const NONE = CXObjCDeclQualifier_None as u32;
        const IN = CXObjCDeclQualifier_In as u32;
        const INOUT = CXObjCDeclQualifier_Inout as u32;
        const OUT = CXObjCDeclQualifier_Out as u32;
        const BYCOPY = CXObjCDeclQualifier_Bycopy as u32;
        const BYREF = CXObjCDeclQualifier_Byref as u32;
        const ONEWAY = CXObjCDeclQualifier_Oneway as u32;
    }
}

bitflags! {
    /// Which pieces of a name to cover in
    /// [`Cursor::reference_name_range`](crate::core::cursor::Cursor::reference_name_range).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NameRefFlags: u32 {
        /// Include the nested-name-specifier, e.g. `Foo::` in `x.Foo::y`.
        const WANT_QUALIFIER = CXNameRange_WantQualifier as u32;
        /// Include the explicit template arguments, e.g. `<int>` in `x.f<int>`.
        const WANT_TEMPLATE_ARGS = CXNameRange_WantTemplateArgs as u32;
        /// Return the piece of the name pointed to by the cursor location
        /// when the name is non-contiguous, e.g. `operator[]`.
        const WANT_SINGLE_PIECE = CXNameRange_WantSinglePiece as u32;
    }
}

bitflags! {
    /// Roles a reference plays, as reported by the indexer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SymbolRole: u32 {
        const NONE = CXSymbolRole_None as u32;
        const DECLARATION = CXSymbolRole_Declaration as u32;
        const DEFINITION = CXSymbolRole_Definition as u32;
        const REFERENCE = CXSymbolRole_Reference as u32;
        const READ = CXSymbolRole_Read as u32;
        const WRITE = CXSymbolRole_Write as u32;
        const CALL = CXSymbolRole_Call as u32;
        const DYNAMIC = CXSymbolRole_Dynamic as u32;
        const ADDRESS_OF = CXSymbolRole_AddressOf as u32;
        const IMPLICIT = CXSymbolRole_Implicit as u32;
    }
}

bitflags! {
    /// Options for [`TranslationUnit::index_with`](crate::core::translation_unit::TranslationUnit::index_with).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct IndexOptions: u32 {
        const NONE = CXIndexOpt_None as u32;
        /// Report each entity reference only once per source location.
        const SUPPRESS_REDUNDANT_REFS = CXIndexOpt_SuppressRedundantRefs as u32;
        /// Index local variables and local types as well.
        const INDEX_FUNCTION_LOCAL_SYMBOLS = CXIndexOpt_IndexFunctionLocalSymbols as u32;
        /// Index implicit template instantiations.
        const INDEX_IMPLICIT_TEMPLATE_INSTANTIATIONS = CXIndexOpt_IndexImplicitTemplateInstantiations as u32;
        /// Suppress all compiler warnings during parsing.
        const SUPPRESS_WARNINGS = CXIndexOpt_SuppressWarnings as u32;
        /// Skip function bodies already parsed by another unit in the same
        /// index action session.
        const SKIP_PARSED_BODIES_IN_SESSION = CXIndexOpt_SkipParsedBodiesInSession as u32;
    }
}

bitflags! {
    /// Flags attached to a declaration reported by the indexer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeclInfoFlags: u32 {
        /// The declaration's body was skipped.
        const SKIPPED = CXIdxDeclFlag_Skipped as u32;
    }
}

bitflags! {
    /// Process-wide options of an [`Index`](crate::core::index::Index).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GlobalOptions: u32 {
        const NONE = CXGlobalOpt_None as u32;
        /// Run indexing threads at background priority.
        const THREAD_BACKGROUND_PRIORITY_FOR_INDEXING = CXGlobalOpt_ThreadBackgroundPriorityForIndexing as u32;
        /// Run editing threads (reparse, completion) at background priority.
        const THREAD_BACKGROUND_PRIORITY_FOR_EDITING = CXGlobalOpt_ThreadBackgroundPriorityForEditing as u32;
        const THREAD_BACKGROUND_PRIORITY_FOR_ALL = CXGlobalOpt_ThreadBackgroundPriorityForAll as u32;
    }
}

macro_rules! impl_raw_mask {
    ($($flags:ty),+ $(,)?) => {
        $(
            impl From<u32> for $flags {
                fn from(value: u32) -> Self {
                    <$flags>::from_bits_retain(value)
                }
            }

            impl From<$flags> for u32 {
                fn from(value: $flags) -> Self {
                    value.bits()
                }
            }
        )+
    };
}

impl_raw_mask!(
    TranslationUnitFlags,
    ReparseFlags,
    SaveFlags,
    CodeCompleteFlags,
    CompletionContext,
    DiagnosticDisplayOptions,
    ObjCPropertyAttributes,
    ObjCDeclQualifiers,
    NameRefFlags,
    SymbolRole,
    IndexOptions,
    DeclInfoFlags,
    GlobalOptions,
);
