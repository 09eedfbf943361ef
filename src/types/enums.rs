//! Closed enumerations mirroring libclang's integer constants.
//!
//! Every enum is `#[repr(i32)]` with the native value as its discriminant,
//! so [`NativeEnum::to_raw`] is a plain cast and [`NativeEnum::from_raw`]
//! is a table lookup that yields `None` for values the table predates.

use crate::types::NativeEnum;
use cindex_sys::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::ffi::CStr;
use thiserror::Error;

/// Error codes returned by the translation unit factories (`CXErrorCode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ErrorCode {
    /// No error.
    Success = 0,
    /// A generic error code, no further details are available.
    Failure = 1,
    /// libclang crashed while performing the requested operation.
    Crashed = 2,
    /// The function detected that the arguments violate the function
    /// contract.
    InvalidArguments = 3,
    /// An AST deserialization error has occurred.
    AstReadError = 4,
}

/// Severity of a [`Diagnostic`](crate::core::diagnostic::Diagnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum DiagnosticSeverity {
    /// The diagnostic has been suppressed, e.g. by a command-line option.
    Ignored = 0,
    /// Supplementary information attached to a previous diagnostic.
    Note = 1,
    /// Indicates suspicious code that may not be wrong.
    Warning = 2,
    /// Indicates that the code is ill-formed.
    Error = 3,
    /// Indicates that the code is ill-formed such that future parser
    /// recovery is unlikely to produce useful results.
    Fatal = 4,
}

/// Failure reported when loading a serialized diagnostics file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Error)]
#[repr(i32)]
pub enum LoadDiagnosticsError {
    #[error("no error")]
    None = 0,
    #[error("unknown error loading diagnostics")]
    Unknown = 1,
    #[error("diagnostics file could not be loaded")]
    CannotLoad = 2,
    #[error("diagnostics file is invalid")]
    InvalidFile = 3,
}

/// Failure reported by `clang_saveTranslationUnit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Error)]
#[repr(i32)]
pub enum SaveError {
    #[error("no error")]
    None = 0,
    /// An unknown error occurred while attempting to save the file, e.g.
    /// an I/O error or permission problem.
    #[error("unknown error while saving the translation unit")]
    Unknown = 1,
    /// The translation unit has errors that prevent it from being saved.
    #[error("the translation unit has errors that prevent saving")]
    TranslationErrors = 2,
    #[error("invalid translation unit")]
    InvalidTranslationUnit = 3,
}

/// Failure reported when opening a compilation database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Error)]
#[repr(i32)]
pub enum CompilationDatabaseError {
    #[error("no error")]
    NoError = 0,
    #[error("compilation database could not be loaded")]
    CanNotLoadDatabase = 1,
}

/// Error values encoded in the negative range of the type layout queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Error)]
#[repr(i32)]
pub enum TypeLayoutError {
    /// Type is of kind `Invalid`.
    #[error("invalid type")]
    Invalid = -1,
    /// The type is an incomplete type.
    #[error("incomplete type")]
    Incomplete = -2,
    /// The type is a dependent type.
    #[error("dependent type")]
    Dependent = -3,
    /// The type is not a constant size type.
    #[error("type does not have a constant size")]
    NotConstantSize = -4,
    /// The field name is not valid for this record.
    #[error("invalid field name")]
    InvalidFieldName = -5,
    /// The type is undeduced.
    #[error("undeduced type")]
    Undeduced = -6,
}

/// Availability of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum AvailabilityKind {
    Available = 0,
    /// The entity is available, but has been deprecated.
    Deprecated = 1,
    /// The entity is not available; any use of it is an error.
    NotAvailable = 2,
    /// The entity is available, but not accessible.
    NotAccessible = 3,
}

/// A tri-state option: let libclang decide, or force on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Choice {
    /// Use the default value of an option that may depend on the process
    /// environment.
    #[default]
    Default = 0,
    Enabled = 1,
    Disabled = 2,
}

/// Linkage of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Linkage {
    /// The entity is not a declaration or linkage could not be determined.
    Invalid = 0,
    /// Variables in non-extern scope, enum constants, fields.
    NoLinkage = 1,
    /// Static variables and static functions.
    Internal = 2,
    /// External linkage, but only inside an anonymous namespace.
    UniqueExternal = 3,
    External = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Visibility {
    Invalid = 0,
    /// Symbol not seen by the linker.
    Hidden = 1,
    /// Symbol seen by the linker but resolves to a symbol inside this
    /// object.
    Protected = 2,
    /// Symbol seen by the linker and acts like a normal symbol.
    Default = 3,
}

/// Source language of a cursor or a parsed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Language {
    Invalid = 0,
    C = 1,
    ObjC = 2,
    CPlusPlus = 3,
}

impl Language {
    /// Name of the in-memory file used when parsing source text.
    pub fn source_file_name(self) -> Option<&'static str> {
        match self {
            Language::C => Some("main.c"),
            Language::ObjC => Some("main.m"),
            Language::CPlusPlus => Some("main.cpp"),
            Language::Invalid => None,
        }
    }
}

/// Thread-local storage kind of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum TlsKind {
    None = 0,
    Dynamic = 1,
    Static = 2,
}

/// Storage class of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum StorageClass {
    Invalid = 0,
    None = 1,
    Extern = 2,
    Static = 3,
    PrivateExtern = 4,
    OpenClWorkGroupLocal = 5,
    Auto = 6,
    Register = 7,
}

/// C++ access control level of a base class or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum AccessSpecifier {
    Invalid = 0,
    Public = 1,
    Protected = 2,
    Private = 3,
}

/// Calling convention of a function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum CallingConvention {
    Default = 0,
    C = 1,
    X86StdCall = 2,
    X86FastCall = 3,
    X86ThisCall = 4,
    X86Pascal = 5,
    Aapcs = 6,
    AapcsVfp = 7,
    X86RegCall = 8,
    IntelOclBicc = 9,
    /// `CXCallingConv_X86_64Win64` is the older spelling of this constant.
    Win64 = 10,
    X86_64SysV = 11,
    X86VectorCall = 12,
    Swift = 13,
    PreserveMost = 14,
    PreserveAll = 15,
    AArch64VectorCall = 16,
    SwiftAsync = 17,
    AArch64SvePcs = 18,
    M68kRtd = 19,
    PreserveNone = 20,
    RiscvVectorCall = 21,
    Invalid = 100,
    Unexposed = 200,
}

impl CallingConvention {
    /// Historical spelling of [`CallingConvention::Win64`].
    pub const X86_64_WIN64: CallingConvention = CallingConvention::Win64;
}

/// Nullability annotation of a pointer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum Nullability {
    /// Values of this type can never be null.
    NonNull = 0,
    /// Values of this type can be null.
    Nullable = 1,
    /// Whether values of this type can be null is (explicitly) unspecified.
    Unspecified = 2,
    /// Nullability is not applicable to this type.
    Invalid = 3,
    /// Like `Nullable`, but for results of Swift async functions.
    NullableResult = 4,
}

/// C++ ref-qualifier of a member function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum RefQualifier {
    /// No ref-qualifier was provided.
    None = 0,
    /// An lvalue ref-qualifier (`&`).
    LValue = 1,
    /// An rvalue ref-qualifier (`&&`).
    RValue = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum TemplateArgumentKind {
    Null = 0,
    Type = 1,
    Declaration = 2,
    NullPtr = 3,
    Integral = 4,
    Template = 5,
    TemplateExpansion = 6,
    Expression = 7,
    Pack = 8,
    /// Indicates an error case, preventing the kind from being deduced.
    Invalid = 9,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum TokenKind {
    /// A token that contains some kind of punctuation.
    Punctuation = 0,
    /// A language keyword.
    Keyword = 1,
    /// An identifier (that is not a keyword).
    Identifier = 2,
    /// A numeric, string, or character literal.
    Literal = 3,
    /// A comment.
    Comment = 4,
}

/// Exception specification of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ExceptionSpecificationKind {
    /// The cursor has no exception specification.
    None = 0,
    /// `throw()`
    DynamicNone = 1,
    /// `throw(T1, T2)`
    Dynamic = 2,
    /// Microsoft `throw(...)`
    MsAny = 3,
    /// `noexcept`
    BasicNoexcept = 4,
    /// `noexcept(expression)`
    ComputedNoexcept = 5,
    /// The exception specification has not yet been evaluated.
    Unevaluated = 6,
    /// The exception specification has not yet been instantiated.
    Uninstantiated = 7,
    /// The exception specification has not been parsed yet.
    Unparsed = 8,
    /// `__declspec(nothrow)`
    NoThrow = 9,
}

/// Kind of a [`EvalResult`](crate::core::evaluation::EvalResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum EvalResultKind {
    Unexposed = 0,
    Int = 1,
    Float = 2,
    ObjCStrLiteral = 3,
    StrLiteral = 4,
    CfStr = 5,
    Other = 6,
}

/// Kind of a piece of a code-completion string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum CompletionChunkKind {
    /// A code-completion string that describes "optional" text that could
    /// be a part of the template (but is not required).
    Optional = 0,
    /// Text that a user would be expected to type to get this completion.
    TypedText = 1,
    /// Text that should be inserted as part of a code-completion result.
    Text = 2,
    /// Placeholder text that should be replaced by the user.
    Placeholder = 3,
    /// Informative text that should be displayed but never inserted.
    Informative = 4,
    /// The current parameter in a function call with overload candidates.
    CurrentParameter = 5,
    LeftParen = 6,
    RightParen = 7,
    LeftBracket = 8,
    RightBracket = 9,
    LeftBrace = 10,
    RightBrace = 11,
    LeftAngle = 12,
    RightAngle = 13,
    Comma = 14,
    /// Text that specifies the result type of a given result.
    ResultType = 15,
    Colon = 16,
    SemiColon = 17,
    Equal = 18,
    /// Horizontal space (`' '`).
    HorizontalSpace = 19,
    /// Vertical space (`'\n'`), after which it is generally a good idea to
    /// perform indentation.
    VerticalSpace = 20,
}

/// Categories of memory reported by
/// [`TranslationUnit::resource_usage`](crate::core::translation_unit::TranslationUnit::resource_usage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum TuResourceUsageKind {
    Ast = 1,
    Identifiers = 2,
    Selectors = 3,
    GlobalCompletionResults = 4,
    SourceManagerContentCache = 5,
    AstSideTables = 6,
    SourceManagerMembufferMalloc = 7,
    SourceManagerMembufferMmap = 8,
    ExternalAstSourceMembufferMalloc = 9,
    ExternalAstSourceMembufferMmap = 10,
    Preprocessor = 11,
    PreprocessingRecord = 12,
    SourceManagerDataStructures = 13,
    PreprocessorHeaderSearch = 14,
}

impl TuResourceUsageKind {
    pub const MEMORY_IN_BYTES_BEGIN: TuResourceUsageKind = TuResourceUsageKind::Ast;
    pub const MEMORY_IN_BYTES_END: TuResourceUsageKind = TuResourceUsageKind::PreprocessorHeaderSearch;
    pub const FIRST: TuResourceUsageKind = TuResourceUsageKind::Ast;
    pub const LAST: TuResourceUsageKind = TuResourceUsageKind::PreprocessorHeaderSearch;

    /// Human-readable name of this category, as reported by libclang.
    pub fn name(self) -> String {
        let ptr = unsafe { clang_getTUResourceUsageName(self.to_raw() as CXTUResourceUsageKind) };
        if ptr.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }
}

/// Properties of a [`PrintingPolicy`](crate::core::printing_policy::PrintingPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum PrintingPolicyProperty {
    Indentation = 0,
    SuppressSpecifiers = 1,
    SuppressTagKeyword = 2,
    IncludeTagDefinition = 3,
    SuppressScope = 4,
    SuppressUnwrittenScope = 5,
    SuppressInitializers = 6,
    ConstantArraySizeAsWritten = 7,
    AnonymousTagLocations = 8,
    SuppressStrongLifetime = 9,
    SuppressLifetimeQualifiers = 10,
    SuppressTemplateArgsInCxxConstructors = 11,
    Bool = 12,
    Restrict = 13,
    Alignof = 14,
    UnderscoreAlignof = 15,
    UseVoidForZeroParams = 16,
    TerseOutput = 17,
    PolishForDeclaration = 18,
    Half = 19,
    MsWChar = 20,
    IncludeNewlines = 21,
    MsvcFormatting = 22,
    ConstantsAsWritten = 23,
    SuppressImplicitBase = 24,
    FullyQualifiedName = 25,
}

impl PrintingPolicyProperty {
    pub const LAST: PrintingPolicyProperty = PrintingPolicyProperty::FullyQualifiedName;
}

/// Kind of a node in a parsed documentation comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum CommentKind {
    /// Null comment. No AST node is constructed at the requested location
    /// because there is no text or a syntax error.
    Null = 0,
    /// Plain text. Inline content.
    Text = 1,
    /// A command with word-like arguments that is considered inline content,
    /// e.g. `\c command`.
    InlineCommand = 2,
    /// HTML start tag with attributes (name-value pairs).
    HtmlStartTag = 3,
    /// HTML end tag.
    HtmlEndTag = 4,
    /// A paragraph, contains inline comment. The paragraph itself is block
    /// content.
    Paragraph = 5,
    /// A command that has zero or more word-like arguments and a paragraph
    /// as an argument, e.g. `\brief`.
    BlockCommand = 6,
    /// A `\param` or `\arg` command that describes the function parameter.
    ParamCommand = 7,
    /// A `\tparam` command that describes a template parameter.
    TParamCommand = 8,
    /// A verbatim block command, e.g. `\verbatim`.
    VerbatimBlockCommand = 9,
    /// A line of text that is contained within a verbatim block.
    VerbatimBlockLine = 10,
    /// A verbatim line command, e.g. `\fn`.
    VerbatimLine = 11,
    /// A full comment attached to a declaration, contains block content.
    FullComment = 12,
}

/// How an inline command's argument should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum CommentInlineCommandRenderKind {
    Normal = 0,
    Bold = 1,
    Monospaced = 2,
    Emphasized = 3,
    Anchor = 4,
}

/// Direction of a parameter documented by `\param`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum CommentParamPassDirection {
    In = 0,
    Out = 1,
    InOut = 2,
}
