//! Cursor kinds.
//!
//! Discriminants are the stable `CXCursorKind` values. Cursor kinds only
//! ever grow between libclang releases, so the table is independent of the
//! headers the bindings were generated from.

use crate::types::NativeEnum;
use cindex_sys::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The kind of entity a [`Cursor`](crate::core::cursor::Cursor) points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum CursorKind {
    // ========== DECLARATIONS ==========
    /// A declaration whose specific kind is not exposed via this interface.
    UnexposedDecl = 1,
    /// A C or C++ struct.
    StructDecl = 2,
    /// A C or C++ union.
    UnionDecl = 3,
    /// A C++ class.
    ClassDecl = 4,
    /// An enumeration.
    EnumDecl = 5,
    /// A field in a struct, union or C++ class.
    FieldDecl = 6,
    /// An enumerator constant.
    EnumConstantDecl = 7,
    /// A function.
    FunctionDecl = 8,
    /// A variable.
    VarDecl = 9,
    /// A function or method parameter.
    ParmDecl = 10,
    ObjCInterfaceDecl = 11,
    ObjCCategoryDecl = 12,
    ObjCProtocolDecl = 13,
    ObjCPropertyDecl = 14,
    ObjCIvarDecl = 15,
    ObjCInstanceMethodDecl = 16,
    ObjCClassMethodDecl = 17,
    ObjCImplementationDecl = 18,
    ObjCCategoryImplDecl = 19,
    /// A typedef.
    TypedefDecl = 20,
    /// A C++ class method.
    CxxMethod = 21,
    /// A C++ namespace.
    Namespace = 22,
    /// A linkage specification, e.g. `extern "C"`.
    LinkageSpec = 23,
    Constructor = 24,
    Destructor = 25,
    ConversionFunction = 26,
    TemplateTypeParameter = 27,
    NonTypeTemplateParameter = 28,
    TemplateTemplateParameter = 29,
    FunctionTemplate = 30,
    ClassTemplate = 31,
    ClassTemplatePartialSpecialization = 32,
    NamespaceAlias = 33,
    UsingDirective = 34,
    UsingDeclaration = 35,
    /// A C++ alias declaration (`using T = ...`).
    TypeAliasDecl = 36,
    ObjCSynthesizeDecl = 37,
    ObjCDynamicDecl = 38,
    /// An access specifier (`public:`, `private:`, ...).
    CxxAccessSpecifier = 39,

    // ========== REFERENCES ==========
    ObjCSuperClassRef = 40,
    ObjCProtocolRef = 41,
    ObjCClassRef = 42,
    /// A reference to a type declaration.
    TypeRef = 43,
    CxxBaseSpecifier = 44,
    /// A reference to a class template, function template, template
    /// template parameter, or class template partial specialization.
    TemplateRef = 45,
    NamespaceRef = 46,
    /// A reference to a member of a struct, union or class that occurs in
    /// some non-expression context.
    MemberRef = 47,
    LabelRef = 48,
    /// A reference to a set of overloaded functions or function templates
    /// that has not yet been resolved to a specific function.
    OverloadedDeclRef = 49,
    /// A reference to a variable that occurs in some non-expression
    /// context, e.g. a lambda capture list.
    VariableRef = 50,

    // ========== ERROR CONDITIONS ==========
    InvalidFile = 70,
    NoDeclFound = 71,
    NotImplemented = 72,
    InvalidCode = 73,

    // ========== EXPRESSIONS ==========
    /// An expression whose specific kind is not exposed via this interface.
    UnexposedExpr = 100,
    /// An expression that refers to some value declaration.
    DeclRefExpr = 101,
    /// An expression that refers to a member of a struct, union or class.
    MemberRefExpr = 102,
    /// An expression that calls a function.
    CallExpr = 103,
    ObjCMessageExpr = 104,
    BlockExpr = 105,
    IntegerLiteral = 106,
    FloatingLiteral = 107,
    ImaginaryLiteral = 108,
    StringLiteral = 109,
    CharacterLiteral = 110,
    ParenExpr = 111,
    UnaryOperator = 112,
    ArraySubscriptExpr = 113,
    BinaryOperator = 114,
    CompoundAssignOperator = 115,
    ConditionalOperator = 116,
    CStyleCastExpr = 117,
    CompoundLiteralExpr = 118,
    InitListExpr = 119,
    AddrLabelExpr = 120,
    StmtExpr = 121,
    GenericSelectionExpr = 122,
    GnuNullExpr = 123,
    CxxStaticCastExpr = 124,
    CxxDynamicCastExpr = 125,
    CxxReinterpretCastExpr = 126,
    CxxConstCastExpr = 127,
    CxxFunctionalCastExpr = 128,
    CxxTypeidExpr = 129,
    CxxBoolLiteralExpr = 130,
    CxxNullPtrLiteralExpr = 131,
    CxxThisExpr = 132,
    CxxThrowExpr = 133,
    CxxNewExpr = 134,
    CxxDeleteExpr = 135,
    /// A unary expression such as `sizeof` or `alignof`.
    UnaryExpr = 136,
    ObjCStringLiteral = 137,
    ObjCEncodeExpr = 138,
    ObjCSelectorExpr = 139,
    ObjCProtocolExpr = 140,
    ObjCBridgedCastExpr = 141,
    PackExpansionExpr = 142,
    SizeOfPackExpr = 143,
    LambdaExpr = 144,
    ObjCBoolLiteralExpr = 145,
    ObjCSelfExpr = 146,
    /// OpenMP or OpenACC array section. Older headers spell it
    /// `CXCursor_OMPArraySectionExpr`.
    ArraySectionExpr = 147,
    ObjCAvailabilityCheckExpr = 148,
    FixedPointLiteral = 149,
    OmpArrayShapingExpr = 150,
    OmpIteratorExpr = 151,
    CxxAddrspaceCastExpr = 152,
    ConceptSpecializationExpr = 153,
    RequiresExpr = 154,
    CxxParenListInitExpr = 155,
    PackIndexingExpr = 156,

    // ========== STATEMENTS ==========
    /// A statement whose specific kind is not exposed via this interface.
    UnexposedStmt = 200,
    LabelStmt = 201,
    /// A group of statements like `{ stmt stmt }`.
    CompoundStmt = 202,
    CaseStmt = 203,
    DefaultStmt = 204,
    IfStmt = 205,
    SwitchStmt = 206,
    WhileStmt = 207,
    DoStmt = 208,
    ForStmt = 209,
    GotoStmt = 210,
    IndirectGotoStmt = 211,
    ContinueStmt = 212,
    BreakStmt = 213,
    ReturnStmt = 214,
    /// A GCC inline assembly statement. `CXCursor_AsmStmt` is the older
    /// spelling of the same constant.
    GccAsmStmt = 215,
    ObjCAtTryStmt = 216,
    ObjCAtCatchStmt = 217,
    ObjCAtFinallyStmt = 218,
    ObjCAtThrowStmt = 219,
    ObjCAtSynchronizedStmt = 220,
    ObjCAutoreleasePoolStmt = 221,
    ObjCForCollectionStmt = 222,
    CxxCatchStmt = 223,
    CxxTryStmt = 224,
    CxxForRangeStmt = 225,
    SehTryStmt = 226,
    SehExceptStmt = 227,
    SehFinallyStmt = 228,
    MsAsmStmt = 229,
    /// The null statement `;`.
    NullStmt = 230,
    /// Adaptor class for mixing declarations with statements and expressions.
    DeclStmt = 231,
    OmpParallelDirective = 232,
    OmpSimdDirective = 233,
    OmpForDirective = 234,
    OmpSectionsDirective = 235,
    OmpSectionDirective = 236,
    OmpSingleDirective = 237,
    OmpParallelForDirective = 238,
    OmpParallelSectionsDirective = 239,
    OmpTaskDirective = 240,
    OmpMasterDirective = 241,
    OmpCriticalDirective = 242,
    OmpTaskyieldDirective = 243,
    OmpBarrierDirective = 244,
    OmpTaskwaitDirective = 245,
    OmpFlushDirective = 246,
    SehLeaveStmt = 247,
    OmpOrderedDirective = 248,
    OmpAtomicDirective = 249,
    OmpForSimdDirective = 250,
    OmpParallelForSimdDirective = 251,
    OmpTargetDirective = 252,
    OmpTeamsDirective = 253,
    OmpTaskgroupDirective = 254,
    OmpCancellationPointDirective = 255,
    OmpCancelDirective = 256,
    OmpTargetDataDirective = 257,
    OmpTaskLoopDirective = 258,
    OmpTaskLoopSimdDirective = 259,
    OmpDistributeDirective = 260,
    OmpTargetEnterDataDirective = 261,
    OmpTargetExitDataDirective = 262,
    OmpTargetParallelDirective = 263,
    OmpTargetParallelForDirective = 264,
    OmpTargetUpdateDirective = 265,
    OmpDistributeParallelForDirective = 266,
    OmpDistributeParallelForSimdDirective = 267,
    OmpDistributeSimdDirective = 268,
    OmpTargetParallelForSimdDirective = 269,
    OmpTargetSimdDirective = 270,
    OmpTeamsDistributeDirective = 271,
    OmpTeamsDistributeSimdDirective = 272,
    OmpTeamsDistributeParallelForSimdDirective = 273,
    OmpTeamsDistributeParallelForDirective = 274,
    OmpTargetTeamsDirective = 275,
    OmpTargetTeamsDistributeDirective = 276,
    OmpTargetTeamsDistributeParallelForDirective = 277,
    OmpTargetTeamsDistributeParallelForSimdDirective = 278,
    OmpTargetTeamsDistributeSimdDirective = 279,
    BuiltinBitCastExpr = 280,
    OmpMasterTaskLoopDirective = 281,
    OmpParallelMasterTaskLoopDirective = 282,
    OmpMasterTaskLoopSimdDirective = 283,
    OmpParallelMasterTaskLoopSimdDirective = 284,
    OmpParallelMasterDirective = 285,
    OmpDepobjDirective = 286,
    OmpScanDirective = 287,
    OmpTileDirective = 288,
    OmpCanonicalLoop = 289,
    OmpInteropDirective = 290,
    OmpDispatchDirective = 291,
    OmpMaskedDirective = 292,
    OmpUnrollDirective = 293,
    OmpMetaDirective = 294,
    OmpGenericLoopDirective = 295,
    OmpTeamsGenericLoopDirective = 296,
    OmpTargetTeamsGenericLoopDirective = 297,
    OmpParallelGenericLoopDirective = 298,
    OmpTargetParallelGenericLoopDirective = 299,
    OmpParallelMaskedDirective = 300,
    OmpMaskedTaskLoopDirective = 301,
    OmpMaskedTaskLoopSimdDirective = 302,
    OmpParallelMaskedTaskLoopDirective = 303,
    OmpParallelMaskedTaskLoopSimdDirective = 304,
    OmpErrorDirective = 305,
    OmpScopeDirective = 306,
    OmpReverseDirective = 307,
    OmpInterchangeDirective = 308,
    OmpAssumeDirective = 309,
    OpenAccComputeConstruct = 320,
    OpenAccLoopConstruct = 321,
    OpenAccCombinedConstruct = 322,
    OpenAccDataConstruct = 323,
    OpenAccEnterDataConstruct = 324,
    OpenAccExitDataConstruct = 325,
    OpenAccHostDataConstruct = 326,
    OpenAccWaitConstruct = 327,
    OpenAccInitConstruct = 328,
    OpenAccShutdownConstruct = 329,
    OpenAccSetConstruct = 330,
    OpenAccUpdateConstruct = 331,

    /// The translation unit itself.
    TranslationUnit = 350,

    // ========== ATTRIBUTES ==========
    /// An attribute whose specific kind is not exposed via this interface.
    UnexposedAttr = 400,
    IbActionAttr = 401,
    IbOutletAttr = 402,
    IbOutletCollectionAttr = 403,
    CxxFinalAttr = 404,
    CxxOverrideAttr = 405,
    AnnotateAttr = 406,
    AsmLabelAttr = 407,
    PackedAttr = 408,
    PureAttr = 409,
    ConstAttr = 410,
    NoDuplicateAttr = 411,
    CudaConstantAttr = 412,
    CudaDeviceAttr = 413,
    CudaGlobalAttr = 414,
    CudaHostAttr = 415,
    CudaSharedAttr = 416,
    VisibilityAttr = 417,
    DllExport = 418,
    DllImport = 419,
    NsReturnsRetained = 420,
    NsReturnsNotRetained = 421,
    NsReturnsAutoreleased = 422,
    NsConsumesSelf = 423,
    NsConsumed = 424,
    ObjCException = 425,
    ObjCNsObject = 426,
    ObjCIndependentClass = 427,
    ObjCPreciseLifetime = 428,
    ObjCReturnsInnerPointer = 429,
    ObjCRequiresSuper = 430,
    ObjCRootClass = 431,
    ObjCSubclassingRestricted = 432,
    ObjCExplicitProtocolImpl = 433,
    ObjCDesignatedInitializer = 434,
    ObjCRuntimeVisible = 435,
    ObjCBoxable = 436,
    FlagEnum = 437,
    ConvergentAttr = 438,
    WarnUnusedAttr = 439,
    WarnUnusedResultAttr = 440,
    AlignedAttr = 441,

    // ========== PREPROCESSING ==========
    PreprocessingDirective = 500,
    MacroDefinition = 501,
    /// A macro expansion. `CXCursor_MacroInstantiation` is the older
    /// spelling of the same constant.
    MacroExpansion = 502,
    InclusionDirective = 503,

    // ========== EXTRA DECLARATIONS ==========
    /// A module import declaration.
    ModuleImportDecl = 600,
    TypeAliasTemplateDecl = 601,
    /// A `static_assert` or `_Static_assert` node.
    StaticAssert = 602,
    /// A friend declaration.
    FriendDecl = 603,
    /// A C++20 concept.
    ConceptDecl = 604,

    /// A code completion overload candidate.
    OverloadCandidate = 700,
}

impl CursorKind {
    pub const FIRST_DECL: CursorKind = CursorKind::UnexposedDecl;
    pub const LAST_DECL: CursorKind = CursorKind::CxxAccessSpecifier;
    pub const FIRST_REF: CursorKind = CursorKind::ObjCSuperClassRef;
    pub const LAST_REF: CursorKind = CursorKind::VariableRef;
    pub const FIRST_INVALID: CursorKind = CursorKind::InvalidFile;
    pub const LAST_INVALID: CursorKind = CursorKind::InvalidCode;
    pub const FIRST_EXPR: CursorKind = CursorKind::UnexposedExpr;
    pub const LAST_EXPR: CursorKind = CursorKind::PackIndexingExpr;
    pub const FIRST_STMT: CursorKind = CursorKind::UnexposedStmt;
    pub const LAST_STMT: CursorKind = CursorKind::OpenAccUpdateConstruct;
    pub const FIRST_ATTR: CursorKind = CursorKind::UnexposedAttr;
    pub const LAST_ATTR: CursorKind = CursorKind::AlignedAttr;
    pub const FIRST_PREPROCESSING: CursorKind = CursorKind::PreprocessingDirective;
    pub const LAST_PREPROCESSING: CursorKind = CursorKind::InclusionDirective;
    pub const FIRST_EXTRA_DECL: CursorKind = CursorKind::ModuleImportDecl;
    pub const LAST_EXTRA_DECL: CursorKind = CursorKind::ConceptDecl;

    /// Historical spelling of [`CursorKind::GccAsmStmt`].
    pub const ASM_STMT: CursorKind = CursorKind::GccAsmStmt;
    /// Historical spelling of [`CursorKind::MacroExpansion`].
    pub const MACRO_INSTANTIATION: CursorKind = CursorKind::MacroExpansion;

    fn raw(self) -> CXCursorKind {
        self.to_raw() as CXCursorKind
    }

    /// Returns libclang's name for this kind, e.g. `"StructDecl"`.
    pub fn spelling(self) -> String {
        crate::internal::utils::from_cx_string(unsafe { clang_getCursorKindSpelling(self.raw()) })
    }

    pub fn is_declaration(self) -> bool {
        unsafe { clang_isDeclaration(self.raw()) != 0 }
    }

    pub fn is_reference(self) -> bool {
        unsafe { clang_isReference(self.raw()) != 0 }
    }

    pub fn is_expression(self) -> bool {
        unsafe { clang_isExpression(self.raw()) != 0 }
    }

    pub fn is_statement(self) -> bool {
        unsafe { clang_isStatement(self.raw()) != 0 }
    }

    pub fn is_attribute(self) -> bool {
        unsafe { clang_isAttribute(self.raw()) != 0 }
    }

    pub fn is_invalid(self) -> bool {
        unsafe { clang_isInvalid(self.raw()) != 0 }
    }

    pub fn is_translation_unit(self) -> bool {
        unsafe { clang_isTranslationUnit(self.raw()) != 0 }
    }

    pub fn is_preprocessing(self) -> bool {
        unsafe { clang_isPreprocessing(self.raw()) != 0 }
    }

    /// Whether this kind is one of the `Unexposed*` catch-alls.
    pub fn is_unexposed(self) -> bool {
        unsafe { clang_isUnexposed(self.raw()) != 0 }
    }
}

impl std::fmt::Display for CursorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
