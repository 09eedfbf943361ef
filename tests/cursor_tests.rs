//! Integration tests for cursor traversal, relations and properties.

mod common;

use cindex::prelude::*;
use common::{find_cursor, parse_source};
use std::collections::HashSet;

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn test_children_and_descendants() {
    let unit = parse_source("struct S { int a; int b; }; int f(int x) { return x; }", Language::C, &[]);
    let root = unit.cursor();
    let kinds: Vec<CursorKind> = root.children().iter().map(|cursor| cursor.kind()).collect();
    assert_eq!(kinds, vec![CursorKind::StructDecl, CursorKind::FunctionDecl]);

    let descendants = root.descendants();
    assert!(descendants.iter().any(|cursor| cursor.kind() == CursorKind::ParmDecl));
    assert!(descendants.len() > root.children().len());
}

#[test]
fn test_visit_parameters_in_order() {
    let unit = parse_source("void f(int a, int b);", Language::C, &[]);
    let f = find_cursor(&unit, CursorKind::FunctionDecl, "f");
    let mut seen = Vec::new();
    f.visit_children(|child, _| {
        seen.push(child.spelling());
        ChildVisit::Continue
    });
    assert_eq!(seen, vec!["a", "b"]);

    let mut seen = Vec::new();
    let stopped = f.visit_children(|child, _| {
        seen.push(child.spelling());
        ChildVisit::Break
    });
    assert!(stopped);
    assert_eq!(seen, vec!["a"]);
}

#[test]
fn test_visit_children_break() {
    let unit = parse_source("int a; int b; int c;", Language::C, &[]);
    let mut seen = Vec::new();
    let stopped = unit.cursor().visit_children(|child, parent| {
        assert!(parent.is_translation_unit());
        seen.push(child.spelling());
        if child.spelling() == "b" {
            ChildVisit::Break
        } else {
            ChildVisit::Continue
        }
    });
    assert!(stopped);
    assert_eq!(seen, vec!["a", "b"]);
}

#[test]
fn test_try_visit_children_returns_error() {
    let unit = parse_source("int a; int b;", Language::C, &[]);
    let result: Result<bool, String> = unit.cursor().try_visit_children(|child, _| {
        if child.spelling() == "b" {
            Err(format!("stopped at {}", child.spelling()))
        } else {
            Ok(ChildVisit::Continue)
        }
    });
    assert_eq!(result, Err("stopped at b".to_string()));
}

#[test]
#[should_panic(expected = "visitor exploded")]
fn test_visitor_panic_is_resumed() {
    let unit = parse_source("int a; int b;", Language::C, &[]);
    unit.cursor().visit_children(|_, _| panic!("visitor exploded"));
}

#[test]
fn test_visitor_panic_does_not_poison_unit() {
    let unit = parse_source("int a; int b;", Language::C, &[]);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        unit.cursor().visit_children(|_, _| panic!("boom"));
    }));
    assert!(result.is_err());
    assert_eq!(unit.cursor().children().len(), 2);
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_cursor_identity() {
    let unit = parse_source("void f(int x); void f(int x) {}", Language::C, &[]);
    let children = unit.cursor().children();
    let declaration = children[0];
    let definition = children[1];

    assert_eq!(declaration.spelling(), "f");
    assert_eq!(declaration.display_name(), "f(int)");
    assert_eq!(declaration.usr(), Some("c:@F@f".to_string()));
    assert_eq!(declaration.language(), Some(Language::C));
    assert!(!declaration.is_definition());
    assert!(definition.is_definition());
    assert_eq!(declaration.definition(), Some(definition));
    assert_eq!(declaration.canonical(), definition.canonical());

    let unique: HashSet<Cursor<'_>> = children.iter().map(|cursor| cursor.canonical()).collect();
    assert_eq!(unique.len(), 1);
}

#[test]
fn test_referenced_cursor() {
    let unit = parse_source("void f(void); void g(void) { f(); }", Language::C, &[]);
    let call = unit
        .cursor()
        .find(|cursor| cursor.kind() == CursorKind::CallExpr)
        .expect("Missing call expression");
    let referenced = call.referenced().expect("Call does not reference a function");
    assert_eq!(referenced.spelling(), "f");
    assert_eq!(referenced.kind(), CursorKind::FunctionDecl);
}

#[test]
fn test_has_attributes() {
    let unit = parse_source("__attribute__((unused)) int v; int w;", Language::C, &[]);
    assert!(find_cursor(&unit, CursorKind::VarDecl, "v").has_attributes());
    assert!(!find_cursor(&unit, CursorKind::VarDecl, "w").has_attributes());
}

#[test]
fn test_function_arguments() {
    let unit = parse_source("int add(int a, int b);", Language::C, &[]);
    let add = find_cursor(&unit, CursorKind::FunctionDecl, "add");
    let names: Vec<String> = add
        .arguments()
        .expect("Function has no argument list")
        .iter()
        .map(|argument| argument.spelling())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(add.result_type().map(|ty| ty.kind()), Some(TypeKind::Int));
    assert!(find_cursor(&unit, CursorKind::ParmDecl, "a").arguments().is_none());
}

#[test]
fn test_semantic_parent() {
    let unit = parse_source("namespace n { struct S { void m(); }; }", Language::CPlusPlus, &[]);
    let method = find_cursor(&unit, CursorKind::CxxMethod, "m");
    let record = method.semantic_parent().expect("Method has no parent");
    assert_eq!(record.spelling(), "S");
    let namespace = record.semantic_parent().expect("Record has no parent");
    assert_eq!(namespace.kind(), CursorKind::Namespace);
    assert_eq!(method.lexical_parent(), Some(record));
}

// =============================================================================
// Anonymous declarations
// =============================================================================

#[test]
fn test_anonymous_struct_member() {
    let unit = parse_source("struct Outer { struct { int x; }; };", Language::C, &[]);
    let outer = find_cursor(&unit, CursorKind::StructDecl, "Outer");
    let inner = outer
        .children()
        .into_iter()
        .find(|cursor| cursor.kind() == CursorKind::StructDecl)
        .expect("Missing inner struct");
    assert!(inner.is_anonymous());
    assert!(inner.is_anonymous_record_declaration());
    assert!(!outer.is_anonymous());
}

#[test]
fn test_anonymous_struct_with_declarator() {
    let unit = parse_source("struct { int x; int y; } point;", Language::C, &[]);
    let record = unit
        .cursor()
        .find(|cursor| cursor.kind() == CursorKind::StructDecl)
        .expect("Missing struct");
    assert!(record.is_anonymous());
    assert!(!record.is_anonymous_record_declaration());
}

#[test]
fn test_anonymous_namespace() {
    let unit = parse_source("namespace { int hidden; } namespace named { int shown; }", Language::CPlusPlus, &[]);
    let namespaces: Vec<Cursor<'_>> = unit.cursor().children();
    assert!(namespaces[0].is_anonymous());
    assert!(!namespaces[1].is_anonymous());
}

// =============================================================================
// C++ declarations
// =============================================================================

#[test]
fn test_exception_specification() {
    let source = "void f() noexcept; void g() noexcept(true); void h();";
    let unit = parse_source(source, Language::CPlusPlus, &["-std=c++17"]);
    assert_eq!(
        find_cursor(&unit, CursorKind::FunctionDecl, "f").exception_specification(),
        Some(ExceptionSpecificationKind::BasicNoexcept)
    );
    assert_eq!(
        find_cursor(&unit, CursorKind::FunctionDecl, "g").exception_specification(),
        Some(ExceptionSpecificationKind::ComputedNoexcept)
    );
    assert_eq!(
        find_cursor(&unit, CursorKind::FunctionDecl, "h").exception_specification(),
        Some(ExceptionSpecificationKind::None)
    );
    assert_eq!(unit.cursor().exception_specification(), None);
}

#[test]
fn test_method_predicates() {
    let source = r#"
        struct Base {
            virtual void run() = 0;
            static int count();
            int get() const;
            Base() = default;
        };
        struct Derived : virtual Base {
            void run() override;
            mutable int cache;
        };
    "#;
    let unit = parse_source(source, Language::CPlusPlus, &["-std=c++17"]);
    let base = find_cursor(&unit, CursorKind::StructDecl, "Base");
    assert!(base.is_abstract_record());

    let run = base
        .children()
        .into_iter()
        .find(|cursor| cursor.spelling() == "run")
        .expect("Missing Base::run");
    assert!(run.is_virtual_method());
    assert!(run.is_pure_virtual_method());
    assert!(find_cursor(&unit, CursorKind::CxxMethod, "count").is_static_method());
    assert!(find_cursor(&unit, CursorKind::CxxMethod, "get").is_const_method());
    assert!(find_cursor(&unit, CursorKind::Constructor, "Base").is_defaulted_method());
    assert!(find_cursor(&unit, CursorKind::Constructor, "Base").is_default_constructor());
    assert!(find_cursor(&unit, CursorKind::FieldDecl, "cache").is_mutable_field());
    let base_specifier = unit
        .cursor()
        .find(|cursor| cursor.kind() == CursorKind::CxxBaseSpecifier)
        .expect("Missing base specifier");
    assert!(base_specifier.is_virtual_base());
    assert_eq!(
        find_cursor(&unit, CursorKind::FieldDecl, "cache").access_specifier(),
        Some(AccessSpecifier::Public)
    );
}

#[test]
fn test_scoped_enum_and_constants() {
    let source = "enum class Color : unsigned { Red = 1, Green = 4 }; enum Plain { A = -3 };";
    let unit = parse_source(source, Language::CPlusPlus, &["-std=c++17"]);
    let color = find_cursor(&unit, CursorKind::EnumDecl, "Color");
    assert!(color.is_scoped_enum());
    assert_eq!(color.enum_integer_type().map(|ty| ty.kind()), Some(TypeKind::UInt));
    assert_eq!(find_cursor(&unit, CursorKind::EnumConstantDecl, "Green").enum_constant_unsigned_value(), Some(4));
    assert_eq!(find_cursor(&unit, CursorKind::EnumConstantDecl, "A").enum_constant_value(), Some(-3));
    assert!(!find_cursor(&unit, CursorKind::EnumDecl, "Plain").is_scoped_enum());
    assert_eq!(color.enum_constant_value(), None);
}

#[test]
fn test_template_arguments() {
    let source = "template <typename T, int N> void fill() {} template <> void fill<int, 8>() {}";
    let unit = parse_source(source, Language::CPlusPlus, &[]);
    let specialization = find_cursor(&unit, CursorKind::FunctionDecl, "fill");
    let arguments = specialization.template_arguments().expect("Not a specialization");
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments[0].kind, Some(TemplateArgumentKind::Type));
    assert_eq!(arguments[0].ty.map(|ty| ty.kind()), Some(TypeKind::Int));
    assert_eq!(arguments[1].kind, Some(TemplateArgumentKind::Integral));
    assert_eq!(arguments[1].value, Some(8));

    let template = specialization.specialized_template().expect("No primary template");
    assert_eq!(template.kind(), CursorKind::FunctionTemplate);
    assert_eq!(template.template_kind(), Some(CursorKind::FunctionDecl));
    assert!(template.template_arguments().is_none());
}

// =============================================================================
// Linkage, storage and variables
// =============================================================================

#[test]
fn test_linkage_and_storage() {
    let source = "static int hidden; extern int shared; int f(void) { int local = 0; return local; }";
    let unit = parse_source(source, Language::C, &[]);
    let hidden = find_cursor(&unit, CursorKind::VarDecl, "hidden");
    let shared = find_cursor(&unit, CursorKind::VarDecl, "shared");
    let local = find_cursor(&unit, CursorKind::VarDecl, "local");

    assert_eq!(hidden.linkage(), Some(Linkage::Internal));
    assert_eq!(hidden.storage_class(), Some(StorageClass::Static));
    assert_eq!(shared.linkage(), Some(Linkage::External));
    assert_eq!(shared.storage_class(), Some(StorageClass::Extern));
    assert_eq!(local.linkage(), Some(Linkage::NoLinkage));
    assert_eq!(local.has_var_decl_global_storage(), Some(false));
    assert_eq!(hidden.has_var_decl_global_storage(), Some(true));
    assert_eq!(shared.has_var_decl_external_storage(), Some(true));
    assert_eq!(
        local.var_decl_initializer().map(|init| init.kind()),
        Some(CursorKind::IntegerLiteral)
    );
}

#[test]
fn test_bit_fields_and_offsets() {
    let unit = parse_source("struct Flags { int a; unsigned b : 3; };", Language::C, &[]);
    let a = find_cursor(&unit, CursorKind::FieldDecl, "a");
    let b = find_cursor(&unit, CursorKind::FieldDecl, "b");
    assert!(!a.is_bit_field());
    assert_eq!(a.bit_field_width(), None);
    assert!(b.is_bit_field());
    assert_eq!(b.bit_field_width(), Some(3));
    assert_eq!(a.offset_of_field().expect("Failed to get offset"), 0);
    assert_eq!(b.offset_of_field().expect("Failed to get offset"), 32);
}

#[test]
fn test_macros() {
    let source = "#define SQUARE(x) ((x) * (x))\n#define ANSWER 42\nint v = ANSWER;\n";
    let unit = TranslationUnit::from_source(
        source,
        Language::C,
        &[] as &[&str],
        TranslationUnitFlags::DETAILED_PREPROCESSING_RECORD,
    )
    .expect("Failed to parse source");
    let square = find_cursor(&unit, CursorKind::MacroDefinition, "SQUARE");
    let answer = find_cursor(&unit, CursorKind::MacroDefinition, "ANSWER");
    assert!(square.is_preprocessing());
    assert!(square.is_macro_function_like());
    assert!(!answer.is_macro_function_like());
    assert!(!answer.is_macro_builtin());
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_evaluate_initializer() {
    let unit = parse_source("int x = 40 + 2; double d = 1.5; const char *s = \"hi\";", Language::C, &[]);
    let x = find_cursor(&unit, CursorKind::VarDecl, "x")
        .var_decl_initializer()
        .expect("Missing initializer");
    assert_eq!(x.evaluate().and_then(|result| result.as_i64()), Some(42));

    let d = find_cursor(&unit, CursorKind::VarDecl, "d")
        .var_decl_initializer()
        .expect("Missing initializer");
    assert_eq!(d.evaluate().and_then(|result| result.as_f64()), Some(1.5));

    let s = find_cursor(&unit, CursorKind::VarDecl, "s").evaluate().expect("Failed to evaluate");
    assert_eq!(s.as_str(), Some("hi"));
}

#[test]
fn test_evaluate_enum_constant() {
    let unit = parse_source("enum E { ANSWER = 42 };", Language::C, &[]);
    let constant = find_cursor(&unit, CursorKind::EnumConstantDecl, "ANSWER");
    assert_eq!(constant.enum_constant_value(), Some(42));
    let value = constant
        .children()
        .first()
        .and_then(|expression| expression.evaluate())
        .expect("Failed to evaluate enum constant");
    assert_eq!(value, EvalResult::Int(42));
    assert_eq!(value.kind(), EvalResultKind::Int);
}

#[test]
fn test_availability() {
    let source = "void old(void) __attribute__((deprecated(\"use g\"))); void gone(void) __attribute__((unavailable));";
    let unit = parse_source(source, Language::C, &[]);
    let old = find_cursor(&unit, CursorKind::FunctionDecl, "old");
    let gone = find_cursor(&unit, CursorKind::FunctionDecl, "gone");
    assert_eq!(old.availability(), Some(AvailabilityKind::Deprecated));
    assert_eq!(gone.availability(), Some(AvailabilityKind::NotAvailable));

    let info = old.platform_availability();
    assert!(info.always_deprecated);
    assert_eq!(info.deprecated_message.as_deref(), Some("use g"));
    assert!(gone.platform_availability().always_unavailable);
}

// =============================================================================
// Objective-C
// =============================================================================

#[test]
fn test_objc_properties_and_qualifiers() {
    let source = r#"
        @protocol Delegate
        @optional
        - (void)didFinish;
        @end
        @interface Widget
        @property (nonatomic, readonly) int size;
        - (void)fill:(inout int *)buffer count:(in int)count;
        @end
    "#;
    let unit = parse_source(source, Language::ObjC, &[]);
    let size = find_cursor(&unit, CursorKind::ObjCPropertyDecl, "size");
    let attributes = size.objc_property_attributes();
    assert!(attributes.contains(ObjCPropertyAttributes::NONATOMIC | ObjCPropertyAttributes::READONLY));
    assert_eq!(size.objc_property_getter_name().as_deref(), Some("size"));

    let buffer = find_cursor(&unit, CursorKind::ParmDecl, "buffer");
    assert!(buffer.objc_decl_qualifiers().contains(ObjCDeclQualifiers::INOUT));
    let count = find_cursor(&unit, CursorKind::ParmDecl, "count");
    assert!(count.objc_decl_qualifiers().contains(ObjCDeclQualifiers::IN));

    let method = find_cursor(&unit, CursorKind::ObjCInstanceMethodDecl, "fill:count:");
    assert!(method.objc_type_encoding().is_some());
    assert!(find_cursor(&unit, CursorKind::ObjCInstanceMethodDecl, "didFinish").is_objc_optional());
    assert!(!method.is_objc_optional());
}

#[test]
fn test_spelling_name_range_pieces() {
    let source = "@interface Widget\n- (void)fill:(int)buffer count:(int)count;\n@end\nint plain(void);\n";
    let unit = parse_source(source, Language::ObjC, &[]);
    let method = find_cursor(&unit, CursorKind::ObjCInstanceMethodDecl, "fill:count:");
    let fill = method
        .spelling_name_range(0, 0)
        .expect("Missing range for fill:")
        .start()
        .file_location();
    let count = method
        .spelling_name_range(1, 0)
        .expect("Missing range for count:")
        .start()
        .file_location();
    assert_eq!((fill.line, fill.column), (2, 9));
    assert_eq!(count.line, 2);
    assert!(count.column > fill.column);
    assert!(method.spelling_name_range(2, 0).is_none());

    let plain = find_cursor(&unit, CursorKind::FunctionDecl, "plain");
    let name = plain.spelling_name_range(0, 0).expect("Missing range for plain").start().file_location();
    assert_eq!(name.line, 4);
    assert!(plain.spelling_name_range(1, 0).is_none());
}

// =============================================================================
// Source
// =============================================================================

#[test]
fn test_cursor_location_and_extent() {
    let unit = parse_source("int main(void) {\n  return 0;\n}\n", Language::C, &[]);
    let main = find_cursor(&unit, CursorKind::FunctionDecl, "main");
    let location = main.location().file_location();
    assert_eq!((location.line, location.column), (1, 5));
    assert!(main.is_from_main_file());
    assert!(!main.is_in_system_header());
    let extent = main.extent();
    assert_eq!(extent.start().file_location().line, 1);
    assert_eq!(extent.end().file_location().line, 3);
    assert_eq!(main.tokens().first().map(|token| token.spelling()), Some("int".to_string()));
}

#[test]
fn test_pretty_printed_with_policy() {
    let source = "namespace N { struct S { int x; }; S f(); }";
    let unit = parse_source(source, Language::CPlusPlus, &[]);
    let f = find_cursor(&unit, CursorKind::FunctionDecl, "f");
    let mut policy = f.printing_policy();
    policy.set(PrintingPolicyProperty::FullyQualifiedName, 1);
    assert_eq!(policy.get(PrintingPolicyProperty::FullyQualifiedName), 1);
    policy.set_enabled(PrintingPolicyProperty::TerseOutput, true);
    assert!(policy.is_enabled(PrintingPolicyProperty::TerseOutput));

    let printed = f.pretty_printed(Some(&policy));
    assert!(!printed.is_empty());
    assert!(printed.contains("::") || printed.contains('N'));
    assert!(!f.pretty_printed(None).is_empty());
}

#[test]
fn test_display_and_debug() {
    let unit = parse_source("int value;", Language::C, &[]);
    let value = find_cursor(&unit, CursorKind::VarDecl, "value");
    assert_eq!(value.to_string(), "value");
    assert!(format!("{:?}", value).contains("VarDecl"));
}
