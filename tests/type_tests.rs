//! Integration tests for type queries and record layout.

mod common;

use cindex::prelude::*;
use common::{find_cursor, parse_source};

// =============================================================================
// Basic queries
// =============================================================================

#[test]
fn test_typedef_and_canonical() {
    let unit = parse_source("typedef int MyInt; MyInt value;", Language::C, &[]);
    let value = find_cursor(&unit, CursorKind::VarDecl, "value");
    let ty = value.ty().expect("Variable has no type");
    assert_eq!(ty.spelling(), "MyInt");

    let canonical = ty.canonical();
    assert_eq!(canonical.kind(), TypeKind::Int);
    assert_ne!(canonical, ty);
    assert_eq!(canonical, canonical.canonical());

    let typedef = find_cursor(&unit, CursorKind::TypedefDecl, "MyInt");
    assert_eq!(ty.declaration(), Some(typedef));
    assert_eq!(typedef.typedef_underlying_type().map(|ty| ty.kind()), Some(TypeKind::Int));

    let declared = typedef.ty().expect("Typedef has no type");
    assert_eq!(declared.kind(), TypeKind::Typedef);
    assert_eq!(declared.typedef_name(), Some("MyInt".to_string()));
    assert_eq!(canonical.typedef_name(), None);
}

#[test]
fn test_size_and_alignment() {
    let unit = parse_source("struct S { char c; int i; }; struct S s; struct Incomplete *p;", Language::C, &[]);
    let ty = find_cursor(&unit, CursorKind::VarDecl, "s").ty().expect("Variable has no type");
    assert_eq!(ty.size_of().expect("Failed to get size"), 8);
    assert_eq!(ty.align_of().expect("Failed to get alignment"), 4);
    assert_eq!(ty.offset_of("i").expect("Failed to get offset"), 32);
    assert!(matches!(
        ty.offset_of("missing"),
        Err(ClangError::Layout(TypeLayoutError::InvalidFieldName))
    ));
    assert!(!ty.objc_encoding().is_empty());

    let pointee = find_cursor(&unit, CursorKind::VarDecl, "p")
        .ty()
        .and_then(|ty| ty.pointee())
        .expect("Missing pointee");
    assert!(matches!(
        pointee.size_of(),
        Err(ClangError::Layout(TypeLayoutError::Incomplete))
    ));
}

#[test]
fn test_scalar_layout() {
    let unit = parse_source("int scalar; struct Foo { char a; int b; } foo;", Language::C, &[]);
    for name in ["scalar", "foo"] {
        let ty = find_cursor(&unit, CursorKind::VarDecl, name).ty().expect("Variable has no type");
        let size = ty.size_of().expect("Failed to get size");
        let align = ty.align_of().expect("Failed to get alignment");
        assert!(size > 0);
        assert!(align > 0);
        assert_eq!(size % align, 0);
    }
    let foo = find_cursor(&unit, CursorKind::VarDecl, "foo").ty().expect("Variable has no type");
    assert_eq!(foo.offset_of("b").expect("Failed to get offset"), 32);
}

#[test]
fn test_dependent_layout() {
    let unit = parse_source("template <typename T> struct Holder { T value; };", Language::CPlusPlus, &[]);
    let value = find_cursor(&unit, CursorKind::FieldDecl, "value").ty().expect("Field has no type");
    assert!(matches!(
        value.size_of(),
        Err(ClangError::Layout(TypeLayoutError::Dependent))
    ));
}

#[test]
fn test_type_declaration() {
    let unit = parse_source("struct Foo { int x; }; struct Foo globalFoo;", Language::C, &[]);
    let ty = find_cursor(&unit, CursorKind::VarDecl, "globalFoo")
        .ty()
        .expect("Variable has no type");
    let declaration = ty.declaration().expect("Type has no declaration");
    assert_eq!(declaration.kind(), CursorKind::StructDecl);
    assert_eq!(declaration.spelling(), "Foo");
    assert!(ty.is_pod());
}

// =============================================================================
// Qualifiers
// =============================================================================

#[test]
fn test_const_and_volatile() {
    let source = "const int c = 0; volatile int v; int plain; typedef const int ConstInt; ConstInt alias = 0;";
    let unit = parse_source(source, Language::C, &[]);
    let type_of = |name: &str| find_cursor(&unit, CursorKind::VarDecl, name).ty().expect("Variable has no type");

    assert!(type_of("c").is_const_qualified());
    assert!(type_of("c").is_literally_const_qualified());
    assert!(type_of("v").is_volatile_qualified());
    assert!(!type_of("plain").is_const_qualified());
    assert!(!type_of("plain").is_volatile_qualified());

    let alias = type_of("alias");
    assert!(alias.is_const_qualified());
    assert!(!alias.is_literally_const_qualified());
}

#[test]
fn test_restrict() {
    let unit = parse_source("void f(int *restrict p);", Language::C, &["-std=c99"]);
    let p = find_cursor(&unit, CursorKind::ParmDecl, "p").ty().expect("Parameter has no type");
    assert!(p.is_restrict_qualified());
    assert!(!p.is_const_qualified());
}

#[test]
fn test_ref_qualifiers() {
    let unit = parse_source("struct S { void m() &; void n() &&; void o(); };", Language::CPlusPlus, &["-std=c++11"]);
    let qualifier = |name: &str| {
        find_cursor(&unit, CursorKind::CxxMethod, name)
            .ty()
            .and_then(|ty| ty.ref_qualifier())
    };
    assert_eq!(qualifier("m"), Some(RefQualifier::LValue));
    assert_eq!(qualifier("n"), Some(RefQualifier::RValue));
    assert_eq!(qualifier("o"), None);
}

// =============================================================================
// Components
// =============================================================================

#[test]
fn test_pointers_and_arrays() {
    let unit = parse_source("int *ptr; double values[4];", Language::C, &[]);
    let ptr = find_cursor(&unit, CursorKind::VarDecl, "ptr").ty().expect("Variable has no type");
    assert_eq!(ptr.kind(), TypeKind::Pointer);
    assert_eq!(ptr.pointee().map(|ty| ty.kind()), Some(TypeKind::Int));
    assert_eq!(ptr.array_size(), None);

    let values = find_cursor(&unit, CursorKind::VarDecl, "values").ty().expect("Variable has no type");
    assert_eq!(values.kind(), TypeKind::ConstantArray);
    assert_eq!(values.array_size(), Some(4));
    assert_eq!(values.num_elements(), Some(4));
    assert_eq!(values.array_element_type().map(|ty| ty.kind()), Some(TypeKind::Double));
    assert_eq!(values.element_type().map(|ty| ty.kind()), Some(TypeKind::Double));
    assert_eq!(values.pointee(), None);
}

#[test]
fn test_function_types() {
    let unit = parse_source("int printf_like(const char *format, ...); void none(void);", Language::C, &[]);
    let ty = find_cursor(&unit, CursorKind::FunctionDecl, "printf_like")
        .ty()
        .expect("Function has no type");
    assert_eq!(ty.kind(), TypeKind::FunctionProto);
    assert!(ty.is_variadic());
    assert_eq!(ty.result_type().map(|ty| ty.kind()), Some(TypeKind::Int));
    let arguments = ty.argument_types().expect("Not a function type");
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].kind(), TypeKind::Pointer);
    assert!(ty.calling_convention().is_some());

    let none = find_cursor(&unit, CursorKind::FunctionDecl, "none")
        .ty()
        .expect("Function has no type");
    assert!(!none.is_variadic());
    assert_eq!(none.argument_types().map(|types| types.len()), Some(0));

    let int = ty.result_type().expect("Missing result type");
    assert_eq!(int.argument_types(), None);
}

#[test]
fn test_member_pointer_class_type() {
    let unit = parse_source("struct S { int x; }; int S::*member = &S::x;", Language::CPlusPlus, &[]);
    let ty = find_cursor(&unit, CursorKind::VarDecl, "member").ty().expect("Variable has no type");
    assert_eq!(ty.kind(), TypeKind::MemberPointer);
    let class = ty.class_type().expect("Missing class type");
    assert_eq!(class.canonical().kind(), TypeKind::Record);
}

#[test]
fn test_template_type_arguments() {
    let source = "template <typename T> struct Box { T value; }; Box<int> boxed;";
    let unit = parse_source(source, Language::CPlusPlus, &[]);
    let ty = find_cursor(&unit, CursorKind::VarDecl, "boxed").ty().expect("Variable has no type");
    let arguments = ty.template_arguments().expect("Not a specialization");
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].kind(), TypeKind::Int);
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_record_fields() {
    let unit = parse_source("struct Point { int x; int y; union { int a; float b; }; };", Language::C, &[]);
    let ty = find_cursor(&unit, CursorKind::StructDecl, "Point").ty().expect("Record has no type");
    let names: Vec<String> = ty
        .fields()
        .expect("Failed to list fields")
        .iter()
        .map(|field| field.spelling())
        .collect();
    assert_eq!(&names[..2], ["x", "y"]);
    assert_eq!(names.len(), 3);
}

#[test]
fn test_visit_fields_break() {
    let unit = parse_source("struct Point { int x; int y; int z; };", Language::C, &[]);
    let ty = find_cursor(&unit, CursorKind::StructDecl, "Point").ty().expect("Record has no type");
    let mut seen = Vec::new();
    let stopped = ty
        .visit_fields(|field| {
            seen.push(field.spelling());
            if seen.len() == 2 {
                VisitorResult::Break
            } else {
                VisitorResult::Continue
            }
        })
        .expect("Failed to visit fields");
    assert!(stopped);
    assert_eq!(seen, vec!["x", "y"]);
}

#[test]
fn test_visit_fields_requires_record() {
    let unit = parse_source("int scalar;", Language::C, &[]);
    let ty = find_cursor(&unit, CursorKind::VarDecl, "scalar").ty().expect("Variable has no type");
    assert!(matches!(
        ty.fields(),
        Err(ClangError::UnexpectedTypeKind {
            expected: "record",
            found: Some(TypeKind::Int),
        })
    ));
}

#[test]
fn test_type_display() {
    let unit = parse_source("const char *name;", Language::C, &[]);
    let ty = find_cursor(&unit, CursorKind::VarDecl, "name").ty().expect("Variable has no type");
    assert_eq!(ty.to_string(), "const char *");
    assert!(format!("{:?}", ty).contains("Pointer"));
}
