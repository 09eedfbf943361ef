//! Enumerations reported by the indexer callbacks.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Kind of entity seen by the indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum IdxEntityKind {
    Unexposed = 0,
    Typedef = 1,
    Function = 2,
    Variable = 3,
    Field = 4,
    EnumConstant = 5,
    ObjCClass = 6,
    ObjCProtocol = 7,
    ObjCCategory = 8,
    ObjCInstanceMethod = 9,
    ObjCClassMethod = 10,
    ObjCProperty = 11,
    ObjCIvar = 12,
    Enum = 13,
    Struct = 14,
    Union = 15,
    CxxClass = 16,
    CxxNamespace = 17,
    CxxNamespaceAlias = 18,
    CxxStaticVariable = 19,
    CxxStaticMethod = 20,
    CxxInstanceMethod = 21,
    CxxConstructor = 22,
    CxxDestructor = 23,
    CxxConversionFunction = 24,
    CxxTypeAlias = 25,
    CxxInterface = 26,
    CxxConcept = 27,
}

impl IdxEntityKind {
    /// Whether this is one of the Objective-C container kinds.
    pub fn is_objc_container(self) -> bool {
        matches!(
            self,
            IdxEntityKind::ObjCClass | IdxEntityKind::ObjCProtocol | IdxEntityKind::ObjCCategory
        )
    }
}

/// Source language of an indexed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum IdxEntityLanguage {
    None = 0,
    C = 1,
    ObjC = 2,
    Cxx = 3,
    Swift = 4,
}

/// Whether an indexed C++ entity is a template, specialization, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum IdxEntityCxxTemplateKind {
    NonTemplate = 0,
    Template = 1,
    TemplatePartialSpecialization = 2,
    TemplateSpecialization = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum IdxAttrKind {
    Unexposed = 0,
    IbAction = 1,
    IbOutlet = 2,
    IbOutletCollection = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum IdxObjCContainerKind {
    ForwardRef = 0,
    Interface = 1,
    Implementation = 2,
}

/// How an entity reference was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum IdxEntityRefKind {
    /// The entity is referenced directly in user's code.
    Direct = 1,
    /// An implicit reference, e.g. a reference of an Objective-C method
    /// via the dot syntax.
    Implicit = 2,
}
