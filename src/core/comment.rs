//! Parsed documentation comments.
//!
//! A [`Comment`] is a node of the tree libclang builds from a declaration's
//! doc comment. The root is a [`CommentKind::FullComment`]; which accessors
//! are meaningful depends on [`Comment::kind`], and the others return empty
//! values.

use crate::internal::utils::{from_cx_string, from_cx_string_opt};
use crate::types::{CommentInlineCommandRenderKind, CommentKind, CommentParamPassDirection, NativeEnum};
use cindex_sys::*;
use std::fmt;
use std::marker::PhantomData;

#[derive(Clone, Copy)]
pub struct Comment<'tu> {
    raw: CXComment,
    _marker: PhantomData<&'tu ()>,
}

/// An attribute of an HTML start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAttribute {
    pub name: String,
    pub value: String,
}

impl<'tu> Comment<'tu> {
    /// Wraps a node, mapping the null comment to `None`.
    pub(crate) fn from_raw(raw: CXComment) -> Option<Self> {
        let kind = unsafe { clang_Comment_getKind(raw) };
        (kind != CXComment_Null).then_some(Comment {
            raw,
            _marker: PhantomData,
        })
    }

    pub fn kind(&self) -> Option<CommentKind> {
        CommentKind::from_raw(unsafe { clang_Comment_getKind(self.raw) } as i32)
    }

    pub fn children(&self) -> Vec<Comment<'tu>> {
        let count = unsafe { clang_Comment_getNumChildren(self.raw) };
        (0..count)
            .filter_map(|i| Comment::from_raw(unsafe { clang_Comment_getChild(self.raw, i) }))
            .collect()
    }

    /// Whether the node is a text or paragraph made only of whitespace.
    pub fn is_whitespace(&self) -> bool {
        unsafe { clang_Comment_isWhitespace(self.raw) != 0 }
    }

    /// Whether inline content is followed by a newline.
    pub fn has_trailing_newline(&self) -> bool {
        unsafe { clang_InlineContentComment_hasTrailingNewline(self.raw) != 0 }
    }

    // ========== TEXT ==========

    pub fn text(&self) -> String {
        from_cx_string(unsafe { clang_TextComment_getText(self.raw) })
    }

    // ========== INLINE COMMANDS ==========

    /// e.g. `c` for `\c foo`.
    pub fn inline_command_name(&self) -> String {
        from_cx_string(unsafe { clang_InlineCommandComment_getCommandName(self.raw) })
    }

    pub fn inline_command_render_kind(&self) -> Option<CommentInlineCommandRenderKind> {
        CommentInlineCommandRenderKind::from_raw(unsafe {
            clang_InlineCommandComment_getRenderKind(self.raw)
        } as i32)
    }

    pub fn inline_command_arguments(&self) -> Vec<String> {
        let count = unsafe { clang_InlineCommandComment_getNumArgs(self.raw) };
        (0..count)
            .map(|i| from_cx_string(unsafe { clang_InlineCommandComment_getArgText(self.raw, i) }))
            .collect()
    }

    // ========== HTML ==========

    pub fn html_tag_name(&self) -> String {
        from_cx_string(unsafe { clang_HTMLTagComment_getTagName(self.raw) })
    }

    pub fn is_html_self_closing(&self) -> bool {
        unsafe { clang_HTMLStartTagComment_isSelfClosing(self.raw) != 0 }
    }

    pub fn html_attributes(&self) -> Vec<HtmlAttribute> {
        let count = unsafe { clang_HTMLStartTag_getNumAttrs(self.raw) };
        (0..count)
            .map(|i| HtmlAttribute {
                name: from_cx_string(unsafe { clang_HTMLStartTag_getAttrName(self.raw, i) }),
                value: from_cx_string(unsafe { clang_HTMLStartTag_getAttrValue(self.raw, i) }),
            })
            .collect()
    }

    /// The tag rendered back to HTML, e.g. `<br/>`.
    pub fn html_string(&self) -> String {
        from_cx_string(unsafe { clang_HTMLTagComment_getAsString(self.raw) })
    }

    // ========== BLOCK COMMANDS ==========

    /// e.g. `brief` for `\brief`.
    pub fn block_command_name(&self) -> String {
        from_cx_string(unsafe { clang_BlockCommandComment_getCommandName(self.raw) })
    }

    pub fn block_command_arguments(&self) -> Vec<String> {
        let count = unsafe { clang_BlockCommandComment_getNumArgs(self.raw) };
        (0..count)
            .map(|i| from_cx_string(unsafe { clang_BlockCommandComment_getArgText(self.raw, i) }))
            .collect()
    }

    pub fn block_command_paragraph(&self) -> Option<Comment<'tu>> {
        Comment::from_raw(unsafe { clang_BlockCommandComment_getParagraph(self.raw) })
    }

    // ========== PARAMETERS ==========

    pub fn param_name(&self) -> String {
        from_cx_string(unsafe { clang_ParamCommandComment_getParamName(self.raw) })
    }

    /// Position of the documented parameter in the function's parameter
    /// list, if the name matched one.
    pub fn param_index(&self) -> Option<u32> {
        let valid = unsafe { clang_ParamCommandComment_isParamIndexValid(self.raw) } != 0;
        valid.then(|| unsafe { clang_ParamCommandComment_getParamIndex(self.raw) })
    }

    pub fn is_param_direction_explicit(&self) -> bool {
        unsafe { clang_ParamCommandComment_isDirectionExplicit(self.raw) != 0 }
    }

    pub fn param_direction(&self) -> Option<CommentParamPassDirection> {
        CommentParamPassDirection::from_raw(unsafe { clang_ParamCommandComment_getDirection(self.raw) } as i32)
    }

    pub fn tparam_name(&self) -> String {
        from_cx_string(unsafe { clang_TParamCommandComment_getParamName(self.raw) })
    }

    // ========== VERBATIM ==========

    pub fn verbatim_block_line_text(&self) -> String {
        from_cx_string(unsafe { clang_VerbatimBlockLineComment_getText(self.raw) })
    }

    pub fn verbatim_line_text(&self) -> String {
        from_cx_string(unsafe { clang_VerbatimLineComment_getText(self.raw) })
    }

    // ========== FULL COMMENT ==========

    pub fn to_html(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_FullComment_getAsHTML(self.raw) })
    }

    pub fn to_xml(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_FullComment_getAsXML(self.raw) })
    }
}

impl fmt::Debug for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comment")
            .field("kind", &self.kind())
            .field("children", &self.children())
            .finish()
    }
}
