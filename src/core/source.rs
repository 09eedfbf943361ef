//! Positions in source files.
//!
//! Locations, ranges and files are plain values copied out of libclang.
//! They carry the lifetime of whatever produced them (a translation unit
//! or a loaded diagnostic set) and nothing else; operations that need the
//! unit, such as looking up the cursor at a location, live on
//! [`TranslationUnit`](crate::core::translation_unit::TranslationUnit).

use crate::internal::utils::{from_cx_string, from_cx_string_opt};
use cindex_sys::*;
use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::ptr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A resolved position: file, 1-based line and column, and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: Option<File<'a>>,
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

/// A position as adjusted by `#line` directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresumedLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

#[derive(Clone, Copy)]
pub struct SourceLocation<'a> {
    raw: CXSourceLocation,
    _marker: PhantomData<&'a ()>,
}

type LocationDecoder =
    unsafe extern "C" fn(CXSourceLocation, *mut CXFile, *mut c_uint, *mut c_uint, *mut c_uint);

impl<'a> SourceLocation<'a> {
    pub(crate) fn from_raw(raw: CXSourceLocation) -> Self {
        SourceLocation {
            raw,
            _marker: PhantomData,
        }
    }

    pub(crate) fn as_raw(&self) -> CXSourceLocation {
        self.raw
    }

    /// A location that refers to nothing.
    pub fn null() -> Self {
        Self::from_raw(unsafe { clang_getNullLocation() })
    }

    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }

    fn decode(&self, decoder: LocationDecoder) -> Location<'a> {
        let mut file: CXFile = ptr::null_mut();
        let mut line: c_uint = 0;
        let mut column: c_uint = 0;
        let mut offset: c_uint = 0;
        unsafe { decoder(self.raw, &mut file, &mut line, &mut column, &mut offset) };
        Location {
            file: File::from_raw(file),
            line,
            column,
            offset,
        }
    }

    /// Where the characters at this location were written.
    pub fn spelling_location(&self) -> Location<'a> {
        self.decode(clang_getSpellingLocation)
    }

    /// Where a macro expansion covering this location was expanded.
    pub fn expansion_location(&self) -> Location<'a> {
        self.decode(clang_getExpansionLocation)
    }

    /// The file position of this location, macro arguments resolved to
    /// where they were written.
    pub fn file_location(&self) -> Location<'a> {
        self.decode(clang_getFileLocation)
    }

    pub fn presumed_location(&self) -> PresumedLocation {
        let mut filename = CXString::default();
        let mut line: c_uint = 0;
        let mut column: c_uint = 0;
        unsafe { clang_getPresumedLocation(self.raw, &mut filename, &mut line, &mut column) };
        PresumedLocation {
            filename: from_cx_string(filename),
            line,
            column,
        }
    }

    /// Whether the location is in the main file of its unit.
    pub fn is_in_main_file(&self) -> bool {
        unsafe { clang_Location_isFromMainFile(self.raw) != 0 }
    }

    pub fn is_in_system_header(&self) -> bool {
        unsafe { clang_Location_isInSystemHeader(self.raw) != 0 }
    }
}

impl PartialEq for SourceLocation<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_equalLocations(self.raw, other.raw) != 0 }
    }
}

impl Eq for SourceLocation<'_> {}

impl fmt::Debug for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.spelling_location();
        f.debug_struct("SourceLocation")
            .field("file", &location.file.map(|file| file.name()))
            .field("line", &location.line)
            .field("column", &location.column)
            .finish()
    }
}

/// A half-open range between two locations.
#[derive(Clone, Copy)]
pub struct SourceRange<'a> {
    raw: CXSourceRange,
    _marker: PhantomData<&'a ()>,
}

impl<'a> SourceRange<'a> {
    pub(crate) fn from_raw(raw: CXSourceRange) -> Self {
        SourceRange {
            raw,
            _marker: PhantomData,
        }
    }

    /// Like [`SourceRange::from_raw`], mapping the null range to `None`.
    pub(crate) fn from_raw_opt(raw: CXSourceRange) -> Option<Self> {
        let range = Self::from_raw(raw);
        (!range.is_null()).then_some(range)
    }

    /// Copies and disposes a native range list.
    pub(crate) fn from_list(list: *mut CXSourceRangeList) -> Vec<Self> {
        if list.is_null() {
            return Vec::new();
        }
        let ranges = unsafe {
            let list_ref = &*list;
            if list_ref.ranges.is_null() || list_ref.count == 0 {
                Vec::new()
            } else {
                std::slice::from_raw_parts(list_ref.ranges, list_ref.count as usize)
                    .iter()
                    .map(|range| Self::from_raw(*range))
                    .collect()
            }
        };
        unsafe { clang_disposeSourceRangeList(list) };
        ranges
    }

    pub(crate) fn as_raw(&self) -> CXSourceRange {
        self.raw
    }

    pub fn new(start: SourceLocation<'a>, end: SourceLocation<'a>) -> Self {
        Self::from_raw(unsafe { clang_getRange(start.as_raw(), end.as_raw()) })
    }

    pub fn null() -> Self {
        Self::from_raw(unsafe { clang_getNullRange() })
    }

    pub fn is_null(&self) -> bool {
        unsafe { clang_Range_isNull(self.raw) != 0 }
    }

    pub fn start(&self) -> SourceLocation<'a> {
        SourceLocation::from_raw(unsafe { clang_getRangeStart(self.raw) })
    }

    pub fn end(&self) -> SourceLocation<'a> {
        SourceLocation::from_raw(unsafe { clang_getRangeEnd(self.raw) })
    }
}

impl PartialEq for SourceRange<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_equalRanges(self.raw, other.raw) != 0 }
    }
}

impl Eq for SourceRange<'_> {}

impl fmt::Debug for SourceRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceRange")
            .field("start", &self.start())
            .field("end", &self.end())
            .finish()
    }
}

/// Identity of a file on disk that survives renames within one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileUniqueId([u64; 3]);

/// A file taking part in a translation unit.
#[derive(Clone, Copy)]
pub struct File<'a> {
    raw: CXFile,
    _marker: PhantomData<&'a ()>,
}

impl<'a> File<'a> {
    pub(crate) fn from_raw(raw: CXFile) -> Option<Self> {
        (!raw.is_null()).then_some(File {
            raw,
            _marker: PhantomData,
        })
    }

    pub(crate) fn as_raw(&self) -> CXFile {
        self.raw
    }

    /// The path the file was opened with.
    pub fn name(&self) -> String {
        from_cx_string(unsafe { clang_getFileName(self.raw) })
    }

    /// The absolute path with symlinks resolved, when available.
    pub fn real_path(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_File_tryGetRealPathName(self.raw) })
    }

    pub fn modification_time(&self) -> SystemTime {
        let seconds = unsafe { clang_getFileTime(self.raw) };
        UNIX_EPOCH + Duration::from_secs(seconds.max(0) as u64)
    }

    pub fn unique_id(&self) -> Option<FileUniqueId> {
        let mut id = CXFileUniqueID::default();
        let failed = unsafe { clang_getFileUniqueID(self.raw, &mut id) };
        (failed == 0).then(|| FileUniqueId(id.data.map(|part| part as u64)))
    }
}

impl PartialEq for File<'_> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { clang_File_isEqual(self.raw, other.raw) != 0 }
    }
}

impl Eq for File<'_> {}

impl fmt::Debug for File<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("File").field(&self.name()).finish()
    }
}

impl fmt::Display for File<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
