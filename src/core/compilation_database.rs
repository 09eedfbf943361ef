use crate::core::error::{ClangError, ClangResult};
use crate::internal::utils::{from_cx_string, path_to_cstring};
use crate::types::{CompilationDatabaseError, NativeEnum};
use cindex_sys::*;
use log::debug;
use std::ffi::c_void;
use std::marker::PhantomData;
use std::path::Path;
use std::ptr::NonNull;

/// A `compile_commands.json` database.
///
/// # Examples
///
/// ```no_run
/// use cindex::prelude::*;
///
/// let database = CompilationDatabase::from_directory("build")?;
/// for command in database.all_compile_commands().iter() {
///     println!("{}: {:?}", command.filename(), command.arguments());
/// }
/// # Ok::<(), cindex::ClangError>(())
/// ```
#[derive(Debug)]
pub struct CompilationDatabase {
    inner: NonNull<c_void>,
}

unsafe impl Send for CompilationDatabase {}

impl CompilationDatabase {
    /// Loads the database stored in `directory`.
    pub fn from_directory(directory: impl AsRef<Path>) -> ClangResult<Self> {
        let directory = directory.as_ref();
        let c_path = path_to_cstring(directory)?;
        let mut error: CXCompilationDatabase_Error = CXCompilationDatabase_NoError;
        let raw = unsafe { clang_CompilationDatabase_fromDirectory(c_path.as_ptr(), &mut error) };
        match CompilationDatabaseError::from_raw(error as i32) {
            Some(CompilationDatabaseError::NoError) => {}
            _ => {
                if !raw.is_null() {
                    unsafe { clang_CompilationDatabase_dispose(raw) };
                }
                return Err(ClangError::CompilationDatabase(CompilationDatabaseError::CanNotLoadDatabase));
            }
        }
        let inner = NonNull::new(raw)
            .ok_or(ClangError::CompilationDatabase(CompilationDatabaseError::CanNotLoadDatabase))?;
        debug!("loaded compilation database from {}", directory.display());
        Ok(CompilationDatabase { inner })
    }

    /// The commands that compile `file`. Empty if the database has none.
    pub fn compile_commands(&self, file: impl AsRef<Path>) -> ClangResult<CompileCommands<'_>> {
        let c_path = path_to_cstring(file.as_ref())?;
        Ok(CompileCommands::from_raw(unsafe {
            clang_CompilationDatabase_getCompileCommands(self.inner.as_ptr(), c_path.as_ptr())
        }))
    }

    pub fn all_compile_commands(&self) -> CompileCommands<'_> {
        CompileCommands::from_raw(unsafe { clang_CompilationDatabase_getAllCompileCommands(self.inner.as_ptr()) })
    }
}

impl Drop for CompilationDatabase {
    fn drop(&mut self) {
        debug!("disposing compilation database");
        unsafe { clang_CompilationDatabase_dispose(self.inner.as_ptr()) }
    }
}

/// A list of compile commands. Disposed on drop.
#[derive(Debug)]
pub struct CompileCommands<'db> {
    raw: CXCompileCommands,
    _marker: PhantomData<&'db CompilationDatabase>,
}

impl<'db> CompileCommands<'db> {
    fn from_raw(raw: CXCompileCommands) -> Self {
        if !raw.is_null() {
            debug!("acquired compile command list");
        }
        CompileCommands {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        if self.raw.is_null() {
            return 0;
        }
        unsafe { clang_CompileCommands_getSize(self.raw) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<CompileCommand<'_>> {
        if index >= self.len() {
            return None;
        }
        let raw = unsafe { clang_CompileCommands_getCommand(self.raw, index as _) };
        (!raw.is_null()).then_some(CompileCommand {
            raw,
            _marker: PhantomData,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = CompileCommand<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl Drop for CompileCommands<'_> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            debug!("disposing compile command list");
            unsafe { clang_CompileCommands_dispose(self.raw) }
        }
    }
}

/// One compiler invocation.
#[derive(Debug, Clone, Copy)]
pub struct CompileCommand<'a> {
    raw: CXCompileCommand,
    _marker: PhantomData<&'a ()>,
}

impl CompileCommand<'_> {
    /// The working directory of the invocation.
    pub fn directory(&self) -> String {
        from_cx_string(unsafe { clang_CompileCommand_getDirectory(self.raw) })
    }

    pub fn filename(&self) -> String {
        from_cx_string(unsafe { clang_CompileCommand_getFilename(self.raw) })
    }

    /// The full command line, compiler executable first.
    pub fn arguments(&self) -> Vec<String> {
        let count = unsafe { clang_CompileCommand_getNumArgs(self.raw) };
        (0..count)
            .map(|i| from_cx_string(unsafe { clang_CompileCommand_getArg(self.raw, i) }))
            .collect()
    }
}
