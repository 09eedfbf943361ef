use crate::internal::utils::from_cx_string_opt;
use cindex_sys::*;
use std::fmt;

/// A version number as used in availability attributes. Missing
/// components are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub subminor: Option<u32>,
}

impl From<CXVersion> for Version {
    fn from(raw: CXVersion) -> Self {
        Version {
            major: u32::try_from(raw.Major).ok(),
            minor: u32::try_from(raw.Minor).ok(),
            subminor: u32::try_from(raw.Subminor).ok(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(major) = self.major else {
            return f.write_str("(none)");
        };
        write!(f, "{}", major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
            if let Some(subminor) = self.subminor {
                write!(f, ".{}", subminor)?;
            }
        }
        Ok(())
    }
}

/// Availability of a declaration on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformAvailability {
    /// Platform name, e.g. `"macos"` or `"ios"`.
    pub platform: String,
    pub introduced: Version,
    pub deprecated: Version,
    pub obsoleted: Version,
    pub unavailable: bool,
    pub message: Option<String>,
}

impl PlatformAvailability {
    /// Copies and disposes a native entry.
    pub(crate) fn from_raw(mut raw: CXPlatformAvailability) -> Self {
        let copy = |text: CXString| {
            crate::internal::utils::read_cstring(unsafe { clang_getCString(text) })
        };
        let availability = PlatformAvailability {
            platform: copy(raw.Platform).unwrap_or_default(),
            introduced: raw.Introduced.into(),
            deprecated: raw.Deprecated.into(),
            obsoleted: raw.Obsoleted.into(),
            unavailable: raw.Unavailable != 0,
            message: copy(raw.Message).filter(|text| !text.is_empty()),
        };
        unsafe { clang_disposeCXPlatformAvailability(&mut raw) };
        availability
    }
}

/// Everything libclang knows about where a declaration may be used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvailabilityInfo {
    pub always_deprecated: bool,
    pub deprecated_message: Option<String>,
    pub always_unavailable: bool,
    pub unavailable_message: Option<String>,
    pub platforms: Vec<PlatformAvailability>,
}

impl AvailabilityInfo {
    pub(crate) fn query(cursor: CXCursor) -> Self {
        let count = unsafe {
            clang_getCursorPlatformAvailability(
                cursor,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                0,
            )
        };
        let mut always_deprecated = 0;
        let mut deprecated_message = CXString::default();
        let mut always_unavailable = 0;
        let mut unavailable_message = CXString::default();
        let mut platforms = vec![CXPlatformAvailability::default(); count.max(0) as usize];
        let filled = unsafe {
            clang_getCursorPlatformAvailability(
                cursor,
                &mut always_deprecated,
                &mut deprecated_message,
                &mut always_unavailable,
                &mut unavailable_message,
                platforms.as_mut_ptr(),
                platforms.len() as i32,
            )
        };
        platforms.truncate(filled.max(0) as usize);
        AvailabilityInfo {
            always_deprecated: always_deprecated != 0,
            deprecated_message: from_cx_string_opt(deprecated_message),
            always_unavailable: always_unavailable != 0,
            unavailable_message: from_cx_string_opt(unavailable_message),
            platforms: platforms.into_iter().map(PlatformAvailability::from_raw).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_raw() {
        let version: Version = CXVersion {
            Major: 10,
            Minor: 15,
            Subminor: -1,
        }
        .into();
        assert_eq!(version.major, Some(10));
        assert_eq!(version.minor, Some(15));
        assert_eq!(version.subminor, None);
        assert_eq!(version.to_string(), "10.15");
    }

    #[test]
    fn test_missing_version_displays_none() {
        let version: Version = CXVersion {
            Major: -1,
            Minor: -1,
            Subminor: -1,
        }
        .into();
        assert_eq!(version, Version::default());
        assert_eq!(version.to_string(), "(none)");
    }
}
