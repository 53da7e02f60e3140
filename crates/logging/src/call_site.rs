//! crates/logging/src/call_site.rs
//! Source location captured for a single log call.

use std::panic::Location;

/// Function, file and line of the code that issued a log call.
///
/// Call sites are formatting metadata only; nothing in the logger branches on
/// them. The [`call_site!`](crate::call_site!) macro fills all three fields
/// automatically, while [`CallSite::caller`] can only recover file and line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallSite<'a> {
    function: &'a str,
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(function: &'a str, file: &'a str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Returns the function name as supplied.
    #[must_use]
    pub const fn function(&self) -> &'a str {
        self.function
    }

    /// Returns the full file path as supplied.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the last `/`-separated segment of the file path.
    ///
    /// ```
    /// use logging::CallSite;
    ///
    /// assert_eq!(CallSite::new("f", "/a/b/c/File.ext", 1).file_base_name(), "File.ext");
    /// assert_eq!(CallSite::new("f", "File.ext", 1).file_base_name(), "File.ext");
    /// assert_eq!(CallSite::new("f", "", 1).file_base_name(), "");
    /// ```
    #[must_use]
    pub fn file_base_name(&self) -> &'a str {
        self.file.rsplit('/').next().unwrap_or_default()
    }
}

impl CallSite<'static> {
    /// Captures the caller's file and line; the function name is left empty.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new("", location.file(), location.line())
    }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Turns the type name of the marker fn emitted by `call_site!` into the bare
/// name of the enclosing function.
#[doc(hidden)]
pub fn function_name(marker: &'static str) -> &'static str {
    let mut path = marker.strip_suffix("::__call_site").unwrap_or(marker);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Captures the enclosing function, file and line as a
/// [`CallSite<'static>`](crate::CallSite).
///
/// The function is reported by its bare name, without the module path.
/// Inside closures the closure frames are dropped, so the enclosing named
/// function is reported.
///
/// ```
/// fn load_settings() -> logging::CallSite<'static> {
///     logging::call_site!()
/// }
///
/// let site = load_settings();
/// assert_eq!(site.function(), "load_settings");
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            {
                fn __call_site() {}
                $crate::__private::function_name($crate::__private::type_name_of(__call_site))
            },
            ::core::file!(),
            ::core::line!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories() {
        let site = CallSite::new("do_thing", "/x/y/z.rs", 42);
        assert_eq!(site.file_base_name(), "z.rs");
        assert_eq!(site.file(), "/x/y/z.rs");
    }

    #[test]
    fn base_name_without_separator_is_whole_path() {
        assert_eq!(CallSite::new("", "main.rs", 1).file_base_name(), "main.rs");
    }

    #[test]
    fn base_name_of_empty_path_is_empty() {
        assert_eq!(CallSite::new("", "", 1).file_base_name(), "");
    }

    #[test]
    fn base_name_of_trailing_separator_is_empty() {
        assert_eq!(CallSite::new("", "/tmp/dir/", 1).file_base_name(), "");
    }

    #[test]
    fn caller_captures_this_file() {
        let site = CallSite::caller();
        assert_eq!(site.file_base_name(), "call_site.rs");
        assert_eq!(site.function(), "");
        assert!(site.line() > 0);
    }

    #[test]
    fn macro_reports_enclosing_function() {
        let site = crate::call_site!();
        assert_eq!(site.function(), "macro_reports_enclosing_function");
        assert_eq!(site.line(), line!() - 2);
    }

    #[test]
    fn macro_skips_closure_frames() {
        let capture = || crate::call_site!();
        assert_eq!(capture().function(), "macro_skips_closure_frames");
    }

    #[test]
    fn function_name_keeps_last_segment() {
        assert_eq!(function_name("app::worker::run::__call_site"), "run");
        assert_eq!(
            function_name("app::run::{{closure}}::{{closure}}::__call_site"),
            "run"
        );
        assert_eq!(function_name("<app::Job as app::Task>::poll::__call_site"), "poll");
        assert_eq!(function_name("plain"), "plain");
    }
}
