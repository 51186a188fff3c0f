//! Source location of a log call.
//!
//! Rust has no runtime stack inspection worth paying for on every call, so the
//! logging macros capture `module_path!()`, the enclosing function path, `file!()`
//! and `line!()` at compile time. Class and function names are only split out of
//! those strings when a template asks for them.

const CLOSURE: &str = "::{{closure}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    module: &'static str,
    function_path: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(
        module: &'static str,
        function_path: &'static str,
        file: &'static str,
        line: u32,
    ) -> Self {
        Self {
            module,
            function_path,
            file,
            line,
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Name of the enclosing function, closures looked through.
    pub fn function(&self) -> &'static str {
        split_last(self.trimmed_path()).1
    }

    /// Type whose `impl` block encloses the call, or `""` for free functions.
    pub fn class(&self) -> &'static str {
        let (owner, _) = split_last(self.trimmed_path());
        if owner.is_empty() || owner == self.module {
            return "";
        }
        if let Some(qualified) = owner.strip_prefix('<') {
            // `<crate::Type as crate::Trait>`
            let ty = match qualified.split_once(" as ") {
                Some((ty, _)) => ty,
                None => qualified.strip_suffix('>').unwrap_or(qualified),
            };
            return split_last(ty).1;
        }
        match owner.strip_prefix(self.module).and_then(|rest| rest.strip_prefix("::")) {
            Some(rest) => rest,
            None => split_last(owner).1,
        }
    }

    fn trimmed_path(&self) -> &'static str {
        let mut path = self.function_path;
        while let Some(outer) = path.strip_suffix(CLOSURE) {
            path = outer;
        }
        path
    }
}

/// Splits at the last `::` outside of generic brackets.
fn split_last(path: &'static str) -> (&'static str, &'static str) {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'>' => depth += 1,
            b'<' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && i > 0 && bytes[i - 1] == b':' => {
                return (&path[..i - 1], &path[i + 1..]);
            }
            _ => {}
        }
    }
    ("", path)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(path) => path,
            None => name,
        }
    }};
}

/// Captures the [`CallSite`] of the enclosing code.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::std::module_path!(),
            $crate::__function_path!(),
            ::std::file!(),
            ::std::line!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Probe {
        fn site() -> CallSite {
            crate::call_site!()
        }
    }

    #[test]
    fn free_function_has_no_class() {
        let site = crate::call_site!();
        assert_eq!(site.function(), "free_function_has_no_class");
        assert_eq!(site.class(), "");
        assert!(site.file().ends_with("call_site.rs"));
        assert!(site.line() > 0);
    }

    #[test]
    fn method_reports_its_type() {
        let site = Probe::site();
        assert_eq!(site.function(), "site");
        assert_eq!(site.class(), "Probe");
    }

    #[test]
    fn closures_are_looked_through() {
        let site = CallSite::new(
            "app::jobs",
            "app::jobs::Runner::tick::{{closure}}::{{closure}}",
            "src/jobs.rs",
            9,
        );
        assert_eq!(site.function(), "tick");
        assert_eq!(site.class(), "Runner");
    }

    #[test]
    fn trait_impls_and_generics() {
        let site = CallSite::new("app", "<app::Queue<u8> as app::Drain>::drain", "src/lib.rs", 3);
        assert_eq!(site.function(), "drain");
        assert_eq!(site.class(), "Queue<u8>");

        let site = CallSite::new("app", "app::Cache<std::string::String>::get", "src/lib.rs", 4);
        assert_eq!(site.function(), "get");
        assert_eq!(site.class(), "Cache<std::string::String>");
    }

    #[test]
    fn top_level_main() {
        let site = CallSite::new("app", "app::main", "src/main.rs", 1);
        assert_eq!(site.function(), "main");
        assert_eq!(site.class(), "");
    }
}
