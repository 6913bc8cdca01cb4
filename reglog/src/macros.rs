/// Writes a formatted record to a registered logger, filling in the call
/// site (`file!()`, the enclosing function and `line!()`).
///
/// Evaluates to `reglog::Result<bool>`, like [`Logger::write`](crate::Logger::write).
///
/// ```
/// use reglog::{Registry, Severity, reglog};
///
/// let registry = Registry::new();
/// registry.build("macro_doc", "/tmp/").unwrap();
/// let written = reglog!(registry, Severity::Info, "macro_doc", "{} + {} = {}", 1, 1, 2).unwrap();
/// assert!(written);
/// ```
#[macro_export]
macro_rules! reglog {
    ($registry:expr, $severity:expr, $name:expr, $($arg:tt)+) => {{
        let function = $crate::__function_name!();
        ($registry).get($name).and_then(|logger| {
            logger.write(
                $severity,
                ::std::file!(),
                function,
                ::std::line!(),
                &::std::format!($($arg)+),
            )
        })
    }};
}

#[macro_export]
macro_rules! reglog_debug {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::reglog!($registry, $crate::Severity::Debug, $name, $($arg)+)
    };
}

#[macro_export]
macro_rules! reglog_info {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::reglog!($registry, $crate::Severity::Info, $name, $($arg)+)
    };
}

#[macro_export]
macro_rules! reglog_warning {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::reglog!($registry, $crate::Severity::Warning, $name, $($arg)+)
    };
}

#[macro_export]
macro_rules! reglog_error {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::reglog!($registry, $crate::Severity::Error, $name, $($arg)+)
    };
}

#[macro_export]
macro_rules! reglog_fatal {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::reglog!($registry, $crate::Severity::Fatal, $name, $($arg)+)
    };
}

/// Path of the enclosing function, e.g. `my_crate::worker::run`. Closures
/// report the function they are defined in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        $crate::__strip_function_name(::std::any::type_name_of_val(&f))
    }};
}

#[doc(hidden)]
pub fn __strip_function_name(name: &str) -> &str {
    let mut name = name.strip_suffix("::f").unwrap_or(name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
