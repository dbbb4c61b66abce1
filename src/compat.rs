//! Logging shim shared by `std` and `no_std` builds.
//!
//! `trace!` forwards to `log::trace!` when the `log` feature is enabled and
//! compiles to nothing otherwise (arguments are still type checked).

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::log::trace!(target: "uriscan", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}
