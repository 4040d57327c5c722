#[cfg(feature = "tracing")]
macro_rules! btrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "behavioral_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! btrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! bdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "behavioral_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! bwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "behavioral_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! bwarn {
    ($($tt:tt)*) => {};
}
