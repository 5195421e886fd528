use core::convert::Infallible;

/// Marks a code path which can only be reached if the links of a tree are corrupted.
///
/// # Safety
/// Must never be reached by a tree which upholds its link invariants. In release builds, reaching it is undefined behavior.
#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        // Most of those panics are in a tree corrupton context, so we should
        // just abort the process to prevent unwinders from collecting corrupted data
        match abort_on_panic(|| -> Infallible { unreachable!("{}", msg) }) {}
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
        core::hint::unreachable_unchecked()
    }
}

#[inline]
#[cfg(debug_assertions)]
pub fn abort_on_panic<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "unwind_safety")]
    {
        std::panic::catch_unwind(
            std::panic::AssertUnwindSafe(f)
        ).unwrap_or_else(|_| std::process::abort())
    }
    #[cfg(not(feature = "unwind_safety"))]
    {
        f()
    }
}
