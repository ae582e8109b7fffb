//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet even when compiled with `--features debug_assertions`.

pub struct DebugFlags {
    /// Emit a line for every responsive layout pass (mode + attached bindings).
    pub print_layout_passes: bool,
    /// Emit every `PageEvent` handed to the engine.
    pub print_page_events: bool,
    /// Emit binding attach/skip decisions (missing elements etc.).
    pub print_bindings: bool,
    /// Emit rate fetch attempts, retries and the final outcome.
    pub print_rate_fetch: bool,
    /// Emit carousel transitions (manual and autoplay).
    pub print_carousel: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_layout_passes: false,
    print_page_events: false,
    print_bindings: false,
    print_rate_fetch: false,
    print_carousel: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_are_off_by_default() {
        let DebugFlags {
            print_layout_passes,
            print_page_events,
            print_bindings,
            print_rate_fetch,
            print_carousel,
        } = DEBUG_FLAGS;
        assert!(
            ![print_layout_passes, print_page_events, print_bindings, print_rate_fetch, print_carousel]
                .contains(&true)
        );
    }
}
