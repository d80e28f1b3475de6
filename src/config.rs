use std::time::Duration;

/// How long the splash screen stays up before the page is shown.
pub const BOOT_DELAY: Duration = Duration::from_millis(2000);

/// Distance below the scroll offset used to decide which section is in view.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Number of decorative particles drawn behind the page.
pub const PARTICLE_COUNT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub boot_delay: Duration,
    pub scroll_lookahead: f64,
    pub particle_count: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            boot_delay: BOOT_DELAY,
            scroll_lookahead: SCROLL_LOOKAHEAD_PX,
            particle_count: PARTICLE_COUNT,
        }
    }
}
