pub(crate) const DEFAULT_BIND: &str = "0.0.0.0:5555";
pub(crate) const DEFAULT_CAPACITY: &str = "100";
pub(crate) const DEFAULT_MAX_LINES: &str = "3";
pub(crate) const DEFAULT_TAIL: &str = "10";
pub(crate) const DEFAULT_FADE_IN: &str = "250ms";
pub(crate) const DEFAULT_HIDE_AFTER: &str = "5s";
pub(crate) const DEFAULT_FADE_OUT: &str = "500ms";
pub(crate) const DEFAULT_FRAME_INTERVAL: &str = "33ms";
pub(crate) const DEFAULT_SEND_INTERVAL: &str = "500ms";

/// Width used by the headless surface when `--width` is not given.
pub const DEFAULT_HEADLESS_WIDTH: usize = 80;
