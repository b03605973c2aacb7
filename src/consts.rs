use std::time::Duration;

/// The default duration that join and part events are held back so that a
/// burst of them collapses into a single system message.
pub const DEFAULT_FLUSH_DELAY: Duration = Duration::from_millis(500);
