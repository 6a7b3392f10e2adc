pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Defaults and limits for the dashboard, grouped by the widget or
    //! subsystem they configure.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    /// Buffer size of the activity and carousel event channels.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // TABLE CONFIGURATION
    // =============================================================================

    /// Number of mock project rows generated at startup.
    pub const DEFAULT_ROW_COUNT: usize = 200;

    /// Rows shown per table page.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    // =============================================================================
    // CAROUSEL CONFIGURATION
    // =============================================================================

    pub mod carousel {
        /// Time each quote stays on screen (milliseconds).
        pub const ROTATION_INTERVAL_MS: u64 = 5000;

        /// Shortest rotation interval accepted from configuration (milliseconds).
        pub const MIN_ROTATION_INTERVAL_MS: u64 = 100;
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the dashboard (milliseconds).
        pub const SPLASH_DURATION_MS: u64 = 2000;

        /// Key polling timeout per frame (milliseconds).
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Seconds for one full turn of the background ornament.
        pub const ORNAMENT_PERIOD_SECS: u64 = 120;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    /// Terminals narrower than this get the mobile navigation layout.
    pub const DESKTOP_MIN_WIDTH: u16 = 80;
}
