//! Tracing targets for the webview hooks.
//!
//! Horizon Lattice never installs a subscriber itself. Applications choose one,
//! and can filter this crate's events with the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_webview::dialog=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Built-in dialog handlers.
    pub const DIALOG: &str = "horizon_lattice_webview::dialog";
    /// Completion callback resolution.
    pub const COMPLETION: &str = "horizon_lattice_webview::dialog::completion";
}
