//! Console raid helper.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig   (environment)
//!   ├─→ ContentFactory (stats table, session config, scenario)
//!   ├─→ Runtime        (planning session with bounded listening)
//!   │     ├─→ ScriptedUpdateSource (replays the scenario's updates)
//!   │     └─→ ConsolePresenter     (prints guides and notices)
//!   └─→ logging        (stderr, optional file)
//! ```

pub mod config;
pub mod logging;
pub mod presenter;
pub mod replay;

pub use config::ClientConfig;
pub use presenter::ConsolePresenter;
pub use replay::ScriptedUpdateSource;
