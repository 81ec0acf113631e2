//! # Core Application Logic
//!
//! The workout flow: which screen is showing, which exercise is current,
//! how long it has been timed and what has been logged so far.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │  • Timer, Log           │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Media    │
//!             │  Adapter   │          │  Player    │
//!             │ (ratatui)  │          │ (external) │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`timer`]: Elapsed-second counter and its wall-clock schedule
//! - [`exercise_log`]: Append-only exercise history
//! - [`exercise`]: The exercise catalog
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod exercise;
pub mod exercise_log;
pub mod state;
pub mod timer;
