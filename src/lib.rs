//! # smartgoals
//!
//! The core of a goal-driven task tracker: declare a high-level goal
//! ("Get fit", "Learn Next.js") and get back a decomposed five-step plan,
//! then track the tasks through completion over a rolling weekly timeline
//! with aggregate statistics.
//!
//! ## Components
//!
//! *   **Plan generation** ([`planner`]): deterministic template
//!     substitution keyed by category. No model calls, no network.
//! *   **State and mutations** ([`store`]): an immutable-snapshot
//!     [`store::State`] holding goals and their tasks. Every mutator
//!     returns a fresh state plus a success flag; bad input and unknown
//!     ids are reported, never thrown.
//! *   **Statistics** ([`stats`]): pure read-side aggregation — per-day
//!     summaries, completion rate, category balance, active-day streak.
//! *   **Persistence** ([`storage`]): optional JSON snapshot files. The
//!     core itself never touches the disk; callers save after each
//!     successful mutation.
//!
//! ## Usage
//!
//! ```
//! use smartgoals::models::{Category, Timeframe};
//! use smartgoals::stats;
//! use smartgoals::store::State;
//!
//! let state = State::default();
//! let (state, created) = state.create_goal("Get fit", Category::Health, Timeframe::Month);
//! assert!(created);
//! assert_eq!(state.goals[0].tasks.len(), 5);
//! assert_eq!(stats::completion_rate(&state), 0.0);
//! ```
//!
//! ## Data Storage
//!
//! Snapshots are saved in your local data directory:
//! *   Linux: `~/.local/share/smartgoals/goals.json`
//! *   macOS: `~/Library/Application Support/smartgoals/goals.json`
//! *   Windows: `%APPDATA%\smartgoals\goals.json`
//!
//! Daily stats live in `stats.json` next to it. You can override the
//! location by setting the `SMARTGOALS_DB` environment variable.

pub mod models;
pub mod planner;
pub mod stats;
pub mod storage;
pub mod store;

pub use models::{Category, DailyStat, Goal, Priority, Status, Task, Timeframe};
pub use store::{load_initial_state, State};
