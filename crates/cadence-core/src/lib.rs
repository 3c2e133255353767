//! # Cadence Core Library
//!
//! Reminder scheduling built around a compact recurrence grammar.
//!
//! ## Features
//!
//! - **Recurrence Rules**: `d <n>` every n days, `y` yearly, `w <days>` on
//!   weekdays, `m <days> [<months>]` on days of the month, including `-1`
//!   (last day) and `-2` (second-to-last)
//! - **Deterministic Advancement**: the next date is a pure function of the
//!   rule, the anchor date and a caller-supplied "now"
//! - **Bounded Search**: unsatisfiable monthly rules are reported, never looped on
//! - **Task Storage**: SQLite persistence through sqlx with embedded migrations
//!
//! ## Core Modules
//!
//! - [`recurrence`]: Rule parser, validator and next-date calculator
//! - [`date`]: `YYYYMMDD` boundary format
//! - [`models`]: Task records and transfer objects
//! - [`repository`]: Data access and the add/update/complete flows
//! - [`db`]: Database connection and migration management
//! - [`error`]: Error types for every layer
//!
//! ## Example Usage
//!
//! ```rust
//! use cadence_core::recurrence::Scheduler;
//!
//! let scheduler = Scheduler::with_defaults();
//! let next = scheduler.next_date_str("m -1", "20240201", "20240101").unwrap();
//! assert_eq!(next, "20240229");
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
