//! # Core Application Logic
//!
//! This module contains Bloom's storefront logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (static)     │
//!                    │  • Navigator (screens)  │
//!                    │  • App + ScreenState    │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ RedrawObserver
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: compiled-in themes and flowers
//! - [`navigation`]: the `Navigator` screen state machine
//! - [`home`]: `HomeListState`, the Home screen's search/tab/selection state
//! - [`login`]: `LoginForm`, the Login screen's fields
//! - [`state`]: the `App` context and `ScreenState`
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: settings file, env and CLI resolution (the only I/O in core)

pub mod action;
pub mod catalog;
pub mod config;
pub mod home;
pub mod login;
pub mod navigation;
pub mod state;
