//! # TUI Components
//!
//! All UI components for the terminal storefront.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: app name, current screen, status message
//! - `TabBar`, `ThemeRow`, `GardenList`: pieces of the Home screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that hold presentation state and emit high-level events:
//! - `TextField`: single-line input with its own cursor
//! - `WelcomeView`, `LoginView`, `HomeView`: one per screen
//!
//! ### Props-Based Data Flow
//!
//! Components never reach into `App`. Core data is handed over as props
//! (`sync()` or render arguments), and user intent comes back as events
//! that the event loop turns into `Action`s.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── text_field.rs    (Single-line input)
//! ├── welcome.rs       (Welcome screen + shared button)
//! ├── login.rs         (Login screen)
//! └── home/            (Home screen: search, themes, garden list, tabs)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod home;
pub mod login;
pub mod text_field;
pub mod welcome;

pub use home::{HomeEvent, HomeView};
pub use login::{LoginEvent, LoginView};
pub use welcome::{WelcomeEvent, WelcomeView};
