//! User-facing copy for every screen.

pub const APP_NAME: &str = "Bloom";

pub const WELCOME_TITLE: &str = "Beautiful home garden solutions";
pub const WELCOME_CREATE_ACCOUNT: &str = "Create account";
pub const WELCOME_LOGIN: &str = "Log in";

pub const LOGIN_TITLE: &str = "Log in with email";
pub const LOGIN_EMAIL_LABEL: &str = "Email address";
pub const LOGIN_PASSWORD_LABEL: &str = "Password (8+ characters)";
pub const LOGIN_LICENSE: &str =
    "By clicking below, you agree to our Terms of Use and consent to our Privacy Policy.";
pub const LOGIN_BUTTON: &str = "Log in";

pub const HOME_SEARCH_LABEL: &str = "Search";
pub const HOME_BROWSE_THEMES: &str = "Browse themes";
pub const HOME_GARDEN_TITLE: &str = "Design your home garden";
pub const HOME_DESCRIPTION: &str = "This is a description";

pub const WELCOME_HELP: &str = " ←/→ Choose  Enter Continue  Ctrl+C Quit ";
pub const LOGIN_HELP: &str = " Tab Next field  Enter Continue ";
pub const HOME_HELP: &str = " Tab Focus  ↑/↓ Move  Space Select  F1-F4 Tabs ";
/// Appended to the help line while there is a screen to go back to.
pub const BACK_HELP: &str = " Esc Back ";
