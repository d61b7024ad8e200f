//! # Login Form
//!
//! Email and password typed on the Login screen. There is no validation:
//! submitting always succeeds, whatever the fields hold.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }
}
