//! Shared types for the auth form components

use serde::{Deserialize, Serialize};

/// Which variant of the auth form is being rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    /// Heading shown above the form
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Sign Up",
        }
    }

    /// Label on the submit button
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log In",
            Self::Signup => "Sign Up",
        }
    }

    pub const fn is_signup(self) -> bool {
        matches!(self, Self::Signup)
    }

    /// Prompt shown in the footer, next to the link to the other page
    pub const fn footer_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Signup => "Already have an account?",
        }
    }

    /// Text of the footer link to the other page
    pub const fn footer_link_label(self) -> &'static str {
        match self {
            Self::Login => "Sign Up",
            Self::Signup => "Login",
        }
    }

    /// Path of the other page
    pub const fn footer_link_href(self) -> &'static str {
        match self {
            Self::Login => "/signup",
            Self::Signup => "/login",
        }
    }
}

/// Field values captured by the form, handed to the submit callback.
///
/// No validation is applied to any field; `confirm_password` is `None`
/// outside signup mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}
