pub mod components;
pub mod styles;
pub mod types;

// Re-export main components
pub use components::{AuthForm, SocialButtons, TextField};
pub use types::{AuthMode, Credentials};
