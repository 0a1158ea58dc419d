mod auth_form;
mod social_buttons;
mod text_field;

pub use auth_form::AuthForm;
pub use social_buttons::SocialButtons;
pub use text_field::TextField;
