pub mod analyzer;
pub mod home;
pub mod login;
pub mod signup;
pub mod transformer;
