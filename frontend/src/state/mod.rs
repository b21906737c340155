pub mod auth;
pub mod snackbar;
pub mod view;
