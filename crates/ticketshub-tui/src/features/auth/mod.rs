//! Sign-in and sign-up modal: rendering and result handling.
//!
//! The modal state and its key handling live in `overlays::auth`.

mod render;
mod update;

pub use render::render_auth_overlay;
pub use update::{
    LoginOverlayAction, handle_login_finished, handle_sign_in_checked, handle_verification_stage,
};
