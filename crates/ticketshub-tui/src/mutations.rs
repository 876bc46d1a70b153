//! Cross-slice state mutations.
//!
//! Feature reducers and overlays return these mutations to request changes
//! outside their own slice. The main reducer applies them in order.

use crate::state::ToastKind;

#[derive(Debug)]
pub enum StateMutation {
    ShowToast { message: String, kind: ToastKind },
    /// Go back to the first navigation entry (after sign-in or sign-out).
    ResetNav,
    SetLastEmail(String),
}

impl StateMutation {
    pub fn toast(kind: ToastKind, message: impl Into<String>) -> Self {
        StateMutation::ShowToast {
            message: message.into(),
            kind,
        }
    }
}
