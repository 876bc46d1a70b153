//! Core of TICKETSHUB Management: the mock data store, sessions, sign-up
//! verification, dashboard figures, configuration and logging.

pub mod config;
pub mod dashboard;
pub mod demo;
pub mod error;
pub mod logging;
pub mod session;
pub mod store;
pub mod verification;

pub use error::{AuthError, NotFound};
pub use session::{SessionManager, SessionSnapshot, SessionStorage};
pub use store::MockStore;
