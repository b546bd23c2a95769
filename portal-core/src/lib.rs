//! Campus Portal navigation core
//!
//! Platform-agnostic logic that keeps the browser location, the signed-in identity and the
//! in-app view consistent. Browser specifics live behind the [`CookieJar`], [`History`] and
//! [`Clock`] traits so the same controller runs in the web client, the scenario tester and
//! unit tests.

pub mod clock;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod guards;
pub mod history;
pub mod page;
pub mod role;
pub mod session;
pub mod storage;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DEFAULT_SECTION, PortalConfig};
pub use controller::{NavigationController, Notice};
pub use dashboard::{Section, is_known_section, sections_for};
pub use error::{HistoryError, PortalError, SessionError, StorageError};
pub use guards::{GUARD_PIPELINE, Guard, GuardOutcome, NavigationState, misrouted_login, role_gate};
pub use history::{History, MemoryHistory};
pub use page::{Access, InfoPage, Page, RegistrationKind, page_to_path, path_to_page};
pub use role::Role;
pub use session::Session;
pub use storage::{CookieExpiry, CookieJar, MemoryCookieJar, SessionStore};
pub use view::{View, select_view};
