//! `sgc-auth`: navigation guard for the SGC frontend.
//!
//! Pure decision logic: no routing framework, no storage. The session store
//! and the router plug in through [`SessionStore`] and [`Guarded`].

pub mod guard;
pub mod navigation;
pub mod pattern;
pub mod policy;
pub mod principal;
pub mod roles;
pub mod routes;
pub mod session;

pub use guard::{decide, explain, Guard, GuardDecision, GuardExplanation, Guarded, Redirect};
pub use navigation::{main_menu, visible_links, NavLink};
pub use pattern::{matches, strip_location, PathPattern};
pub use policy::{PolicyError, RoutePolicyTable};
pub use principal::{ActiveRole, Principal};
pub use roles::Role;
pub use session::{KeyValueStore, KvSessionStore, MemoryStore, SessionStore};
