//! Navigation guard.
//!
//! Runs on every navigation and decides whether the requested view renders or
//! the router is sent elsewhere. Redirects are silent: a forbidden path looks
//! the same as opening `/` directly.

use serde::Serialize;

use crate::routes::{HOME_PATH, LOGIN_PATH, ROLE_SELECTION_PATH};
use crate::{ActiveRole, Principal, RoutePolicyTable, SessionStore};

/// Outcome of a single navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToRoleSelection,
    RedirectToHome,
}

impl GuardDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    /// Where the router should go instead, if anywhere.
    pub fn redirect(self) -> Option<Redirect> {
        let to = match self {
            GuardDecision::Allow => return None,
            GuardDecision::RedirectToLogin => LOGIN_PATH,
            GuardDecision::RedirectToRoleSelection => ROLE_SELECTION_PATH,
            GuardDecision::RedirectToHome => HOME_PATH,
        };
        Some(Redirect { to, replace: true })
    }
}

impl core::fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            GuardDecision::Allow => "allow",
            GuardDecision::RedirectToLogin => "redirect_to_login",
            GuardDecision::RedirectToRoleSelection => "redirect_to_role_selection",
            GuardDecision::RedirectToHome => "redirect_to_home",
        };
        f.write_str(s)
    }
}

/// Instruction for the router. `replace` means the current history entry is
/// overwritten, so "back" cannot return to the refused path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub to: &'static str,
    pub replace: bool,
}

/// Either the view that was asked for or where to go instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(Redirect),
}

impl<V> Guarded<V> {
    pub fn view(self) -> Option<V> {
        match self {
            Guarded::Render(view) => Some(view),
            Guarded::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Guarded::Render(_) => None,
            Guarded::Redirect(redirect) => Some(*redirect),
        }
    }
}

/// Decide a navigation to `path` (path component only).
///
/// First matching rule wins:
/// 1. public path: allow, session or not
/// 2. no principal: login
/// 3. no active role: role selection
/// 4. role lacks the path: home
/// 5. allow
pub fn decide(
    policy: &RoutePolicyTable,
    path: &str,
    principal: Option<&Principal>,
    active_role: Option<&ActiveRole>,
) -> GuardDecision {
    if policy.is_public(path) {
        return GuardDecision::Allow;
    }
    if principal.is_none() {
        return GuardDecision::RedirectToLogin;
    }
    let Some(active_role) = active_role.filter(|r| r.is_valid()) else {
        return GuardDecision::RedirectToRoleSelection;
    };
    if !policy.is_allowed_for_role(active_role.role().as_str(), path) {
        return GuardDecision::RedirectToHome;
    }
    GuardDecision::Allow
}

/// Guard bound to a policy table and a session store.
///
/// Holds no state of its own: the store is read again on every call, since
/// login and role selection can change it between navigations.
#[derive(Debug, Clone)]
pub struct Guard<'p, S> {
    policy: &'p RoutePolicyTable,
    session: S,
}

impl<'p, S: SessionStore> Guard<'p, S> {
    pub fn new(policy: &'p RoutePolicyTable, session: S) -> Self {
        Self { policy, session }
    }

    pub fn policy(&self) -> &'p RoutePolicyTable {
        self.policy
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn decide(&self, path: &str) -> GuardDecision {
        // Public paths never touch the store.
        if self.policy.is_public(path) {
            tracing::debug!(path, decision = %GuardDecision::Allow, "public route");
            return GuardDecision::Allow;
        }

        let principal = self.session.principal();
        let active_role = self.session.active_role();
        let decision = decide(self.policy, path, principal.as_ref(), active_role.as_ref());

        tracing::debug!(
            path,
            role = active_role.as_ref().map(|r| r.role().as_str()),
            %decision,
            "navigation checked"
        );
        decision
    }

    /// Wrap a routable view: hand it back if allowed, otherwise a redirect.
    pub fn protect<V>(&self, path: &str, view: V) -> Guarded<V> {
        match self.decide(path).redirect() {
            None => Guarded::Render(view),
            Some(redirect) => Guarded::Redirect(redirect),
        }
    }

    pub fn explain(&self, path: &str) -> GuardExplanation {
        explain(
            self.policy,
            path,
            self.session.principal().as_ref(),
            self.session.active_role().as_ref(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decision Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Why a navigation was allowed or redirected.
///
/// Meant for logs and tooling; end users only ever see the redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardExplanation {
    pub path: String,
    pub decision: GuardDecision,
    /// Redirect target, if any.
    pub redirect_to: Option<&'static str>,
    pub reason: String,
    pub public: bool,
    pub has_principal: bool,
    pub active_role: Option<String>,
    /// Pattern that granted access (public or role).
    pub matched_pattern: Option<String>,
    /// Whether the active role exists in the table at all.
    pub known_role: Option<bool>,
}

/// Same decision as [`decide`], with the reasoning spelled out.
pub fn explain(
    policy: &RoutePolicyTable,
    path: &str,
    principal: Option<&Principal>,
    active_role: Option<&ActiveRole>,
) -> GuardExplanation {
    let decision = decide(policy, path, principal, active_role);
    let active_role = active_role.filter(|r| r.is_valid());
    let role_name = active_role.map(|r| r.role().as_str());
    let public_match = policy.matching_public_pattern(path);

    let (matched_pattern, reason) = match decision {
        GuardDecision::Allow => match public_match {
            Some(pattern) => (Some(pattern), format!("'{path}' is public (matches '{pattern}')")),
            None => {
                let role = role_name.unwrap_or_default();
                let pattern = policy.matching_role_pattern(role, path);
                let reason = match pattern {
                    Some(p) => format!("role '{role}' may open '{path}' (matches '{p}')"),
                    None => format!("role '{role}' may open '{path}'"),
                };
                (pattern, reason)
            }
        },
        GuardDecision::RedirectToLogin => (None, "no authenticated user in session".to_string()),
        GuardDecision::RedirectToRoleSelection => {
            (None, "user has not selected an active role".to_string())
        }
        GuardDecision::RedirectToHome => {
            let role = role_name.unwrap_or_default();
            let reason = if policy.has_role(role) {
                format!("role '{role}' has no route matching '{path}'")
            } else {
                format!("role '{role}' is not in the policy table")
            };
            (None, reason)
        }
    };

    GuardExplanation {
        path: path.to_string(),
        decision,
        redirect_to: decision.redirect().map(|r| r.to),
        reason,
        public: public_match.is_some(),
        has_principal: principal.is_some(),
        active_role: role_name.map(str::to_string),
        matched_pattern: matched_pattern.map(|p| p.as_str().to_string()),
        known_role: role_name.map(|r| policy.has_role(r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{KvSessionStore, MemoryStore, ACTIVE_ROLE_KEY, PRINCIPAL_KEY};
    use crate::Role;
    use proptest::prelude::*;

    fn policy() -> &'static RoutePolicyTable {
        RoutePolicyTable::builtin()
    }

    fn principal() -> Principal {
        serde_json::from_str(r#"{"id":1}"#).unwrap()
    }

    fn role(name: &'static str) -> ActiveRole {
        ActiveRole::new(Role::from_static(name))
    }

    fn store(user: Option<&str>, rol: Option<&str>) -> KvSessionStore<MemoryStore> {
        let mut kv = MemoryStore::new();
        if let Some(user) = user {
            kv.set(PRINCIPAL_KEY, user);
        }
        if let Some(rol) = rol {
            kv.set(ACTIVE_ROLE_KEY, rol);
        }
        KvSessionStore::new(kv)
    }

    #[test]
    fn public_path_is_allowed_without_session() {
        assert_eq!(decide(policy(), "/login", None, None), GuardDecision::Allow);
        assert_eq!(decide(policy(), "/", None, None), GuardDecision::Allow);
    }

    #[test]
    fn public_path_is_allowed_with_any_session() {
        let p = principal();
        let r = role("Auditor");
        assert_eq!(decide(policy(), "/noticias", Some(&p), Some(&r)), GuardDecision::Allow);
        assert_eq!(decide(policy(), "/seleccionarRol", Some(&p), None), GuardDecision::Allow);
    }

    #[test]
    fn no_principal_goes_to_login() {
        assert_eq!(
            decide(policy(), "/procesos", None, None),
            GuardDecision::RedirectToLogin
        );
        // a stale role without a user still means "log in"
        let r = role("Administrador");
        assert_eq!(
            decide(policy(), "/procesos", None, Some(&r)),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn no_role_goes_to_role_selection() {
        let p = principal();
        assert_eq!(
            decide(policy(), "/usuarios", Some(&p), None),
            GuardDecision::RedirectToRoleSelection
        );
        let blank = role("");
        assert_eq!(
            decide(policy(), "/usuarios", Some(&p), Some(&blank)),
            GuardDecision::RedirectToRoleSelection
        );
    }

    #[test]
    fn role_without_permission_goes_home() {
        let p = principal();
        let r = role("Líder");
        assert_eq!(
            decide(policy(), "/usuarios", Some(&p), Some(&r)),
            GuardDecision::RedirectToHome
        );
    }

    #[test]
    fn role_with_permission_is_allowed() {
        let p = principal();
        let r = role("Administrador");
        assert_eq!(decide(policy(), "/procesos", Some(&p), Some(&r)), GuardDecision::Allow);
    }

    #[test]
    fn unknown_role_and_unknown_path_go_home() {
        let p = principal();
        let unknown = role("NoSuchRole");
        assert_eq!(
            decide(policy(), "/procesos", Some(&p), Some(&unknown)),
            GuardDecision::RedirectToHome
        );
        let admin = role("Administrador");
        assert_eq!(
            decide(policy(), "/no-existe/1/2", Some(&p), Some(&admin)),
            GuardDecision::RedirectToHome
        );
    }

    #[test]
    fn redirects_replace_history() {
        for (decision, to) in [
            (GuardDecision::RedirectToLogin, "/login"),
            (GuardDecision::RedirectToRoleSelection, "/seleccionarRol"),
            (GuardDecision::RedirectToHome, "/"),
        ] {
            assert_eq!(decision.redirect(), Some(Redirect { to, replace: true }));
        }
        assert_eq!(GuardDecision::Allow.redirect(), None);
    }

    #[test]
    fn guard_reads_store_on_every_call() {
        let mut kv = MemoryStore::new();
        kv.set(PRINCIPAL_KEY, r#"{"id":7}"#);

        let guard = Guard::new(policy(), KvSessionStore::new(&kv));
        assert_eq!(guard.decide("/procesos"), GuardDecision::RedirectToRoleSelection);
        drop(guard);

        kv.set(ACTIVE_ROLE_KEY, r#"{"nombreRol":"Supervisor"}"#);
        let guard = Guard::new(policy(), KvSessionStore::new(&kv));
        assert_eq!(guard.decide("/procesos"), GuardDecision::Allow);
        assert_eq!(guard.decide("/usuarios"), GuardDecision::RedirectToHome);
    }

    #[test]
    fn malformed_principal_counts_as_absent() {
        let guard = Guard::new(
            policy(),
            store(Some("{broken"), Some(r#"{"nombreRol":"Administrador"}"#)),
        );
        assert_eq!(guard.decide("/procesos"), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn malformed_role_counts_as_absent() {
        let guard = Guard::new(policy(), store(Some(r#"{"id":1}"#), Some("not-json")));
        assert_eq!(guard.decide("/procesos"), GuardDecision::RedirectToRoleSelection);
    }

    #[test]
    fn protect_renders_or_redirects() {
        let guard = Guard::new(
            policy(),
            store(Some(r#"{"id":1}"#), Some(r#"{"nombreRol":"Auditor"}"#)),
        );

        assert_eq!(guard.protect("/auditorias", "Auditorias"), Guarded::Render("Auditorias"));

        let refused = guard.protect("/carpetas/1/2", "Carpeta");
        assert_eq!(refused.redirect(), Some(Redirect { to: "/", replace: true }));
        assert_eq!(refused.view(), None);
    }

    #[test]
    fn explanation_for_allowed_role_route() {
        let guard = Guard::new(
            policy(),
            store(Some(r#"{"id":1}"#), Some(r#"{"nombreRol":"Coordinador de Calidad"}"#)),
        );
        let explanation = guard.explain("/editar-proceso/5");

        assert_eq!(explanation.decision, GuardDecision::Allow);
        assert_eq!(explanation.redirect_to, None);
        assert_eq!(
            explanation.matched_pattern.as_deref(),
            Some("/editar-proceso/:idProceso")
        );
        assert_eq!(explanation.known_role, Some(true));
        assert!(!explanation.public);
    }

    #[test]
    fn explanation_for_unknown_role() {
        let p = principal();
        let r = role("Invitado");
        let explanation = explain(policy(), "/procesos", Some(&p), Some(&r));

        assert_eq!(explanation.decision, GuardDecision::RedirectToHome);
        assert_eq!(explanation.redirect_to, Some("/"));
        assert_eq!(explanation.known_role, Some(false));
        assert!(explanation.reason.contains("not in the policy table"));
    }

    #[test]
    fn explanation_serializes_decision_in_snake_case() {
        let explanation = explain(policy(), "/procesos", None, None);
        let json = serde_json::to_value(&explanation).unwrap();
        assert_eq!(json["decision"], "redirect_to_login");
        assert_eq!(json["redirect_to"], "/login");
    }

    fn any_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9:-]{1,10}", 0..4).prop_map(|s| format!("/{}", s.join("/")))
    }

    fn any_role() -> impl Strategy<Value = Option<ActiveRole>> {
        prop::option::of(
            prop::sample::select(vec![
                "Administrador",
                "Líder",
                "Auditor",
                "Coordinador de Calidad",
                "Supervisor",
                "NoSuchRole",
                "",
            ])
            .prop_map(role),
        )
    }

    proptest! {
        #[test]
        fn public_paths_always_allowed(
            idx in 0usize..7,
            has_principal in any::<bool>(),
            active_role in any_role(),
        ) {
            let pattern = policy().public_patterns()[idx % policy().public_patterns().len()].clone();
            let path = pattern.as_str().replace(":idNoticia", "3");
            let p = principal();
            let decision = decide(
                policy(),
                &path,
                has_principal.then_some(&p),
                active_role.as_ref(),
            );
            prop_assert_eq!(decision, GuardDecision::Allow);
        }

        #[test]
        fn decisions_are_repeatable(
            path in any_path(),
            has_principal in any::<bool>(),
            active_role in any_role(),
        ) {
            let p = principal();
            let first = decide(policy(), &path, has_principal.then_some(&p), active_role.as_ref());
            let second = decide(policy(), &path, has_principal.then_some(&p), active_role.as_ref());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn non_public_without_principal_goes_to_login(path in any_path(), active_role in any_role()) {
            prop_assume!(!policy().is_public(&path));
            prop_assert_eq!(
                decide(policy(), &path, None, active_role.as_ref()),
                GuardDecision::RedirectToLogin
            );
        }

        #[test]
        fn unknown_role_never_allowed_off_public(path in any_path()) {
            prop_assume!(!policy().is_public(&path));
            let p = principal();
            let r = role("NoSuchRole");
            prop_assert_eq!(
                decide(policy(), &path, Some(&p), Some(&r)),
                GuardDecision::RedirectToHome
            );
        }
    }
}
