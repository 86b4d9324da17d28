//! Role → route policy.
//!
//! One table answers both "may this role open this path?" for the guard and
//! "which links should this role see?" for menus, so both always agree.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::{is_param_segment, PARAM_SENTINEL};
use crate::routes::{self, HOME_PATH, LOGIN_PATH, ROLE_SELECTION_PATH};
use crate::{PathPattern, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("invalid policy document: {0}")]
    Parse(String),

    #[error("pattern '{0}' must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern '{0}' has a parameter segment without a name")]
    UnnamedParameter(String),

    #[error("pattern '{pattern}' is listed twice in {scope}")]
    DuplicatePattern { scope: String, pattern: String },

    #[error("role name must not be empty")]
    EmptyRoleName,

    #[error("redirect target '{0}' is not public")]
    RedirectTargetNotPublic(&'static str),
}

/// Public routes plus one independently authored route list per role.
///
/// Immutable once built. Roles missing from the table have no routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePolicyTable {
    public: Vec<PathPattern>,
    #[serde(default)]
    roles: BTreeMap<Role, Vec<PathPattern>>,
}

static BUILTIN: LazyLock<RoutePolicyTable> = LazyLock::new(|| {
    RoutePolicyTable::new(
        routes::PUBLIC.to_vec(),
        routes::BY_ROLE
            .iter()
            .map(|(role, patterns)| (role.clone(), patterns.to_vec())),
    )
});

impl RoutePolicyTable {
    pub fn new(
        public: Vec<PathPattern>,
        roles: impl IntoIterator<Item = (Role, Vec<PathPattern>)>,
    ) -> Self {
        Self {
            public,
            roles: roles.into_iter().collect(),
        }
    }

    /// The table compiled into the application.
    pub fn builtin() -> &'static RoutePolicyTable {
        &BUILTIN
    }

    /// Parse and validate a policy document:
    ///
    /// ```json
    /// { "public": ["/", "/login"], "roles": { "Auditor": ["/auditorias"] } }
    /// ```
    pub fn from_json(text: &str) -> Result<Self, PolicyError> {
        let table: RoutePolicyTable =
            serde_json::from_str(text).map_err(|e| PolicyError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    pub fn public_patterns(&self) -> &[PathPattern] {
        &self.public
    }

    /// Patterns granted to `role`; empty for unknown roles.
    pub fn role_patterns(&self, role: &str) -> &[PathPattern] {
        self.roles.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.keys()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.matching_public_pattern(path).is_some()
    }

    pub fn is_allowed_for_role(&self, role: &str, path: &str) -> bool {
        self.matching_role_pattern(role, path).is_some()
    }

    pub fn matching_public_pattern(&self, path: &str) -> Option<&PathPattern> {
        self.public.iter().find(|p| p.is_match(path))
    }

    pub fn matching_role_pattern(&self, role: &str, path: &str) -> Option<&PathPattern> {
        self.role_patterns(role).iter().find(|p| p.is_match(path))
    }

    /// Check that the table can back a guard.
    ///
    /// Every redirect the guard issues must land on a public route, otherwise
    /// a user without a session would bounce between redirects.
    pub fn validate(&self) -> Result<(), PolicyError> {
        check_patterns("public routes", &self.public)?;

        for (role, patterns) in &self.roles {
            if role.as_str().trim().is_empty() {
                return Err(PolicyError::EmptyRoleName);
            }
            check_patterns(&format!("role '{role}'"), patterns)?;
        }

        for target in [HOME_PATH, LOGIN_PATH, ROLE_SELECTION_PATH] {
            if !self.is_public(target) {
                return Err(PolicyError::RedirectTargetNotPublic(target));
            }
        }

        Ok(())
    }
}

impl Default for RoutePolicyTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn check_patterns(scope: &str, patterns: &[PathPattern]) -> Result<(), PolicyError> {
    // `/auditorias` and `/auditorias/` match the same paths
    let mut seen: HashSet<String> = HashSet::new();

    for pattern in patterns {
        let raw = pattern.as_str();
        if !raw.starts_with('/') {
            return Err(PolicyError::MissingLeadingSlash(raw.to_string()));
        }
        if pattern
            .segments()
            .any(|s| is_param_segment(s) && s.trim_start_matches(PARAM_SENTINEL).is_empty())
        {
            return Err(PolicyError::UnnamedParameter(raw.to_string()));
        }
        if !seen.insert(pattern.segments().collect::<Vec<_>>().join("/")) {
            return Err(PolicyError::DuplicatePattern {
                scope: scope.to_string(),
                pattern: raw.to_string(),
            });
        }
    }

    Ok(())
}
