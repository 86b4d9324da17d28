use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used as the key of the route policy table.
///
/// Compared verbatim (accents and case included): `"Líder"` and `"Lider"`
/// are different roles, and a role the table does not know has no routes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const ADMINISTRADOR: Role = Role::from_static("Administrador");
    pub const LIDER: Role = Role::from_static("Líder");
    pub const AUDITOR: Role = Role::from_static("Auditor");
    pub const COORDINADOR_CALIDAD: Role = Role::from_static("Coordinador de Calidad");
    pub const SUPERVISOR: Role = Role::from_static("Supervisor");

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for Role {
    fn borrow(&self) -> &str {
        &self.0
    }
}
