use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Role;

/// The authenticated user record (`usuario`) as held by the session store.
///
/// The guard only cares that a principal is present; its fields are kept as
/// an untyped JSON object so that backend changes to the user payload never
/// break navigation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(Map<String, Value>);

impl Principal {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// The role the principal picked after login (`rolActivo`).
///
/// Read from `nombreRol`, or from `name` when `nombreRol` is missing or blank.
/// Records may carry both keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoleRecord")]
pub struct ActiveRole {
    #[serde(rename = "nombreRol")]
    pub role: Role,
}

/// `rolActivo` as stored, before picking the name field.
#[derive(Deserialize)]
struct RoleRecord {
    #[serde(rename = "nombreRol", default)]
    nombre_rol: Option<Role>,
    #[serde(default)]
    name: Option<Role>,
}

impl TryFrom<RoleRecord> for ActiveRole {
    type Error = String;

    fn try_from(record: RoleRecord) -> Result<Self, Self::Error> {
        let usable = |r: &Role| !r.as_str().trim().is_empty();
        record
            .nombre_rol
            .filter(usable)
            .or(record.name)
            .map(ActiveRole::new)
            .ok_or_else(|| "role record has no 'nombreRol' or 'name'".to_string())
    }
}

impl ActiveRole {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// A role record without a usable name counts as no role at all.
    pub fn is_valid(&self) -> bool {
        !self.role.as_str().trim().is_empty()
    }
}
