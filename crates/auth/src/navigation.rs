//! Menu entries filtered by the same policy the guard enforces.

use serde::Serialize;

use crate::RoutePolicyTable;

/// A link the navigation bar may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }
}

const MAIN_MENU: &[NavLink] = &[
    NavLink::new("Inicio", "/"),
    NavLink::new("Noticias", "/noticias"),
    NavLink::new("Eventos", "/eventos"),
    NavLink::new("Avisos", "/avisos"),
    NavLink::new("Usuarios", "/usuarios"),
    NavLink::new("Entidades", "/entidades"),
    NavLink::new("Procesos", "/procesos"),
    NavLink::new("Auditorías", "/auditorias"),
    NavLink::new("Cronograma", "/cronograma"),
    NavLink::new("Dashboard", "/dashboard"),
    NavLink::new("Gestión de noticias", "/gestion-noticias"),
    NavLink::new("Gestión de eventos", "/gestion-eventos"),
    NavLink::new("Gestión de avisos", "/gestion-avisos"),
    NavLink::new("Formatos", "/formatos"),
    NavLink::new("Manual de calidad", "/manual-calidad"),
    NavLink::new("Perfil", "/perfil"),
];

/// Every top-level link of the application, in display order.
pub fn main_menu() -> &'static [NavLink] {
    MAIN_MENU
}

/// Links reachable for `role`: public ones plus those the role is granted.
///
/// `None` means no role is selected yet, which leaves only public links.
pub fn visible_links<'a>(
    policy: &RoutePolicyTable,
    role: Option<&str>,
    links: &'a [NavLink],
) -> Vec<&'a NavLink> {
    links
        .iter()
        .filter(|link| {
            policy.is_public(link.path)
                || role.is_some_and(|role| policy.is_allowed_for_role(role, link.path))
        })
        .collect()
}
