//! Route table compiled into the application.
//!
//! Each role's list is written out on its own. The lists overlap heavily but
//! are not subsets of one another (compare the `/carpetas` entries of
//! `Auditor` with everyone else's), so keep them as authored.

use crate::{PathPattern, Role};

/// Landing page, also the target for "role may not go there".
pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ROLE_SELECTION_PATH: &str = "/seleccionarRol";

pub(crate) const PUBLIC: &[PathPattern] = &[
    PathPattern::from_static(HOME_PATH),
    PathPattern::from_static(LOGIN_PATH),
    PathPattern::from_static(ROLE_SELECTION_PATH),
    PathPattern::from_static("/noticias"),
    PathPattern::from_static("/eventos"),
    PathPattern::from_static("/avisos"),
    PathPattern::from_static("/detalle-noticia/:idNoticia"),
];

const ADMINISTRADOR: &[PathPattern] = &[
    PathPattern::from_static("/usuarios"),
    PathPattern::from_static("/nuevo-usuario"),
    PathPattern::from_static("/editar-usuario/:idUsuario"),
    PathPattern::from_static("/entidades"),
    PathPattern::from_static("/procesos"),
    PathPattern::from_static("/nuevo-proceso"),
    PathPattern::from_static("/editar-proceso/:idProceso"),
    PathPattern::from_static("/estructura-procesos/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso/:idCarpeta"),
    PathPattern::from_static("/auditorias"),
    PathPattern::from_static("/auditoria/:idAuditoria"),
    PathPattern::from_static("/informe-auditoria/:idAuditoria"),
    PathPattern::from_static("/gestion-riesgos/:idRegistro"),
    PathPattern::from_static("/indicadores/:idRegistro"),
    PathPattern::from_static("/graficas/:idRegistro"),
    PathPattern::from_static("/proyecto-mejora/:idProceso"),
    PathPattern::from_static("/plan-correctivo/:idRegistro"),
    PathPattern::from_static("/actividad-mejora/:idProceso"),
    PathPattern::from_static("/dashboard"),
    PathPattern::from_static("/cronograma"),
    PathPattern::from_static("/gestion-noticias"),
    PathPattern::from_static("/gestion-eventos"),
    PathPattern::from_static("/gestion-avisos"),
    PathPattern::from_static("/formatos"),
    PathPattern::from_static("/manual-calidad"),
    PathPattern::from_static("/perfil"),
];

const LIDER: &[PathPattern] = &[
    PathPattern::from_static("/procesos"),
    PathPattern::from_static("/estructura-procesos/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso/:idCarpeta"),
    PathPattern::from_static("/auditorias"),
    PathPattern::from_static("/auditoria/:idAuditoria"),
    PathPattern::from_static("/gestion-riesgos/:idRegistro"),
    PathPattern::from_static("/indicadores/:idRegistro"),
    PathPattern::from_static("/graficas/:idRegistro"),
    PathPattern::from_static("/proyecto-mejora/:idProceso"),
    PathPattern::from_static("/plan-correctivo/:idRegistro"),
    PathPattern::from_static("/actividad-mejora/:idProceso"),
    PathPattern::from_static("/dashboard"),
    PathPattern::from_static("/cronograma"),
    PathPattern::from_static("/formatos"),
    PathPattern::from_static("/manual-calidad"),
    PathPattern::from_static("/perfil"),
];

const AUDITOR: &[PathPattern] = &[
    PathPattern::from_static("/procesos"),
    PathPattern::from_static("/estructura-procesos/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso"),
    PathPattern::from_static("/auditorias"),
    PathPattern::from_static("/auditoria/:idAuditoria"),
    PathPattern::from_static("/informe-auditoria/:idAuditoria"),
    PathPattern::from_static("/graficas/:idRegistro"),
    PathPattern::from_static("/cronograma"),
    PathPattern::from_static("/formatos"),
    PathPattern::from_static("/manual-calidad"),
    PathPattern::from_static("/perfil"),
];

const COORDINADOR_CALIDAD: &[PathPattern] = &[
    PathPattern::from_static("/procesos"),
    PathPattern::from_static("/nuevo-proceso"),
    PathPattern::from_static("/editar-proceso/:idProceso"),
    PathPattern::from_static("/estructura-procesos/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso/:idCarpeta"),
    PathPattern::from_static("/auditorias"),
    PathPattern::from_static("/auditoria/:idAuditoria"),
    PathPattern::from_static("/informe-auditoria/:idAuditoria"),
    PathPattern::from_static("/gestion-riesgos/:idRegistro"),
    PathPattern::from_static("/indicadores/:idRegistro"),
    PathPattern::from_static("/graficas/:idRegistro"),
    PathPattern::from_static("/proyecto-mejora/:idProceso"),
    PathPattern::from_static("/plan-correctivo/:idRegistro"),
    PathPattern::from_static("/actividad-mejora/:idProceso"),
    PathPattern::from_static("/dashboard"),
    PathPattern::from_static("/cronograma"),
    PathPattern::from_static("/gestion-noticias"),
    PathPattern::from_static("/gestion-eventos"),
    PathPattern::from_static("/gestion-avisos"),
    PathPattern::from_static("/formatos"),
    PathPattern::from_static("/manual-calidad"),
    PathPattern::from_static("/perfil"),
];

const SUPERVISOR: &[PathPattern] = &[
    PathPattern::from_static("/procesos"),
    PathPattern::from_static("/estructura-procesos/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso"),
    PathPattern::from_static("/carpetas/:idProceso/:idCarpeta"),
    PathPattern::from_static("/auditorias"),
    PathPattern::from_static("/indicadores/:idRegistro"),
    PathPattern::from_static("/graficas/:idRegistro"),
    PathPattern::from_static("/dashboard"),
    PathPattern::from_static("/cronograma"),
    PathPattern::from_static("/manual-calidad"),
    PathPattern::from_static("/perfil"),
];

pub(crate) const BY_ROLE: &[(Role, &[PathPattern])] = &[
    (Role::ADMINISTRADOR, ADMINISTRADOR),
    (Role::LIDER, LIDER),
    (Role::AUDITOR, AUDITOR),
    (Role::COORDINADOR_CALIDAD, COORDINADOR_CALIDAD),
    (Role::SUPERVISOR, SUPERVISOR),
];
