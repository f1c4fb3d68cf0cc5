use std::path::{Path, PathBuf};

/// One brochure to load: the program name it is filed under and the PDF file
/// name inside the configured PDF directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    pub name: String,
    pub file_name: String,
}

impl DocumentSpec {
    pub fn new(name: &str, file_name: &str) -> Self {
        Self {
            name: name.to_string(),
            file_name: file_name.to_string(),
        }
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

const MASTER_PROGRAMS: [(&str, &str); 6] = [
    (
        "Maestría en Ingeniería y Tecnología Ambiental",
        "Utel_Mx_Fichas_Tecnicas_Maestria_Ingenieria_Tecnologia_Ambiental_5a02b93128.pdf",
    ),
    (
        "Maestría en Coaching Integral y Organizacional",
        "Utel_Ecuador_Fichas_Tecnicas_Maestria_Coaching_Integral_Organizacional_88b9f67f5d.pdf",
    ),
    (
        "MBA Maestría en Administración de Negocios",
        "Utel_Mx_Fichas_Tecnicas_Maestr_a_Administracion_De_Negocios_mar24_compressed_50f45c7fd0.pdf",
    ),
    (
        "Maestría en Educación y Docencia",
        "Utel_Mx_Fichas_Tecnicas_Maestria_Educaciony_Docencia_compressed_f9d10562ca.pdf",
    ),
    (
        "Maestría en Gestión Directiva de Instituciones de Salud",
        "Utel_Mx_Fichas_Tecnicas_Maestria_Gestion_Directivade_Institucionesde_Salud_compressed_0fe98f541e.pdf",
    ),
    (
        "Maestría en Mindfulness",
        "Utel_Mx_Fichas_Tecnicas_Maestria_Mindfulness_41d971f1fc.pdf",
    ),
];

/// The master's program brochures served by `/api/suggest-master`.
/// Changing the set requires a code change.
pub fn master_programs() -> Vec<DocumentSpec> {
    MASTER_PROGRAMS
        .iter()
        .map(|(name, file)| DocumentSpec::new(name, file))
        .collect()
}
