// All LLM prompt templates for the advisor endpoints.
// Reuses shared fragments from llm_client::prompts.

use crate::documents::store::DocumentMap;
use crate::llm_client::prompts::{NO_HTML_TAG_INSTRUCTION, UNIVERSITY};
use crate::llm_client::ChatPrompt;

/// Characters of each brochure included in the master system prompt.
pub const EXCERPT_CHARS: usize = 1000;

/// Master system prompt. Replace `{programs}` and `{university}` before sending.
const MASTER_SYSTEM_TEMPLATE: &str = "\
A continuación tienes información sobre diferentes maestrías.
Maestrías:
{programs}

Eres un asesor de maestrías de {university} y le recomiendas maestrías a los usuarios \
de acuerdo a su perfil y las maestrías disponibles. Solo puedes responder con base en \
las maestrías anteriores. Sino cabe el perfil, le dices que no se ajusta a lo que tenemos \
hoy en dia disponible.";

/// Master user prompt. Replace `{perfil}` and `{no_html_tag}` before sending.
const MASTER_USER_TEMPLATE: &str = "\
Este es mi perfil: {perfil}. ¿Cuál maestría sería la más adecuada de acuerdo a las \
maestrías anteriores? Dame la respuesta resaltando la maestria en negrilla y una corta \
descripción de la maestría, dámelo en html, {no_html_tag}";

/// Bachelor system prompt. Replace `{university}` before sending.
const BACHELOR_SYSTEM_TEMPLATE: &str = "\
Eres un asesor académico basado en la empresa {university}, que sugiere carreras \
basadas en los gustos y preferencias del usuario.";

/// Bachelor user prompt. Replace `{gustos}` and `{no_html_tag}` before sending.
const BACHELOR_USER_TEMPLATE: &str = "\
Mis gustos son: {gustos}. ¿Qué carrera me recomendarías? Dame un listado de 3 carreras \
con una descripción breve de cada carrera. Dame la respuesta en html para poder \
ingresarlo en un dangerouslySetInnerHTML, {no_html_tag}";

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// One `- name: excerpt...` line per loaded brochure.
fn program_listing(documents: &DocumentMap) -> String {
    documents
        .iter()
        .map(|(name, text)| format!("- {name}: {}...", excerpt(text, EXCERPT_CHARS)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the master's suggestion prompt from the loaded brochures and the
/// caller's free-text profile. The profile is embedded as given, even if empty.
pub fn master_prompt(documents: &DocumentMap, perfil: &str) -> ChatPrompt {
    // The listing is substituted last so brochure text is never re-scanned for placeholders.
    let system = MASTER_SYSTEM_TEMPLATE
        .replace("{university}", UNIVERSITY)
        .replace("{programs}", &program_listing(documents));
    let user = MASTER_USER_TEMPLATE
        .replace("{no_html_tag}", NO_HTML_TAG_INSTRUCTION)
        .replace("{perfil}", perfil);
    ChatPrompt { system, user }
}

/// Builds the bachelor's suggestion prompt. No brochure content is involved.
pub fn bachelor_prompt(gustos: &str) -> ChatPrompt {
    ChatPrompt {
        system: BACHELOR_SYSTEM_TEMPLATE.replace("{university}", UNIVERSITY),
        user: BACHELOR_USER_TEMPLATE
            .replace("{no_html_tag}", NO_HTML_TAG_INSTRUCTION)
            .replace("{gustos}", gustos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> DocumentMap {
        let mut docs = DocumentMap::new();
        docs.insert("Maestría en Mindfulness".to_string(), "Atención plena.".to_string());
        docs.insert(
            "MBA Maestría en Administración de Negocios".to_string(),
            "x".repeat(1500),
        );
        docs
    }

    #[test]
    fn test_excerpt_cuts_by_characters() {
        assert_eq!(excerpt("maestría", 7), "maestrí");
        assert_eq!(excerpt("ñññ", 2), "ññ");
        assert_eq!(excerpt("corto", 1000), "corto");
        assert_eq!(excerpt("", 10), "");
    }

    #[test]
    fn test_master_system_lists_every_program_truncated() {
        let prompt = master_prompt(&docs(), "ingeniero");

        assert!(prompt
            .system
            .starts_with("A continuación tienes información sobre diferentes maestrías."));
        assert!(prompt
            .system
            .contains("- Maestría en Mindfulness: Atención plena...."));
        let mba_line = format!(
            "- MBA Maestría en Administración de Negocios: {}...",
            "x".repeat(EXCERPT_CHARS)
        );
        assert!(prompt.system.contains(&mba_line));
        assert!(!prompt.system.contains(&"x".repeat(EXCERPT_CHARS + 1)));
        assert!(prompt.system.contains("Solo puedes responder con base en las maestrías anteriores."));
        assert!(prompt.system.contains("no se ajusta"));
        assert!(prompt.system.contains("UTEL UNIVERSIDAD"));
    }

    #[test]
    fn test_master_program_lines_are_newline_joined() {
        let prompt = master_prompt(&docs(), "p");
        let listing: Vec<_> = prompt.system.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn test_master_user_embeds_profile_and_format_rules() {
        let prompt = master_prompt(&docs(), "Soy docente con 10 años de experiencia");
        assert!(prompt
            .user
            .starts_with("Este es mi perfil: Soy docente con 10 años de experiencia."));
        assert!(prompt.user.contains("negrilla"));
        assert!(prompt.user.contains("html"));
        assert!(prompt.user.ends_with("no agregues la etiqueta html"));
    }

    #[test]
    fn test_master_prompt_with_no_documents_keeps_instructions() {
        let prompt = master_prompt(&DocumentMap::new(), "");
        assert!(prompt.system.contains("Maestrías:\n\n"));
        assert!(prompt.user.starts_with("Este es mi perfil: ."));
    }

    #[test]
    fn test_placeholders_in_profile_are_left_alone() {
        let prompt = master_prompt(&docs(), "{programs}");
        assert!(prompt.user.contains("Este es mi perfil: {programs}."));
    }

    #[test]
    fn test_bachelor_prompt() {
        let prompt = bachelor_prompt("música, matemáticas");
        assert_eq!(
            prompt.system,
            "Eres un asesor académico basado en la empresa UTEL UNIVERSIDAD, que sugiere \
             carreras basadas en los gustos y preferencias del usuario."
        );
        assert!(prompt.user.starts_with("Mis gustos son: música, matemáticas."));
        assert!(prompt.user.contains("listado de 3 carreras"));
        assert!(prompt.user.contains("dangerouslySetInnerHTML"));
        assert!(!prompt.system.contains("Maestrías"));
    }
}
