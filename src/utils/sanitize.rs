//! Saneamiento de texto libre
//!
//! Este módulo limpia los campos de texto del formulario antes de validar
//! y persistir, y detecta los patrones de inyección conocidos.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tags HTML completos o abiertos
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>?").unwrap();

    /// Lista fija de patrones de inyección script/HTML.
    /// Cualquier coincidencia en un campo libre bloquea el envío.
    static ref SUSPICIOUS_PATTERNS: Vec<(&'static str, Regex)> = vec![
        ("script_tag", Regex::new(r"(?i)<\s*script").unwrap()),
        ("javascript_uri", Regex::new(r"(?i)javascript\s*:").unwrap()),
        ("vbscript_uri", Regex::new(r"(?i)vbscript\s*:").unwrap()),
        ("event_handler", Regex::new(r"(?i)\bon\w+\s*=").unwrap()),
        ("iframe_tag", Regex::new(r"(?i)<\s*iframe").unwrap()),
        ("object_tag", Regex::new(r"(?i)<\s*(object|embed)").unwrap()),
        ("data_html_uri", Regex::new(r"(?i)data\s*:\s*text/html").unwrap()),
        ("css_expression", Regex::new(r"(?i)expression\s*\(").unwrap()),
    ];
}

/// Eliminar markup y caracteres de control de un campo de texto libre.
/// Los acentos y el texto normal se conservan tal cual.
pub fn sanitize_text(input: &str) -> String {
    let without_tags = TAG_RE.replace_all(input, "");
    without_tags
        .chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Buscar el primer patrón de inyección presente en el texto
pub fn find_suspicious_pattern(input: &str) -> Option<&'static str> {
    SUSPICIOUS_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(input))
        .map(|(name, _)| *name)
}

/// Verificar si el texto contiene algún patrón de inyección
pub fn contains_suspicious(input: &str) -> bool {
    find_suspicious_pattern(input).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_tags() {
        assert_eq!(sanitize_text("<b>Hola</b> mundo"), "Hola mundo");
        assert_eq!(sanitize_text("texto <script>alert(1)</script>"), "texto alert(1)");
        assert_eq!(sanitize_text("tag abierto <img src=x"), "tag abierto");
    }

    #[test]
    fn test_sanitize_keeps_accents() {
        assert_eq!(
            sanitize_text("  Aéroport Charles-de-Gaulle, terminal 2E  "),
            "Aéroport Charles-de-Gaulle, terminal 2E"
        );
    }

    #[test]
    fn test_detects_script_tag() {
        assert_eq!(
            find_suspicious_pattern("hola <script>alert(1)</script>"),
            Some("script_tag")
        );
        assert_eq!(
            find_suspicious_pattern("hola < SCRIPT src=x>"),
            Some("script_tag")
        );
    }

    #[test]
    fn test_detects_javascript_uri() {
        assert!(contains_suspicious("click javascript:alert(1)"));
        assert!(contains_suspicious("JAVASCRIPT : void(0)"));
    }

    #[test]
    fn test_detects_event_handlers() {
        assert!(contains_suspicious("x onerror=alert(1)"));
        assert!(contains_suspicious("<img onload = evil()>"));
    }

    #[test]
    fn test_normal_text_passes() {
        assert!(!contains_suspicious("10 Rue de Rivoli, Paris"));
        assert!(!contains_suspicious("Vol AF1234, llegada 18h30. Gracias"));
        // "on" dentro de una palabra normal no es un handler
        assert!(!contains_suspicious("estación de Lyon"));
    }
}
