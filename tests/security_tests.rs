//! Saneamiento y bloqueo de patrones de inyección en los campos libres.

use vtc_booking::utils::sanitize::{contains_suspicious, find_suspicious_pattern, sanitize_text};

#[test]
fn test_script_tags_are_flagged() {
    assert!(contains_suspicious("<script>alert('xss')</script>"));
    assert!(contains_suspicious("hola <SCRIPT SRC=http://evil/x.js>"));
}

#[test]
fn test_javascript_uris_are_flagged() {
    assert!(contains_suspicious("javascript:alert(1)"));
    assert!(contains_suspicious("  JaVaScRiPt : void(0)"));
}

#[test]
fn test_event_handlers_are_flagged() {
    assert!(contains_suspicious("<img src=x onerror=alert(1)>"));
    assert!(contains_suspicious("onmouseover= steal()"));
}

#[test]
fn test_iframe_and_object_tags_are_flagged() {
    assert!(contains_suspicious("<iframe src='http://evil'>"));
    assert!(contains_suspicious("<object data='x'>"));
    assert!(contains_suspicious("<embed src='x'>"));
}

#[test]
fn test_regular_addresses_are_not_flagged() {
    assert!(!contains_suspicious("10 Rue de Rivoli, 75004 Paris"));
    assert!(!contains_suspicious("Aéroport d'Orly, Terminal 4"));
    assert!(!contains_suspicious("Gare de Lyon, salida principal"));
    assert!(find_suspicious_pattern("Vol AF1234, llegada 18h30").is_none());
}

#[test]
fn test_sanitize_strips_markup_but_keeps_text() {
    assert_eq!(
        sanitize_text("Llego al <b>terminal 2E</b> a las 18h"),
        "Llego al terminal 2E a las 18h"
    );
    assert_eq!(sanitize_text("<div><p>hola</p></div>"), "hola");
}

#[test]
fn test_sanitize_preserves_accents_and_punctuation() {
    let input = "Déposez-moi à l'hôtel, s'il vous plaît.";
    assert_eq!(sanitize_text(input), input);
}

#[test]
fn test_sanitize_removes_control_characters() {
    assert_eq!(sanitize_text("hola\u{0000}mundo\u{001b}"), "holamundo");
}
