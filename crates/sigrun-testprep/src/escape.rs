//! Échappement du libellé de diagnostic.
//!
//! Le libellé est inclus tel quel dans un littéral chaîne `.vd` : seuls les
//! caractères qui briseraient le littéral sont échappés, et uniquement avec
//! des séquences que le lexer sigrun sait décoder (`\n \r \t \\ \"`).

/// Échappe `s` pour l'inclure entre guillemets dans une source `.vd`.
pub fn escape_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
