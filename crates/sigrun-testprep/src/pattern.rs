//! Reconnaissance textuelle des appels d'assertion.
//!
//! Deux formes fixes, reconnues uniquement en fin de ligne :
//! `asserti(<actual>, <expected>)` et `assertb(<actual>, <expected>)`.
//! La coupure des arguments est purement textuelle (dernière occurrence de
//! `", "` dans la queue de l'appel) — un `<actual>` contenant une virgule de
//! premier niveau est mal découpé, limitation assumée du contrat d'origine.

use once_cell::sync::Lazy;
use regex::Regex;

/// Forme d'assertion reconnue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertKind {
    /// `asserti(actual: int, expected: int)`
    IntAssert,
    /// `assertb(actual: bool, expected: bool)`
    BoolAssert,
}

impl AssertKind {
    /// Nom de l'appel nu tel qu'écrit dans le fichier de test.
    pub fn bare_name(self) -> &'static str {
        match self {
            AssertKind::IntAssert => "asserti",
            AssertKind::BoolAssert => "assertb",
        }
    }

    /// Nom du helper annoté (variante suffixée `_` du prologue).
    pub fn annotated_name(self) -> &'static str {
        match self {
            AssertKind::IntAssert => "asserti_",
            AssertKind::BoolAssert => "assertb_",
        }
    }
}

/// Occurrence d'un appel d'assertion sur une ligne.
///
/// `actual` et `expected` sont des sous-chaînes brutes, ni évaluées ni
/// normalisées : elles repartent telles quelles dans l'appel réécrit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMatch {
    pub kind: AssertKind,
    pub actual: String,
    pub expected: String,
}

impl CallMatch {
    /// Texte exact de l'appel d'origine, cible de la substitution.
    pub fn call_text(&self) -> String {
        format!("{}({}, {})", self.kind.bare_name(), self.actual, self.expected)
    }
}

// Le préfixe gourmand ancre l'appel au nom reconnu le plus à droite ; la
// coupure `", "` gourmande reproduit le découpage du contrat d'origine
// (`asserti\((.*), (.*)\)$`). Espaces/tabulations tolérées après `)`.
static TRAILING_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*)\b(asserti|assertb)\((.*), (.*)\)[ \t]*$").expect("regex appel d'assertion")
});

/// Collecte les appels d'assertion en fin de ligne (`body` sans terminateur).
///
/// L'appel le plus à droite est reconnu d'abord, puis le préfixe restant est
/// re-balayé : une queue de ligne formée d'une chaîne d'appels donne une
/// occurrence par appel, chacune avec son propre `actual`. Une ligne dont la
/// fin n'est pas un appel reconnu ne donne rien.
pub fn scan_line(body: &str) -> Vec<CallMatch> {
    let mut out = Vec::new();
    let mut slice = body;
    while let Some(caps) = TRAILING_CALL.captures(slice) {
        let prefix_end = caps.get(1).map(|m| m.end()).unwrap_or(0);
        let kind = match &caps[2] {
            "asserti" => AssertKind::IntAssert,
            _ => AssertKind::BoolAssert,
        };
        out.push(CallMatch {
            kind,
            actual: caps[3].to_string(),
            expected: caps[4].to_string(),
        });
        slice = &slice[..prefix_end];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appel_simple() {
        let m = scan_line("asserti(compute(x), 42)");
        assert_eq!(
            m,
            vec![CallMatch {
                kind: AssertKind::IntAssert,
                actual: "compute(x)".into(),
                expected: "42".into(),
            }]
        );
        assert_eq!(m[0].call_text(), "asserti(compute(x), 42)");
    }

    #[test]
    fn appel_booleen() {
        let m = scan_line("assertb(flag, true)");
        assert_eq!(m[0].kind, AssertKind::BoolAssert);
        assert_eq!(m[0].actual, "flag");
        assert_eq!(m[0].expected, "true");
    }

    #[test]
    fn pas_en_fin_de_ligne() {
        assert!(scan_line("let x = asserti(a, 1);").is_empty());
        assert!(scan_line("// asserti(a, 1) est documenté ici.").is_empty());
        assert!(scan_line("").is_empty());
    }

    #[test]
    fn blancs_en_fin_de_ligne_toleres() {
        let m = scan_line("asserti(a, 1)  \t");
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].call_text(), "asserti(a, 1)");
    }

    #[test]
    fn identifiant_plus_long_ignore() {
        assert!(scan_line("myasserti(a, 1)").is_empty());
        assert!(scan_line("_assertb(a, true)").is_empty());
    }

    #[test]
    fn coupure_gourmande_sur_la_derniere_virgule() {
        // Virgule imbriquée dans `actual` : la coupure retient la dernière
        // `", "`, comme le motif d'origine.
        let m = scan_line("asserti(add(1, 2), 3)");
        assert_eq!(m[0].actual, "add(1, 2)");
        assert_eq!(m[0].expected, "3");
    }

    #[test]
    fn chaine_de_deux_appels() {
        let m = scan_line("asserti(a, 1) assertb(b, true)");
        assert_eq!(m.len(), 2);
        // Du plus à droite au plus à gauche.
        assert_eq!(m[0].kind, AssertKind::BoolAssert);
        assert_eq!(m[0].actual, "b");
        assert_eq!(m[1].kind, AssertKind::IntAssert);
        assert_eq!(m[1].actual, "a");
    }

    #[test]
    fn prefixe_non_appel_arrete_la_chaine() {
        let m = scan_line("x = 1; asserti(a, 1)");
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].actual, "a");
    }
}
