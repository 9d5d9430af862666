//! Prologue fixe émis en tête de chaque fichier réécrit.
//!
//! Déclare les deux primitives externes (`exit`, `write`) et définit les
//! variantes annotées des helpers d'assertion. En cas d'écart, chaque helper
//! écrit `[FAILED]: `, le libellé fourni, un saut de ligne, puis termine le
//! processus avec un statut non nul ; sinon il rend la main sans rien faire.
//! Le texte est émis tel quel, avant la première ligne d'entrée.

pub const PROLOGUE: &str = r#"
func exit(code: int)
func write(fd: int, buf: *byte, count: int)

func asserti_(actual: int, expected: int, s: *byte, len: int) {
  if actual != expected {
    write(0, "[FAILED]: ", 10)
    write(0, s, len)
    write(0, "\n", 1)
    exit(1)
  }
}

func assertb_(actual: bool, expected: bool, s: *byte, len: int) {
  if actual != expected {
    write(0, "[FAILED]: ", 10)
    write(0, s, len)
    write(0, "\n", 1)
    exit(1)
  }
}
"#;
