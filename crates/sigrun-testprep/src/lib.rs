//! sigrun-testprep — préprocesseur des fichiers de test `.vd`.
//!
//! Transforme un fichier de test en une variante annotée, ensuite confiée au
//! compilateur sigrun :
//!   - un prologue fixe est émis en tête (déclarations `exit`/`write` +
//!     helpers `asserti_`/`assertb_`) ;
//!   - chaque appel `asserti(A, B)` ou `assertb(A, B)` en fin de ligne devient
//!     `asserti_(A, B, "<ligne>: <A>", <longueur>)` (idem `assertb_`), le
//!     libellé servant au rapport d'échec côté exécution.
//!
//! Passe unique, ligne à ligne, purement textuelle — aucun parseur. Le reste
//! de la ligne est recopié octet pour octet, terminateur compris.
//!
//! API publique : `rewrite_str` (en mémoire) / `rewrite_file` (fichier → fichier).

pub mod error;
pub mod escape;
pub mod pattern;
pub mod prologue;
pub mod rewrite;

pub use error::RewriteError;
pub use pattern::{AssertKind, CallMatch};
pub use prologue::PROLOGUE;
pub use rewrite::{rewrite_file, rewrite_str, RewriteReport};
