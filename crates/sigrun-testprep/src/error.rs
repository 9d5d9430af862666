//! Erreurs de la passe de réécriture.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Erreurs remontées par `rewrite_file`. Une panne d'E/S aborte la passe ;
/// aucune reprise, le fichier de sortie peut rester tronqué.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Fichier d'entrée illisible (absent, droits, non-texte…)
    #[error("lecture de {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fichier de sortie inscriptible (dossier absent, droits…)
    #[error("écriture de {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = RewriteError> = std::result::Result<T, E>;
