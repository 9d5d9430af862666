//! Passe de réécriture : prologue + annotation ligne à ligne.
//!
//! Passe unique, séquentielle, proportionnelle à la taille du fichier. Aucun
//! état entre les lignes hormis le compteur (1-indexé, utilisé dans le
//! libellé). L'entrée n'est jamais modifiée en place.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, RewriteError};
use crate::escape::escape_label;
use crate::pattern::scan_line;
use crate::prologue::PROLOGUE;

/// Bilan d'une passe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Lignes d'entrée vues (prologue exclu).
    pub lines: usize,
    /// Appels d'assertion réécrits.
    pub rewritten: usize,
}

/// Réécrit `source` en mémoire : prologue, puis chaque ligne (terminateur
/// d'origine conservé, `\n` comme `\r\n`). Les lignes sans appel reconnu
/// ressortent identiques octet pour octet.
pub fn rewrite_str(source: &str) -> (String, RewriteReport) {
    let mut report = RewriteReport::default();
    let mut out = String::with_capacity(PROLOGUE.len() + source.len() + source.len() / 4);
    out.push_str(PROLOGUE);
    for (i, raw) in source.split_inclusive('\n').enumerate() {
        report.lines += 1;
        let (body, term) = split_terminator(raw);
        out.push_str(&rewrite_line(body, i + 1, &mut report));
        out.push_str(term);
    }
    (out, report)
}

/// Réécrit le fichier `input` vers `output` (créé ou tronqué, dossier parent
/// créé au besoin). Pas de reprise sur panne : une erreur d'écriture peut
/// laisser une sortie incomplète, l'outil se relance à la demande.
pub fn rewrite_file(input: &Path, output: &Path) -> Result<RewriteReport> {
    let source = fs::read_to_string(input).map_err(|e| RewriteError::ReadInput {
        path: input.to_path_buf(),
        source: e,
    })?;

    let (rewritten, report) = rewrite_str(&source);

    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).map_err(|e| RewriteError::WriteOutput {
            path: output.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(output, rewritten.as_bytes()).map_err(|e| RewriteError::WriteOutput {
        path: output.to_path_buf(),
        source: e,
    })?;

    info!(
        "{} -> {} : {} ligne(s), {} assertion(s) annotée(s)",
        input.display(),
        output.display(),
        report.lines,
        report.rewritten
    );
    Ok(report)
}

/// Réécrit une ligne (sans terminateur). Chaque occurrence est substituée par
/// le texte exact de l'appel d'origine, jamais par position : les occurrences
/// voisines d'une même ligne ne se corrompent pas entre elles.
fn rewrite_line(body: &str, lineno: usize, report: &mut RewriteReport) -> String {
    let matches = scan_line(body);
    if matches.is_empty() {
        return body.to_string();
    }

    let mut line = body.to_string();
    for m in &matches {
        let label = format!("{}: {}", lineno, m.actual);
        let escaped = escape_label(&label);
        // Longueur en caractères du libellé tel qu'il apparaît dans la
        // source émise, échappement compris.
        let len = escaped.chars().count();
        let original = m.call_text();
        let annotated = format!(
            "{}({}, {}, \"{}\", {})",
            m.kind.annotated_name(),
            m.actual,
            m.expected,
            escaped,
            len
        );
        debug!("ligne {lineno}: {original} -> {annotated}");
        line = line.replace(&original, &annotated);
        report.rewritten += 1;
    }
    line
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(body) = raw.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = raw.strip_suffix('\n') {
        (body, "\n")
    } else {
        (raw, "")
    }
}
