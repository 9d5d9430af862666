//! src/main.rs — sigrun-testprep, préprocesseur des tests `.vd`
//!
//! Exemples :
//!   sigrun-testprep                      # test.vd -> tmp.vd (noms historiques)
//!   sigrun-testprep suite.vd out/suite.vd
//!   sigrun-testprep suite.vd /dev/null --check
//!
//! Notes :
//! - Sans arguments, reprend le contrat d'origine : lit `test.vd` et écrit
//!   `tmp.vd` dans le dossier courant.
//! - `--check` n'écrit rien ; la passe tourne en mémoire et seul le bilan
//!   est affiché.
//! - Le fichier produit est destiné au compilateur sigrun, pas à être lu.

use std::fs;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;

use sigrun_testprep::{rewrite_file, rewrite_str, RewriteReport};

#[derive(Parser, Debug)]
#[command(name = "sigrun-testprep", version, about = "Annote les assertions d'un fichier de test sigrun (.vd)")]
struct Cli {
    /// Fichier de test à réécrire
    #[arg(default_value = "test.vd")]
    input: Utf8PathBuf,

    /// Fichier de sortie (créé ou écrasé)
    #[arg(default_value = "tmp.vd")]
    output: Utf8PathBuf,

    /// Vérifie la passe sans écrire (dry-run)
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    color_eyre::install().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let report = if cli.check {
        let src = fs::read_to_string(&cli.input)
            .with_context(|| format!("Lecture échouée: {}", cli.input))?;
        let (_, report) = rewrite_str(&src);
        report
    } else {
        rewrite_file(cli.input.as_std_path(), cli.output.as_std_path())
            .with_context(|| format!("Réécriture {} -> {}", cli.input, cli.output))?
    };

    print_summary(&cli, report);
    Ok(())
}

fn print_summary(cli: &Cli, report: RewriteReport) {
    if cli.check {
        eprintln!(
            "✅ Passe OK (check-only). lignes={}, assertions={}",
            report.lines, report.rewritten
        );
    } else {
        eprintln!(
            "✅ {} -> {} : lignes={}, assertions={}",
            cli.input, cli.output, report.lines, report.rewritten
        );
    }
}
