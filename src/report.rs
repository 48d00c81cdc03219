//! Console text of the binary and the exit status for each failure.

use crate::error::IconError;
use std::io::Write;

pub const START_BANNER: &str = "Criando ícone personalizado para a Calculadora de Sistemas Lineares...";
pub const DONE_BANNER: &str = "Concluído!";

pub const EXIT_MISSING_DEPENDENCY: u8 = 1;
pub const EXIT_FAILURE: u8 = 2;

pub fn icon_written(file_name: &str) -> String {
    format!("Ícone criado com sucesso: {file_name}")
}

pub fn preview_written(file_name: &str) -> String {
    format!("Preview criado: {file_name}")
}

/// Explains `err` to the user and returns the process exit status.
///
/// A missing codec gets remediation lines on `out`. Every other error is
/// a single line on stderr and leaves `out` untouched.
pub fn report_failure(err: &IconError, out: &mut impl Write) -> u8 {
    match err {
        IconError::MissingDependency { .. } => {
            let _ = writeln!(out, "ERRO: o codec PNG da biblioteca de imagens não está disponível.");
            let _ = writeln!(
                out,
                "Execute: cargo build --release (com a feature \"png\" da crate image habilitada)"
            );
            EXIT_MISSING_DEPENDENCY
        }
        other => {
            eprintln!("erro: {other}");
            EXIT_FAILURE
        }
    }
}
