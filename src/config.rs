//! Configuración y argumentos CLI

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;

/// Errores de la capa exterior (entrada/salida, serialización).
/// El análisis en sí nunca falla.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("error leyendo archivo '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error escribiendo archivo '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error generando JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no se proporcionó texto para analizar")]
    EmptyInput,
}

/// Formato de salida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Texto legible, un bloque por oración
    #[default]
    Text,
    /// JSON; una lista si hay varias oraciones
    Json,
}

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "sentence-grammar",
    version,
    about = "Analizador gramatical de oraciones en inglés",
    after_help = "EJEMPLOS:\n    sentence-grammar \"The cat sat on the mat.\"\n    sentence-grammar --input frases.txt --format json\n    sentence-grammar -v -o informe.txt \"What is your name?\""
)]
pub struct Config {
    /// Oración a analizar
    #[arg(value_name = "TEXTO")]
    pub text: Option<String>,

    /// Archivo de entrada (una oración por línea)
    #[arg(short, long = "input", value_name = "ARCHIVO")]
    pub input_file: Option<PathBuf>,

    /// Archivo de salida
    #[arg(short, long = "output", value_name = "ARCHIVO")]
    pub output_file: Option<PathBuf>,

    /// Formato de salida
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Más detalle en el log (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parsea argumentos; el primero es el nombre del programa
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Nivel de log por defecto según `-v`; RUST_LOG tiene prioridad
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    /// Obtiene el texto a analizar: archivo de entrada o argumento posicional
    pub fn load_text(&self) -> Result<String, AppError> {
        if let Some(ref path) = self.input_file {
            return fs::read_to_string(path).map_err(|source| AppError::Read {
                path: path.clone(),
                source,
            });
        }

        match self.text {
            Some(ref text) if !text.trim().is_empty() => Ok(text.clone()),
            _ => Err(AppError::EmptyInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(["sentence-grammar", "Hello there."]).unwrap();
        assert_eq!(config.text.as_deref(), Some("Hello there."));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
        assert!(config.input_file.is_none());
        assert!(config.output_file.is_none());
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let parsed = Config::from_args(["sentence-grammar"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.text, default.text);
        assert_eq!(parsed.input_file, default.input_file);
        assert_eq!(parsed.output_file, default.output_file);
        assert_eq!(parsed.format, default.format);
        assert_eq!(parsed.verbose, default.verbose);
    }

    #[test]
    fn test_options() {
        let config = Config::from_args([
            "sentence-grammar",
            "--input",
            "frases.txt",
            "-o",
            "salida.json",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("frases.txt")));
        assert_eq!(config.output_file, Some(PathBuf::from("salida.json")));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_option_is_error() {
        assert!(Config::from_args(["sentence-grammar", "--lang", "es"]).is_err());
    }

    #[test]
    fn test_load_text_from_argument() {
        let config = Config {
            text: Some("I am here.".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_text().unwrap(), "I am here.");
    }

    #[test]
    fn test_load_text_empty_input() {
        assert!(matches!(Config::default().load_text(), Err(AppError::EmptyInput)));

        let config = Config {
            text: Some("   ".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.load_text(), Err(AppError::EmptyInput)));
    }

    #[test]
    fn test_load_text_missing_file() {
        let config = Config {
            input_file: Some(PathBuf::from("no/existe/frases.txt")),
            ..Config::default()
        };
        let err = config.load_text().unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
        assert!(err.to_string().contains("no/existe/frases.txt"));
    }
}
