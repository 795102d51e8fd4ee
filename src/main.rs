use std::fs;
use std::process;

use clap::Parser;
use log::{debug, info, log_enabled, Level};

use sentence_grammar::grammar::sentences;
use sentence_grammar::{
    render_feedback, render_json_all, AppError, Config, GrammarAnalyzer, OutputFormat,
};

fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let text = config.load_text()?;
    match config.input_file {
        Some(ref path) => info!("Analizando oraciones de '{}'", path.display()),
        None => info!("Analizando oración de la línea de comandos"),
    }

    let analyzer = GrammarAnalyzer::new();
    let reports = analyzer.analyze_lines(&text);
    if reports.is_empty() {
        return Err(AppError::EmptyInput);
    }

    if log_enabled!(Level::Debug) {
        for (sentence, report) in sentences(&text).zip(&reports) {
            let rule = analyzer
                .tense_rule(sentence)
                .map_or_else(|| "default".to_string(), |id| id.to_string());
            debug!(
                "{} palabras: {} / {} (regla {}) / {}",
                report.word_count,
                report.sentence_type,
                report.tense,
                rule,
                report.complexity.level
            );
        }
    }

    let output = match config.format {
        OutputFormat::Text => reports
            .iter()
            .map(render_feedback)
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Json => render_json_all(&reports)?,
    };

    // Escribir resultado
    if let Some(ref output_file) = config.output_file {
        fs::write(output_file, &output).map_err(|source| AppError::Write {
            path: output_file.clone(),
            source,
        })?;
        info!(
            "{} informe(s) escrito(s) en '{}'",
            reports.len(),
            output_file.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
