use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use minic::{display_error, lexer::lexer::tokenize};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/input.c");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let file_path = PathBuf::from(env::args().nth(1).unwrap_or_else(|| String::from(DEFAULT_INPUT)));

    let file_contents = match read_to_string(&file_path) {
        Ok(contents) => contents,
        Err(err) => {
            error!(path = %file_path.display(), %err, "failed to read input");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    match tokenize(&file_contents) {
        Ok(tokens) => {
            info!(count = tokens.len(), elapsed = ?start.elapsed(), "tokenized");
            for token in &tokens {
                token.debug();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            display_error(&err, &file_contents, &file_path);
            ExitCode::FAILURE
        }
    }
}
