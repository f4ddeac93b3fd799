//! `apply` command: transliterates words with a mapping file.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use retrans_core::TransliterationConfig;

/// Where the words come from and where the results go.
#[derive(Debug, Default)]
pub struct ApplyOptions {
    pub words: Vec<String>,
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

/// Splits `input` into words, one per line.
pub fn words_from_text(input: &str) -> Vec<String> {
    input.lines().map(str::to_owned).collect()
}

/// Collects the words to process: arguments first, then the input file, then stdin.
fn read_words(opts: &ApplyOptions) -> Result<Vec<String>> {
    if !opts.words.is_empty() {
        // Output is one word per line, so a word may not span lines.
        if let Some(word) = opts.words.iter().find(|w| w.contains(['\n', '\r'])) {
            bail!("Word {:?} contains a line break; pass one word per argument", word);
        }
        return Ok(opts.words.clone());
    }

    let text = match &opts.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };
    Ok(words_from_text(&text))
}

/// Runs the `apply` command against an already loaded configuration.
pub fn run_apply(config: &TransliterationConfig, opts: ApplyOptions) -> Result<()> {
    let words = read_words(&opts)?;
    info!("Transliterating {} word(s).", words.len());

    let results = config
        .transliterate_list(words.as_slice())
        .context("Transliteration failed")?;

    let mut output = results.join("\n");
    if !results.is_empty() {
        output.push('\n');
    }

    match &opts.output_path {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            debug!("Wrote {} word(s) to {}.", results.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
            handle.flush()?;
        }
    }
    Ok(())
}
