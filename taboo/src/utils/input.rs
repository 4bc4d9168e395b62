//! Reads the message to censor from the command line, a file or stdin.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};

use crate::cli::InputArgs;

/// The message plus a label naming where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMessage {
    pub text: String,
    pub source_id: String,
}

/// Reads the message selected by `args`: the positional message, then the
/// input file, then stdin.
///
/// One trailing line break is dropped from file and stdin input, since the
/// output is written with its own line break.
pub fn read_input(args: &InputArgs) -> Result<InputMessage> {
    if let Some(message) = &args.message {
        debug!("Using message from the command line.");
        return Ok(InputMessage { text: message.clone(), source_id: "argument".to_string() });
    }

    if let Some(path) = &args.input_file {
        info!("Reading input from file: {}", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        return Ok(InputMessage {
            text: strip_trailing_newline(text),
            source_id: path.display().to_string(),
        });
    }

    info!("Reading input from stdin...");
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read input from stdin")?;
    Ok(InputMessage { text: strip_trailing_newline(text), source_id: "stdin".to_string() })
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
