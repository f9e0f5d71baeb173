//! `tok lex`: tokenize a file and print the token stream.

use std::fmt::Write;

use tok_core::{identity, merge_element, merge_words, skip_with, RefineFn, Token, TokenType, Tokens};

use super::{read_file, Format, LexOptions, Mode};
use crate::error::{CliError, Result};

fn refine_for(mode: Mode) -> RefineFn {
    match mode {
        Mode::Base => identity,
        Mode::Words => merge_words,
        Mode::Element => merge_element,
    }
}

/// Tokenize `source` with the refine function picked by `options.mode`.
///
/// The returned list never contains `EndOfInput`. With `skip_spaces`, runs
/// of `Space` tokens are discarded between the other tokens.
pub fn lex_source(source: &[u8], options: &LexOptions) -> Vec<Token> {
    let refine = refine_for(options.mode);
    if !options.skip_spaces {
        return Tokens::new(source, refine).collect();
    }

    let mut tokens = Vec::new();
    let mut rest = source;
    loop {
        let skipped = skip_with(&TokenType::Space, rest, refine);
        if skipped.token.is_end_of_input() {
            return tokens;
        }
        tokens.push(skipped.token);
        rest = skipped.rest;
    }
}

/// Render tokens in the requested format. The output ends with a newline.
pub fn render(tokens: &[Token], format: Format) -> Result<String> {
    let mut out = String::new();
    match format {
        Format::Text => {
            for token in tokens {
                // Writing into a String cannot fail.
                let _ = writeln!(out, "{token}");
            }
        }
        Format::Json => {
            out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
        }
        Format::Markup => {
            out.push_str("<tokens>\n");
            for token in tokens {
                out.push_str("  ");
                out.push_str(&token.to_markup());
                out.push('\n');
            }
            out.push_str("</tokens>\n");
        }
    }
    Ok(out)
}

/// Read the file named in `options`, tokenize it, and render the result.
#[tracing::instrument(level = "debug", skip_all, fields(mode = ?options.mode, format = ?options.format))]
pub fn lex_file(options: &LexOptions) -> Result<String> {
    let path = options.path.as_deref().ok_or(CliError::MissingPath)?;
    let source = read_file(path)?;
    let tokens = lex_source(&source, options);
    tracing::debug!(
        path = %path.display(),
        bytes = source.len(),
        tokens = tokens.len(),
        "tokenized"
    );
    render(&tokens, options.format)
}
