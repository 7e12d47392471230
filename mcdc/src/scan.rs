// MCDC - test case generation for boolean expressions.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};
use log::{debug, warn};
use mcdc::lex::{
    Token,
    scan::{ScanError, ScanToken, Scanner},
};
use std::{
    fs::{File, read},
    io::{Read, Write, stdin, stdout},
    path::PathBuf,
};

/// Show the tokens in a boolean expression.
#[derive(Args, Clone, Debug)]
pub struct Scan {
    /// Expression to scan.  If omitted, the expression is read from `--input`
    /// or, failing that, from stdin.
    #[arg(conflicts_with = "input")]
    expression: Option<String>,

    /// File to read the expression from.
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output file name.  If omitted, output is written to stdout.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum)]
    format: Option<ScanFormat>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum ScanFormat {
    /// One line per token.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Newline-delimited JSON.
    Ndjson,
}

/// Decodes `bytes` as UTF-8.  Each invalid sequence becomes U+FFFD, which
/// scans as [Token::None] like any other unexpected character.
fn decode_source(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(error) => {
            warn!("input is not valid UTF-8: {}", error.utf8_error());
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    }
}

/// Scans all of `source`, including the final [Token::End].  Returns the
/// tokens and the error for the first unexpected character, if any.
fn scan_source(source: &str) -> (Vec<ScanToken>, Option<ScanError>) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    let mut first_error = None;
    loop {
        let scan_token = scanner.scan_token();
        if let Some(error) = scan_token.error() {
            warn!("{error}");
            first_error.get_or_insert(error);
        }
        let end = scan_token.token.token == Token::End;
        tokens.push(scan_token);
        if end {
            break;
        }
    }
    debug!("scanned {} tokens from {} bytes", tokens.len(), source.len());
    (tokens, first_error)
}

fn write_tokens(
    writer: &mut dyn Write,
    format: ScanFormat,
    source: &str,
    tokens: &[ScanToken],
) -> Result<()> {
    match format {
        ScanFormat::Text => {
            for scan_token in tokens {
                write_text(writer, source, scan_token)?;
            }
        }
        ScanFormat::Json => {
            let tokens = tokens
                .iter()
                .map(|scan_token| scan_token.token)
                .collect::<Vec<_>>();
            serde_json::to_writer_pretty(&mut *writer, &tokens)?;
            writeln!(writer)?;
        }
        ScanFormat::Ndjson => {
            for scan_token in tokens {
                serde_json::to_writer(&mut *writer, &scan_token.token)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Writes one line for `scan_token`: its offset, the token, the text it was
/// scanned from, and the literal for an identifier.
fn write_text(writer: &mut dyn Write, source: &str, scan_token: &ScanToken) -> Result<()> {
    let ScanToken { token, span } = scan_token;
    write!(writer, "{:>4}  {token}", span.start)?;
    if !span.is_empty() {
        write!(writer, "  {:?}", &source[span.clone()])?;
    }
    if let Some(literal) = token.literal() {
        if literal.negated() {
            write!(writer, "  NOT {}", literal.letter().to_ascii_lowercase())?;
        } else {
            write!(writer, "  {literal}")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

impl Scan {
    fn read_source(&self) -> Result<String> {
        if let Some(expression) = &self.expression {
            Ok(expression.clone())
        } else if let Some(input) = &self.input {
            debug!("reading expression from {}", input.display());
            let bytes = read(input).map_err(|error| anyhow!("{}: {error}", input.display()))?;
            Ok(decode_source(bytes))
        } else {
            debug!("reading expression from stdin");
            let mut bytes = Vec::new();
            stdin().read_to_end(&mut bytes)?;
            Ok(decode_source(bytes))
        }
    }

    pub fn run(self) -> Result<()> {
        let source = self.read_source()?;
        let (tokens, first_error) = scan_source(&source);

        let mut writer: Box<dyn Write> = match &self.output {
            Some(output) => Box::new(
                File::create(output).map_err(|error| anyhow!("{}: {error}", output.display()))?,
            ),
            None => Box::new(stdout()),
        };
        write_tokens(
            &mut writer,
            self.format.unwrap_or_default(),
            &source,
            &tokens,
        )?;

        match first_error {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
