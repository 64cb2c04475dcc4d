use std::io::{BufRead, Write};

use crate::shell::ShellError;

pub fn parse_f64(value: &str) -> Result<f64, ShellError> {
    let value = value.trim();
    value
        .parse::<f64>()
        .map_err(|_| ShellError::Parse(value.to_string()))
}

/// Prints `prompt` and reads one line. Bytes that are not UTF-8 are
/// replaced, so they fail later as an ordinary parse error. End of input,
/// or a stream that can no longer be read, is reported as
/// [`ShellError::InputClosed`].
pub fn read_token<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, ShellError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = Vec::new();
    let bytes = input.read_until(b'\n', &mut line).map_err(|err| {
        log::warn!("stdin unreadable, ending session: {err}");
        ShellError::InputClosed
    })?;
    if bytes == 0 {
        return Err(ShellError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}

pub fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64, ShellError> {
    let token = read_token(input, output, prompt)?;
    parse_f64(&token)
}
