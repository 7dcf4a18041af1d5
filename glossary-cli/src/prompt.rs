//! Interactive prompts for arguments left off the command line

use std::io::{self, BufRead, Write};

pub const INPUT_PROMPT: &str = "Please input the name of the glossary file: ";
pub const FOLDER_PROMPT: &str = "Please enter the folder you want to store the html files: ";

/// Print `message` and read one line of answer, without its line terminator.
///
/// End of input before any answer is an error.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer given"));
    }
    let trimmed = answer.trim_end_matches(['\n', '\r']).len();
    answer.truncate(trimmed);
    Ok(answer)
}
