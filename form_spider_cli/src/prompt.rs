use form_spider::{Result, ScrapeError, SelectField};
use std::io::{BufRead, Write};

/// Write the prompt, then read one trimmed line. `None` at end of input.
pub fn ask_line<R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Show the options of a select numbered from 1 and read until a valid number is given.
/// Returns the value of the chosen option.
pub fn prompt_user_select<R, W>(input: &mut R, out: &mut W, field: &SelectField) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    let count = field.options.len();

    if count == 0 {
        return Err(ScrapeError::NoOptions(field.name.clone()));
    }

    writeln!(out, "\nSelect {}:", field.name)?;
    for (i, option) in field.options.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, option.label)?;
    }

    let prompt = format!("Pilih nomor (1-{}): ", count);

    loop {
        let choice = ask_line(input, out, &prompt)?.ok_or(ScrapeError::InputClosed)?;

        if choice.is_empty() || !choice.bytes().all(|b| b.is_ascii_digit()) {
            writeln!(out, "Input harus angka.")?;
            continue;
        }

        // all digits, so a parse failure is an overflow
        match choice.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(field.options[n - 1].value.clone()),
            _ => writeln!(out, "Nomor di luar jangkauan.")?,
        }
    }
}
