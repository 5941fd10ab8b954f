use std::io::BufRead;

use csv_core::ReadFieldResult;

/// Splits a row at tab characters. Quotes have no special meaning.
pub fn parse_tsv_row(row: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .build();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    let mut field = vec![];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        field.extend_from_slice(&output[..nout]);
        bytes = &bytes[nin..];
        let end = match result {
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::OutputFull => continue,
            ReadFieldResult::Field { record_end } => record_end,
            ReadFieldResult::End => true,
        };
        fields.push(String::from_utf8_lossy(&field).into_owned());
        field.clear();
        if end {
            break;
        }
    }
    fields
}

/// Trims ASCII spaces and line terminators at both ends.
#[inline(always)]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\r' || c == '\n')
}

/// Reads lines until EOF.
///
/// Each item is a 1-origin line number and the line, or `None` if the line is not UTF-8.
pub fn read_lines<R>(mut rdr: R) -> std::io::Result<Vec<(usize, Option<String>)>>
where
    R: BufRead,
{
    let mut lines = vec![];
    let mut buf = vec![];
    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines.push((lines.len() + 1, String::from_utf8(buf.clone()).ok()));
    }
    Ok(lines)
}
