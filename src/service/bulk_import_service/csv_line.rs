///
/// Split a single csv line on commas with quote awareness.
///
/// A quote toggles the in-quotes flag, commas inside quotes do not
/// split. A doubled quote inside a quoted field is a literal quote.
/// Surrounding quotes are stripped from the resulting fields.
///
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}
