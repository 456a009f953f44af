//! Shell export formatting.
//!
//! Produces `export KEY="value"` lines that a POSIX shell can `eval` to get
//! back the exact plaintext bytes. Inside double quotes only `\`, `"`, `$`
//! and `` ` `` are special, so each is prefixed by one backslash in a single
//! left-to-right pass.
//!
//! Known limitation: the format is line oriented, so a raw newline in a value
//! survives `eval` but breaks tools that read the output line by line.

/// Escape a value for use between double quotes in a POSIX shell.
pub fn escape_value(value: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(value.len() + value.len() / 8);

    for &byte in value {
        if matches!(byte, b'\\' | b'"' | b'$' | b'`') {
            escaped.push(b'\\');
        }
        escaped.push(byte);
    }

    escaped
}

/// Format one `export KEY="<escaped>"\n` line.
pub fn format_export_line(key: &str, value: &[u8]) -> Vec<u8> {
    let escaped = escape_value(value);
    let mut line = Vec::with_capacity(key.len() + escaped.len() + 11);
    line.extend_from_slice(b"export ");
    line.extend_from_slice(key.as_bytes());
    line.extend_from_slice(b"=\"");
    line.extend_from_slice(&escaped);
    line.extend_from_slice(b"\"\n");
    line
}
