//! Content sniffing for files that should not be checked.

/// Generated-code marker, as described at <https://golang.org/s/generatedcode>.
pub const GENERATED_HEADER: &[u8] = b"// Code generated ";
pub const GENERATED_FOOTER: &[u8] = b" DO NOT EDIT.";

/// Number of leading bytes inspected for binary content.
pub const SNIFF_LEN: usize = 512;

/// Whether any line starts with the generated header and contains the footer.
#[must_use]
pub fn is_generated(src: &[u8]) -> bool {
    src.split(|&b| b == b'\n')
        .any(|line| line.starts_with(GENERATED_HEADER) && contains(line, GENERATED_FOOTER))
}

/// Whether the leading bytes contain control bytes that never appear in text.
///
/// Tab, newline, form feed, carriage return and escape are allowed.
#[must_use]
pub fn is_binary(src: &[u8]) -> bool {
    src.iter()
        .take(SNIFF_LEN)
        .any(|&b| matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
