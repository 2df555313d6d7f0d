//! Content-line folding.

/// Maximum physical line length in octets, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Appends `line` to `out` as one or more CRLF-terminated physical lines.
///
/// Continuation lines start with a single space, which counts toward their
/// length. Folds only at UTF-8 character boundaries.
pub fn push_folded(out: &mut String, line: &str) {
    let mut limit = MAX_LINE_OCTETS;
    let mut used = 0;

    for c in line.chars() {
        if used + c.len_utf8() > limit {
            out.push_str("\r\n ");
            limit = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(c);
        used += c.len_utf8();
    }

    out.push_str("\r\n");
}
