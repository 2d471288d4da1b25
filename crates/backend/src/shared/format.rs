/// Group digits in threes with a space: `1234567` -> `1 234 567`.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Byte count for the request log, e.g. `12 480 B`.
pub fn format_size(bytes: usize) -> String {
    format!("{} B", format_number(bytes))
}
