/// Shortest decimal rendering of `x` with at most six fractional digits.
pub fn format_compact(x: f64) -> String {
    let mut s = format!("{:.6}", x);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s.is_empty() || s == "-0" { "0".to_string() } else { s }
}
