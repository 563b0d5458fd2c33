/// Escapes a value for use inside a single-quoted JS string.
///
/// Only the first `'` is escaped. Generated files have always been produced this way, so values
/// holding more than one quote come out unbalanced.
pub fn escape_value(value: &str) -> String {
    value.replacen('\'', "\\'", 1)
}
