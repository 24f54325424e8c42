/// Helper for parsing user input.
/// Accepts decimal or `0x`-prefixed hex, with an optional leading `-` so
/// negative values make it through to validation instead of being eaten by
/// the flag parser.
pub fn parse_offset(s: &str) -> Result<i64, String> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.starts_with('-') {
        return Err(format!("invalid offset: {}", s));
    }

    let value = if let Some(hex_val) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex_val, 16).map_err(|e| e.to_string())?
    } else {
        digits.parse::<i64>().map_err(|e| e.to_string())?
    };

    Ok(if negative { -value } else { value })
}
