use crate::YouTubeError;

/// Parses an ISO 8601 video duration such as "PT1H2M3S" into whole seconds.
///
/// The Data API only emits hour/minute/second designators for video
/// durations, so date components and fractional seconds are rejected.
pub fn parse_iso8601_duration(value: &str) -> Result<u64, YouTubeError> {
    let components = value
        .strip_prefix("PT")
        .ok_or_else(|| YouTubeError::ParseError(format!("not a time duration: {value}")))?;

    let mut total = 0u64;
    let mut digits = String::new();

    for c in components.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let n: u64 = digits
            .parse()
            .map_err(|_| YouTubeError::ParseError(format!("bad component in duration: {value}")))?;
        digits.clear();

        total += match c {
            'H' => n * 3600,
            'M' => n * 60,
            'S' => n,
            _ => {
                return Err(YouTubeError::ParseError(format!(
                    "unknown designator '{c}' in duration: {value}"
                )))
            }
        };
    }

    if !digits.is_empty() {
        return Err(YouTubeError::ParseError(format!(
            "trailing digits in duration: {value}"
        )));
    }

    Ok(total)
}
