//! Timing helpers.

use std::borrow::Cow;
use std::time::{Duration, Instant};

/// Timer that logs the elapsed time of a phase when dropped.
///
/// ```ignore
/// let _t = Timed::info("Relax categories");
/// // ... work ...
/// // logs "Relax categories: 1.234ms"
/// ```
pub struct Timed {
    label: Cow<'static, str>,
    start: Instant,
    level: log::Level,
}

impl Timed {
    /// Timer that reports at INFO level.
    pub fn info(label: impl Into<Cow<'static, str>>) -> Self {
        Self::start(label.into(), log::Level::Info)
    }

    /// Timer that reports at DEBUG level.
    pub fn debug(label: impl Into<Cow<'static, str>>) -> Self {
        Self::start(label.into(), log::Level::Debug)
    }

    fn start(label: Cow<'static, str>, level: log::Level) -> Self {
        log::trace!("{}...", label);
        Self {
            label,
            start: Instant::now(),
            level,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        log::log!(self.level, "{}: {:.3?}", self.label, self.start.elapsed());
    }
}

/// Parse a count with an optional `k` or `m` suffix ("500", "2k", "1.5m").
pub fn parse_count(s: &str) -> Result<usize, String> {
    let lower = s.trim().to_lowercase();
    let (digits, multiplier) = if let Some(rest) = lower.strip_suffix('m') {
        (rest, 1_000_000.0)
    } else if let Some(rest) = lower.strip_suffix('k') {
        (rest, 1_000.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let value = digits
        .parse::<f64>()
        .map_err(|e| format!("Invalid number '{}': {}", s, e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("Invalid count '{}'", s));
    }
    Ok((value * multiplier) as usize)
}

/// Format a count with the suffixes [`parse_count`] accepts ("300", "2k", "1.5m").
pub fn format_count(n: usize) -> String {
    match n {
        n if n >= 1_000_000 => format!("{:.1}m", n as f64 / 1_000_000.0),
        n if n >= 1_000 && n % 1_000 == 0 => format!("{}k", n / 1_000),
        n if n >= 1_000 => format!("{:.1}k", n as f64 / 1_000.0),
        n => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("250"), Ok(250));
        assert_eq!(parse_count("2k"), Ok(2000));
        assert_eq!(parse_count("1.5K"), Ok(1500));
        assert_eq!(parse_count("1m"), Ok(1_000_000));
        assert!(parse_count("abc").is_err());
        assert!(parse_count("-5").is_err());
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(300), "300");
        assert_eq!(format_count(2000), "2k");
        assert_eq!(format_count(1500), "1.5k");
        assert_eq!(format_count(2_500_000), "2.5m");
        for n in [7, 300, 2000, 1500, 40_000] {
            assert_eq!(parse_count(&format_count(n)), Ok(n));
        }
    }

    #[test]
    fn test_timed_elapsed() {
        let t = Timed::debug(format!("phase {}", 1));
        assert!(t.elapsed() < Duration::from_secs(60));
    }
}
