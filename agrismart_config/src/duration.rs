use std::ops::Deref;

use serde::Deserialize;

/// Human-readable duration: whitespace-separated parts of the form
/// `<n><unit>` with units `s`, `m`, `h` and `d` (e.g. `5s`, `1h 30m`).
/// A part without a unit counts as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.split_whitespace()
            .try_fold(0u64, |acc, part| {
                acc.checked_add(part_seconds(part)?)
            })
            .map(|seconds| Self(std::time::Duration::from_secs(seconds)))
            .ok_or_else(|| serde::de::Error::custom("Invalid duration"))
    }
}

fn part_seconds(part: &str) -> Option<u64> {
    let (digits, unit_seconds) = match part.as_bytes().last()? {
        b's' => (&part[..part.len() - 1], 1),
        b'm' => (&part[..part.len() - 1], 60),
        b'h' => (&part[..part.len() - 1], 60 * 60),
        b'd' => (&part[..part.len() - 1], 24 * 60 * 60),
        b'0'..=b'9' => (part, 1),
        _ => return None,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()?.checked_mul(unit_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13)),
            ("42m", Some(42 * 60)),
            ("7h", Some(7 * 60 * 60)),
            ("20d", Some(20 * 24 * 60 * 60)),
            ("30", Some(30)),
            ("", Some(0)),
            ("1d 2h 3m 4s", Some(((24 + 2) * 60 + 3) * 60 + 4)),
            ("xyz", None),
            ("7dd", None),
            ("s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input.clone())
                .ok()
                .map(|x| x.0.as_secs());
            assert_eq!(output, expected, "input: {input}");
        }
    }
}
