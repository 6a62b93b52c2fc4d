// src/parsers.rs
use std::str::FromStr;

use file_processing_shared_kernel::FileSize;

/// Wrapper type to parse sizes with optional suffixes (e.g. 512K, 1MiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeArg(pub u64);

impl FromStr for SizeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        num.checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| format!("Size out of range: {s}"))
    }
}

impl From<SizeArg> for FileSize {
    fn from(arg: SizeArg) -> Self {
        FileSize::new(arg.0)
    }
}

fn parse_with_suffix(s: &str) -> (&str, u64) {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const SUFFIXES: &[(&[&str], u64)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
        (&["b"], 1),
    ];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}
