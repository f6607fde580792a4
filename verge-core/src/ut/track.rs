// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use chrono;
use colored::*;
use kdam::{Bar, tqdm};

/// A progress bar for tracking per-image processing
pub fn progress_bar(n: usize, desc: &str, verbose: bool) -> Bar {
    if !verbose {
        return tqdm!(disable = true);
    }

    tqdm!(
        total = n,
        force_refresh = false,
        desc = progress_timestamp(desc),
        bar_format = "{desc suffix=' '}[{percentage:.0}%] ({rate:.1}/s, eta: {remaining human=true})"
    )
}

/// Prefix a message with a timestamped program tag
pub fn progress_timestamp(desc: &str) -> String {
    let time = chrono::Local::now().format("%Y-%m-%d | %H:%M:%S");

    format!(
        "{} {} {} {} {} {}",
        "[".bold(),
        time,
        "|".bold(),
        "verge".truecolor(224, 146, 31).bold(),
        "]".bold(),
        desc,
    )
}

/// Print timestamped statements to console
pub fn progress_log(desc: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("{}", progress_timestamp(desc));
}

/// Format counts with thousands separators for log messages
pub fn thousands_format<T>(number: T) -> String
where
    T: std::fmt::Display,
{
    let number = number.to_string();

    if number.len() <= 4 {
        return number;
    }

    number
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<&str>, _>>()
        .unwrap()
        .join(",")
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_thousands_format() {
        assert_eq!(thousands_format(999), "999");
        assert_eq!(thousands_format(1000), "1000");
        assert_eq!(thousands_format(12345), "12,345");
        assert_eq!(thousands_format(1234567), "1,234,567");
    }

    #[test]
    fn test_progress_timestamp_contains_message() {
        let message = progress_timestamp("Rasterizing");
        assert!(message.contains("Rasterizing"));
    }
}
