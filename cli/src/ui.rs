use colored::Colorize;
use func_variation::units::{format_ether, Wei};

pub fn status(message: impl AsRef<str>) {
    eprintln!("{} {}", "==>".blue().bold(), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    eprintln!("{} {}", "ok".green().bold(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "warn".yellow().bold(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", "error".red().bold(), message.as_ref());
}

pub fn format_wei(wei: Wei) -> String {
    format!("{} ETH ({wei} wei)", format_ether(wei))
}

pub fn to_hex_prefixed(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 2);
    out.push_str("0x");

    for byte in bytes {
        use std::fmt::Write;
        let _ = write!(&mut out, "{byte:02x}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_wei_with_ether() {
        assert_eq!(format_wei(10_000_000_000_000_000), "0.01 ETH (10000000000000000 wei)");
        assert_eq!(format_wei(0), "0 ETH (0 wei)");
    }

    #[test]
    fn hex_is_prefixed_and_lowercase() {
        assert_eq!(to_hex_prefixed(&[0x00, 0xab, 0x10]), "0x00ab10");
        assert_eq!(to_hex_prefixed(&[]), "0x");
    }
}
