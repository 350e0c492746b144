//! Build information module
//!
//! Exposes the build metadata injected by the build script as compile-time
//! constants, plus the startup banner both binaries print.

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("PCC_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format (UTC)
pub const BUILD_TIMESTAMP: &str = match option_env!("PCC_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Const function to parse a u64 from a decimal string at compile time
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Print the startup banner with build information to stderr
pub fn print_startup_banner() {
    eprintln!("===============================================");
    eprintln!("  Protein & Calorie Calculator (PCC)");
    eprintln!("  Version: {} | Build: #{}", VERSION, BUILD_NUMBER);
    eprintln!("  Compiled: {}", BUILD_TIMESTAMP);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64_valid() {
        assert_eq!(parse_u64("42"), Some(42));
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn test_parse_u64_invalid() {
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("abc"), None);
        assert_eq!(parse_u64("12x"), None);
        assert_eq!(parse_u64("-1"), None);
    }

    #[test]
    fn test_build_constants_populated() {
        assert!(!VERSION.is_empty());
        assert!(!BUILD_TIMESTAMP.is_empty());
    }
}
