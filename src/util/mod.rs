//! Utility functions: tracing, query-string coercion, LAN address lookup.

use std::net::{IpAddr, Ipv4Addr};
use tracing_subscriber::{EnvFilter, fmt};

/// Placeholder shown in the startup banner when no LAN address exists.
pub const NO_LAN_ADDRESS: &str = "not found";

/// Initialize pretty CLI logging.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// A query flag is set only by the exact string `"true"`.
pub fn query_flag(raw: Option<&str>) -> bool {
  raw == Some("true")
}

/// Parse the longest numeric prefix of `raw`, ignoring leading whitespace
/// and anything after the number. Returns `None` when no prefix parses.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction
/// (`5.`, `.5`) and an exponent that is only consumed when digits follow it.
pub fn parse_lenient_f64(raw: &str) -> Option<f64> {
  let s = raw.trim_start();
  let bytes = s.as_bytes();
  let mut end = 0;

  if matches!(bytes.first(), Some(b'+' | b'-')) {
    end = 1;
  }
  if s[end..].starts_with("Infinity") {
    let negative = bytes.first() == Some(&b'-');
    return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
  }

  let int_digits = count_digits(&bytes[end..]);
  end += int_digits;
  let mut frac_digits = 0;
  if bytes.get(end) == Some(&b'.') {
    frac_digits = count_digits(&bytes[end + 1..]);
    if int_digits > 0 || frac_digits > 0 {
      end += 1 + frac_digits;
    }
  }
  if int_digits == 0 && frac_digits == 0 {
    return None;
  }

  if matches!(bytes.get(end), Some(b'e' | b'E')) {
    let mut exp_end = end + 1;
    if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
      exp_end += 1;
    }
    let exp_digits = count_digits(&bytes[exp_end..]);
    if exp_digits > 0 {
      end = exp_end + exp_digits;
    }
  }

  s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
  bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// First non-loopback IPv4 address, in interface enumeration order.
pub fn first_lan_ipv4() -> Option<Ipv4Addr> {
  let interfaces = match if_addrs::get_if_addrs() {
    Ok(interfaces) => interfaces,
    Err(e) => {
      tracing::warn!("could not enumerate network interfaces: {e}");
      return None;
    }
  };
  pick_lan_ipv4(interfaces.iter().map(|iface| iface.ip()))
}

/// First address in `addrs` that is IPv4 and not loopback.
pub fn pick_lan_ipv4(addrs: impl IntoIterator<Item = IpAddr>) -> Option<Ipv4Addr> {
  addrs.into_iter().find_map(|ip| match ip {
    IpAddr::V4(ip) if !ip.is_loopback() => Some(ip),
    _ => None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn query_flag_only_accepts_literal_true() {
    assert!(query_flag(Some("true")));
    for raw in ["false", "True", "TRUE", "1", "", " true", "yes"] {
      assert!(!query_flag(Some(raw)), "{raw:?} must coerce to false");
    }
    assert!(!query_flag(None));
  }

  #[test]
  fn lenient_parse_reads_plain_numbers() {
    assert_eq!(parse_lenient_f64("0.5"), Some(0.5));
    assert_eq!(parse_lenient_f64("-0.25"), Some(-0.25));
    assert_eq!(parse_lenient_f64("+3"), Some(3.0));
    assert_eq!(parse_lenient_f64("2048"), Some(2048.0));
    assert_eq!(parse_lenient_f64(".5"), Some(0.5));
    assert_eq!(parse_lenient_f64("5."), Some(5.0));
    assert_eq!(parse_lenient_f64("1e10"), Some(1e10));
    assert_eq!(parse_lenient_f64("1.5E-2"), Some(0.015));
  }

  #[test]
  fn lenient_parse_keeps_numeric_prefix() {
    assert_eq!(parse_lenient_f64("  1.5  "), Some(1.5));
    assert_eq!(parse_lenient_f64("\t42abc"), Some(42.0));
    assert_eq!(parse_lenient_f64("1,5"), Some(1.0));
    assert_eq!(parse_lenient_f64("0x10"), Some(0.0));
    assert_eq!(parse_lenient_f64("3e"), Some(3.0));
    assert_eq!(parse_lenient_f64("3e+"), Some(3.0));
    assert_eq!(parse_lenient_f64("1.2.3"), Some(1.2));
  }

  #[test]
  fn lenient_parse_rejects_non_numbers() {
    for raw in ["", "   ", "abc", ".", "-", "+.", "e5", "NaN", "inf"] {
      assert_eq!(parse_lenient_f64(raw), None, "{raw:?} should not parse");
    }
  }

  #[test]
  fn lan_pick_takes_first_non_loopback_ipv4() {
    let addrs: [IpAddr; 4] = [
      "127.0.0.1".parse().unwrap(),
      "fe80::1".parse().unwrap(),
      "192.168.0.130".parse().unwrap(),
      "10.0.0.7".parse().unwrap(),
    ];
    assert_eq!(pick_lan_ipv4(addrs), Some(Ipv4Addr::new(192, 168, 0, 130)));
  }

  #[test]
  fn lan_pick_skips_loopback_and_ipv6_only_hosts() {
    let loopback_only: [IpAddr; 2] = ["127.0.0.1".parse().unwrap(), "127.0.1.1".parse().unwrap()];
    assert_eq!(pick_lan_ipv4(loopback_only), None);

    let ipv6_only: [IpAddr; 2] = ["::1".parse().unwrap(), "2001:db8::5".parse().unwrap()];
    assert_eq!(pick_lan_ipv4(ipv6_only), None);

    assert_eq!(pick_lan_ipv4(Vec::new()), None);
  }

  #[test]
  fn lenient_parse_reads_infinity() {
    assert_eq!(parse_lenient_f64("Infinity"), Some(f64::INFINITY));
    assert_eq!(parse_lenient_f64("-Infinityxyz"), Some(f64::NEG_INFINITY));
  }
}
