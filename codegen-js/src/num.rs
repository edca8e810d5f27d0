/// Formats a number the way ECMAScript's `Number.prototype.toString()` does.
pub fn d2a(value: f64) -> String {
  if value.is_nan() {
    return "NaN".to_string();
  }
  if value == 0.0 {
    // `ToString(-0)` is `"0"`.
    return "0".to_string();
  }
  if value < 0.0 {
    return format!("-{}", d2a(-value));
  }
  if value.is_infinite() {
    return "Infinity".to_string();
  }

  let (digits, point) = shortest_digits(value);
  let k = digits.len() as i32;
  let n = point;
  if k <= n && n <= 21 {
    let mut out = digits;
    out.extend(std::iter::repeat('0').take((n - k) as usize));
    out
  } else if 0 < n && n <= 21 {
    let (int_part, frac_part) = digits.split_at(n as usize);
    format!("{int_part}.{frac_part}")
  } else if -6 < n && n <= 0 {
    let mut out = String::from("0.");
    out.extend(std::iter::repeat('0').take((-n) as usize));
    out.push_str(&digits);
    out
  } else {
    let exp = n - 1;
    let sign = if exp >= 0 { '+' } else { '-' };
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
      format!("{first}e{sign}{}", exp.abs())
    } else {
      format!("{first}.{rest}e{sign}{}", exp.abs())
    }
  }
}

/// Formats a number as the shortest numeric literal text that evaluates to it.
pub fn short_d2a(value: f64) -> String {
  let text = d2a(value);
  if value >= 1e3 && value % 10.0 == 0.0 {
    if text.contains('e') {
      return text.replace("e+", "e");
    }
    let zeros = text.len() - text.trim_end_matches('0').len();
    if zeros > 1 {
      return format!("{}e{}", &text[..text.len() - zeros], zeros);
    }
    return text;
  }
  if value % 1.0 == 0.0 {
    if value > 1e15 && value < 1e20 {
      return format!("0x{:X}", value as u64);
    }
    return text.replace("e+", "e");
  }
  match text.strip_prefix("0.") {
    Some(frac) => format!(".{}", frac.replace("e+", "e")),
    None => text.replace("e+", "e"),
  }
}

/// Returns the significant decimal digits of a positive finite value without leading or trailing
/// zeros, and the position of the decimal point relative to the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
  let mut buf = ryu::Buffer::new();
  let formatted = buf.format_finite(value);
  let (mantissa, exp) = match formatted.split_once('e') {
    Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
    None => (formatted, 0),
  };
  let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
  let mut digits = String::with_capacity(int_part.len() + frac_part.len());
  digits.push_str(int_part);
  digits.push_str(frac_part);
  let mut point = int_part.len() as i32 + exp;

  let leading = digits.len() - digits.trim_start_matches('0').len();
  digits.drain(..leading);
  point -= leading as i32;
  let significant = digits.trim_end_matches('0').len();
  digits.truncate(significant);
  (digits, point)
}
