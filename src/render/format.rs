//! Number and currency formatting for the Italian locale

/// Format an amount as Euro the way `it-IT` does: `1.234,50 €`
pub fn eur(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN €".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}∞ €", sign);
    }

    let (units, cents) = round_to_cents(amount.abs());
    let sign = if amount < 0.0 && (units != "0" || cents != "00") {
        "-"
    } else {
        ""
    };

    format!("{}{},{} €", sign, group_thousands(&units), cents)
}

/// Round the shortest decimal form of `value` to two places, half away from
/// zero: `1.005` gives `("1", "01")`.
fn round_to_cents(value: f64) -> (String, String) {
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let to_string = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (to_string(&digits[..split]), to_string(&digits[split..]))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

/// Shortest plain representation of a number: `2`, `1.5`
pub fn plain_number(value: f64) -> String {
    if value == 0.0 {
        // no "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Weight with three decimals, `-` when unknown or zero
pub fn weight(value: Option<f64>) -> String {
    match value {
        Some(kg) if kg != 0.0 && !kg.is_nan() => format!("{:.3}", kg),
        _ => "-".to_string(),
    }
}
