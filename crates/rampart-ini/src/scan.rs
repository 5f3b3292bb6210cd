//! Pure token scanners.
//!
//! These take an already-extracted token and coerce it to a value. They
//! carry no positional context; the reader wraps their failures into a
//! full [`crate::IniError`] with file and line.

use crate::error::IniErrorKind;

/// Scan a signed integer.
pub fn scan_int(token: &str) -> Result<i32, IniErrorKind> {
    token
        .parse()
        .map_err(|_| IniErrorKind::InvalidData(format!("expected integer, found \"{token}\"")))
}

/// Scan an unsigned integer.
pub fn scan_unsigned(token: &str) -> Result<u32, IniErrorKind> {
    token
        .parse()
        .map_err(|_| IniErrorKind::InvalidData(format!("expected unsigned integer, found \"{token}\"")))
}

/// Scan a real number.
pub fn scan_real(token: &str) -> Result<f32, IniErrorKind> {
    token
        .parse()
        .map_err(|_| IniErrorKind::InvalidData(format!("expected number, found \"{token}\"")))
}

/// Scan a boolean. `Yes`/`No` is the authored convention; `True`/`False`
/// is accepted as well. Case-insensitive.
pub fn scan_bool(token: &str) -> Result<bool, IniErrorKind> {
    if token.eq_ignore_ascii_case("yes") || token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("no") || token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(IniErrorKind::InvalidData(format!(
            "expected Yes or No, found \"{token}\""
        )))
    }
}

/// Scan a percentage authored as `50%` (the `%` has already been consumed
/// as a separator) into a 0.0-based multiplier.
pub fn scan_percent_to_real(token: &str) -> Result<f32, IniErrorKind> {
    Ok(scan_real(token)? / 100.0)
}

/// Resolve a name against an index list, case-insensitive. An empty list
/// is a programming error, not a data error.
pub fn scan_index(token: &str, names: &[&str]) -> Result<u32, IniErrorKind> {
    if names.is_empty() {
        return Err(IniErrorKind::InvalidNameList);
    }
    names
        .iter()
        .position(|name| name.eq_ignore_ascii_case(token))
        .map(|idx| idx as u32)
        .ok_or_else(|| IniErrorKind::InvalidData(format!("unknown name \"{token}\"")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_numbers() {
        assert_eq!(scan_int("-42").unwrap(), -42);
        assert_eq!(scan_unsigned("42").unwrap(), 42);
        assert!((scan_real("2.5").unwrap() - 2.5).abs() < f32::EPSILON);
        assert!(scan_int("2.5").is_err());
        assert!(scan_unsigned("-1").is_err());
        assert!(scan_real("abc").is_err());
    }

    #[test]
    fn bool_accepts_yes_no_and_true_false() {
        assert!(scan_bool("Yes").unwrap());
        assert!(scan_bool("yes").unwrap());
        assert!(!scan_bool("NO").unwrap());
        assert!(scan_bool("TRUE").unwrap());
        assert!(!scan_bool("false").unwrap());
        assert!(scan_bool("maybe").is_err());
    }

    #[test]
    fn percent_divides_by_hundred() {
        assert!((scan_percent_to_real("50").unwrap() - 0.5).abs() < f32::EPSILON);
        assert!((scan_percent_to_real("150").unwrap() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn index_lookup_is_case_insensitive() {
        let names = ["ALPHA", "BETA"];
        assert_eq!(scan_index("beta", &names).unwrap(), 1);
        assert!(matches!(
            scan_index("gamma", &names),
            Err(IniErrorKind::InvalidData(_))
        ));
        assert_eq!(scan_index("x", &[]), Err(IniErrorKind::InvalidNameList));
    }

    #[cfg(test)]
    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unsigned_round_trips(value: u32) {
                prop_assert_eq!(scan_unsigned(&value.to_string()).unwrap(), value);
            }
        }
    }
}
