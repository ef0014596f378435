// crates/vapt-intake-core/src/core/validators.rs
// ============================================================================
// Module: VAPT Intake Field Validators
// Description: Total shape predicates over primitive field values.
// Purpose: Decide field validity without parsing or interpreting the value.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Stateless predicates used by the step validator. Every predicate is total
//! over any string input and never panics. The checks are deliberately coarse
//! shape checks: they reject obviously wrong input (letters in an IP range,
//! a nine-digit mobile number) and leave semantic interpretation to humans
//! reading the submission.

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// Returns true when `value` has a permissive `local@domain.tld` shape.
///
/// The local part, the domain, and the final label must each be non-empty,
/// the value must contain exactly one `@`, and no whitespace is allowed
/// anywhere. Empty and whitespace-only values are invalid.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, label)) => !host.is_empty() && !label.is_empty(),
        None => false,
    }
}

/// Returns true when `value` is exactly 10 ASCII digits starting with 6-9.
#[must_use]
pub fn is_valid_mobile(value: &str) -> bool {
    value.len() == 10
        && value.chars().all(|ch| ch.is_ascii_digit())
        && value.starts_with(['6', '7', '8', '9'])
}

/// Returns true when `value` contains only letters and spaces and is not
/// blank after trimming.
#[must_use]
pub fn is_alphabetic_name(value: &str) -> bool {
    !value.trim().is_empty() && value.chars().all(|ch| ch.is_ascii_alphabetic() || ch == ' ')
}

/// Returns true when `value` is exactly 4 ASCII digits.
#[must_use]
pub fn is_valid_device_count(value: &str) -> bool {
    value.len() == 4 && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Returns true when `value` is a plausible IP/CIDR token list.
///
/// This is a coarse shape check: only digits, `.`, `/`, `-`, `,`, and spaces
/// are allowed, and the value must not be blank. It does not parse or
/// range-validate addresses.
#[must_use]
pub fn is_valid_ip_token(value: &str) -> bool {
    !value.trim().is_empty()
        && value.chars().all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '/' | '-' | ',' | ' '))
}
