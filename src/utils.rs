use crate::DomainError;

/// Converts a domain name to its ASCII-compatible encoding.
///
/// Internationalized labels are Punycode-encoded. The whole name is
/// lower-cased, ASCII names included, so `Sysgle.SE` becomes `sysgle.se`.
/// A name that is already lower-case ASCII comes back unchanged. A trailing
/// dot is dropped.
///
/// # Errors
/// - `Empty` if the name is empty or only whitespace
/// - `Idna` if the name isn't a valid domain name under UTS 46 with STD3 rules
pub fn to_ascii(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() {
        return Err(DomainError::Empty);
    }

    let ascii = idna::domain_to_ascii_strict(name).map_err(|e| DomainError::Idna {
        domain: name.to_string(),
        reason: e.to_string(),
    })?;
    if ascii != name {
        log::debug!("normalized domain {name:?} to {ascii:?}");
    }

    Ok(ascii)
}
