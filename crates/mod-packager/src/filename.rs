//! Filename derivation from system names

/// Make a safe filename stem from a system name
///
/// Any character outside {alphanumeric, space, underscore, hyphen} becomes
/// an underscore, then spaces become underscores. Idempotent: sanitizing an
/// already-sanitized name returns it unchanged.
///
/// # Example
/// ```
/// use mod_packager::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Alpha/Beta 7"), "Alpha_Beta_7");
/// assert_eq!(sanitize_filename("Alpha_Beta_7"), "Alpha_Beta_7");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .replace(' ', "_")
}

/// Full `.pas` filename for the system at `index` in a batch
///
/// The numeric disambiguator keeps identically named systems from
/// clobbering each other inside one archive.
pub fn system_filename(name: &str, index: usize) -> String {
    format!("{}_{}.pas", sanitize_filename(name), index + 1)
}
