/// Renames an IRI into a token that can be used as the name of an SMT-LIB constant.
///
/// The scheme (`http://` or `https://`) and a leading `www.` are stripped and every character
/// outside of `[A-Za-z0-9_]` is replaced with `_`. The renaming is deterministic but not injective
/// (`http://a.b` and `https://a/b` share a token), the [TermEncoder](crate::TermEncoder)
/// disambiguates such collisions.
pub fn rename_iri(iri: &str) -> String {
    let stripped = iri
        .strip_prefix("http://")
        .or_else(|| iri.strip_prefix("https://"))
        .unwrap_or(iri);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);

    let renamed = sanitize(stripped);
    if renamed.is_empty() {
        return "iri".to_owned();
    }
    renamed
}

/// Replaces every character that is not allowed in a constant name with `_`.
pub(crate) fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
