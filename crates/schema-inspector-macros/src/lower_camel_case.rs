/// Converts a Rust `snake_case` identifier to GraphQL-style
/// `lowerCamelCase`. Leading underscores are dropped and a raw identifier's
/// `r#` prefix is ignored.
pub(crate) fn lower_camel_case(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut parts = ident.trim_start_matches('_')
        .split('_')
        .filter(|part| !part.is_empty());

    let mut result = parts.next().map(str::to_string).unwrap_or_default();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
