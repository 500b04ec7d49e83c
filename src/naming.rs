//! Display forms of icon identifiers.
//!
//! Catalog identifiers are kebab-case (`arrow-up`, `trash-2`). Generated
//! bindings name each icon by a PascalCase function (`ArrowUp`) and an
//! `Icon`-prefixed constant (`IconArrowUp`).

/// Convert a kebab-case icon name to a PascalCase identifier.
///
/// Empty segments are dropped. A result that would not start with an ASCII
/// letter gets an `Icon` prefix so it stays a valid identifier.
pub fn function_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for part in name.split('-') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    if out.chars().next().is_some_and(|c| !c.is_ascii_alphabetic()) {
        out.insert_str(0, "Icon");
    }
    out
}

/// Name of the constant holding an icon's identifier.
pub fn constant_name(name: &str) -> String {
    format!("Icon{}", function_name(name))
}
