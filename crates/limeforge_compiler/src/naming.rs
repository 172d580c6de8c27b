//! Identifier derivation rules.
//!
//! Everything that turns a display name or class name into a generated-code
//! identifier lives here, so the (deliberately narrow) sanitization policy
//! is stated exactly once.

/// Replaces spaces with underscores.
///
/// The policy is intentionally narrow: only ASCII spaces are substituted,
/// other punctuation passes through unescaped. Names containing symbols can
/// therefore produce invalid identifiers; widening the policy would change
/// every generated identifier, so it stays as-is until decided upstream.
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.replace(' ', "_")
}

/// Produces the canonical identifier for a display name.
///
/// Canonicalization is a stable fixed point: a name that is already
/// canonical (carries the prefix and contains no spaces) passes through
/// unchanged, so applying a rename pass twice equals applying it once.
#[must_use]
pub fn canonical(prefix: &str, name: &str) -> String {
    if name.starts_with(prefix) && !name.contains(' ') {
        name.to_string()
    } else {
        format!("{prefix}{}", sanitize(name))
    }
}

/// Derives the IR collection field name for a child class.
///
/// CamelCase becomes lower-cased, underscore-separated, pluralized:
/// `GameObject` contributes a `game_objects` field.
#[must_use]
pub fn collection_field_name(class: &str) -> String {
    let mut out = String::with_capacity(class.len() + 2);
    for c in class.chars() {
        if c.is_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out.push('s');
    out
}

/// Derives the generated symbolic constant for a declared event.
#[must_use]
pub fn event_constant(event: &str) -> String {
    format!("project.EVENT_{}", sanitize(event).to_uppercase())
}
