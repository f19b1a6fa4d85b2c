//! Model elements and the values they carry.

prelude! {
    regex::Regex,
}

use std::sync::OnceLock;

pub mod ext_ref;
pub mod feature;
pub mod idx;
pub mod ln_class;
pub mod value;

pub use ext_ref::ExtRef;
pub use feature::Feature;
pub use ln_class::LnClass;
pub use value::{Value, ValueKind};

/// Compiles `pattern` once and caches it in `cell`.
pub(crate) fn cached_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> Res<&'static Regex> {
    if let Some(re) = cell.get() {
        return Ok(re);
    }
    let re = Regex::new(pattern).context(|| format!("failed to compile regex `{pattern}`"))?;
    Ok(cell.get_or_init(|| re))
}

/// True if `s` is a legal SCL name (`tName`-like): a letter, then letters/digits/underscores.
pub fn is_valid_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
