use std::collections::HashMap;

use once_cell::sync::Lazy;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Expr, Macro, Token};

/// Format-like macros and the argument position of their template literal.
/// The template is the interpolated string's fixed-text part and must survive
/// both rewrite passes untouched; the remaining arguments are ordinary
/// expressions.
static FORMAT_MACROS: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    HashMap::from([
        ("format", 0),
        ("format_args", 0),
        ("print", 0),
        ("println", 0),
        ("eprint", 0),
        ("eprintln", 0),
        ("panic", 0),
        ("todo", 0),
        ("unimplemented", 0),
        ("unreachable", 0),
        ("write", 1),
        ("writeln", 1),
        ("assert", 1),
        ("debug_assert", 1),
        ("assert_eq", 2),
        ("assert_ne", 2),
        ("debug_assert_eq", 2),
        ("debug_assert_ne", 2),
    ])
});

/// Returns the template argument index when `mac` is a known format-like
/// macro. Unknown macros keep their token stream opaque; rewriting arbitrary
/// macro tokens cannot be guaranteed sound.
pub fn template_position(mac: &Macro) -> Option<usize> {
    let last = mac.path.segments.last()?;
    FORMAT_MACROS.get(last.ident.to_string().as_str()).copied()
}

pub fn parse_args(mac: &Macro) -> Option<Punctuated<Expr, Token![,]>> {
    mac.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated)
        .ok()
}

pub fn rebuild_args(mac: &mut Macro, args: &Punctuated<Expr, Token![,]>) {
    mac.tokens = quote!(#args);
}
