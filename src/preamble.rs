use proc_macro2::Span;
use quote::quote;
use syn::Ident;

use crate::encryptor::DECODER_FN;

const TABLE_NAME: &str = "__OBF_STRINGS";

/// Builds the items a transformed file must carry once its string table is
/// non-empty: the ordered table of hex-encoded values and a self-contained
/// decode function. The decoder needs no imports, so nothing beyond these two
/// items is emitted. An empty table produces no items at all.
pub fn synthesize(table: &[String]) -> Result<Vec<syn::Item>, syn::Error> {
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let table_ident = Ident::new(TABLE_NAME, Span::call_site());
    let decoder = Ident::new(DECODER_FN, Span::call_site());
    let values = table.iter();
    let tokens = quote! {
        static #table_ident: &[&str] = &[#(#values),*];
        fn #decoder(idx: usize) -> &'static str {
            let encoded = #table_ident[idx];
            let mut bytes = Vec::with_capacity(encoded.len() / 2);
            let mut at = 0;
            while at + 2 <= encoded.len() {
                bytes.push(u8::from_str_radix(&encoded[at..at + 2], 16).unwrap_or(0));
                at += 2;
            }
            match String::from_utf8(bytes) {
                Ok(decoded) => Box::leak(decoded.into_boxed_str()),
                Err(_) => "",
            }
        }
    };
    let file: syn::File = syn::parse2(tokens)?;
    Ok(file.items)
}

/// Prepends preamble items ahead of everything else in the file so every
/// lookup call introduced by the encryptor resolves at its point of use.
pub fn prepend(file: &mut syn::File, items: Vec<syn::Item>) {
    file.items.splice(0..0, items);
}
