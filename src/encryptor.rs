use std::collections::HashMap;

use proc_macro2::Literal;
use syn::visit_mut::{self, VisitMut};
use syn::{Expr, ExprLit, Ident, Lit};

use crate::template;

/// Name of the decode function the preamble synthesizer emits. The leading
/// double underscore keeps it clear of generated `_xxxx` identifiers and of
/// anything the rename map could produce.
pub const DECODER_FN: &str = "__obf_decode";

/// Replaces plain string literals in one file with indexed lookups into a
/// per-file table of hex-encoded values. The table is deduplicated by encoded
/// content, so repeated literals share one index.
///
/// Template literals of format-like macros are skipped; their expression
/// arguments are visited normally and may contribute entries of their own.
/// A depth counter (not a flag) tracks template nesting so an interpolation
/// embedded in another interpolation's argument behaves correctly.
pub struct StringEncryptor {
    table: Vec<String>,
    index: HashMap<String, usize>,
    template_depth: usize,
}

impl StringEncryptor {
    pub fn new() -> Self {
        Self {
            table: Vec::new(),
            index: HashMap::new(),
            template_depth: 0,
        }
    }

    pub fn apply(&mut self, file: &mut syn::File) {
        self.visit_file_mut(file);
    }

    pub fn table(&self) -> &[String] {
        &self.table
    }

    pub fn into_table(self) -> Vec<String> {
        self.table
    }

    fn intern(&mut self, value: &str) -> usize {
        let encoded = hex::encode(value.as_bytes());
        if let Some(&idx) = self.index.get(&encoded) {
            return idx;
        }
        let idx = self.table.len();
        self.table.push(encoded.clone());
        self.index.insert(encoded, idx);
        idx
    }
}

impl Default for StringEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitMut for StringEncryptor {
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        if self.template_depth == 0 {
            if let Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = expr
            {
                let idx = self.intern(&lit_str.value());
                let decoder = Ident::new(DECODER_FN, lit_str.span());
                let idx_lit = Literal::usize_unsuffixed(idx);
                *expr = syn::parse_quote!(#decoder(#idx_lit));
                return;
            }
        }
        visit_mut::visit_expr_mut(self, expr);
    }

    fn visit_macro_mut(&mut self, mac: &mut syn::Macro) {
        if let Some(template_idx) = template::template_position(mac) {
            if let Some(mut args) = template::parse_args(mac) {
                for (i, arg) in args.iter_mut().enumerate() {
                    if i == template_idx {
                        self.template_depth += 1;
                        self.visit_expr_mut(arg);
                        self.template_depth -= 1;
                    } else {
                        self.visit_expr_mut(arg);
                    }
                }
                template::rebuild_args(mac, &args);
            }
        }
    }

    // Const and static initializers must stay const-evaluable; a runtime
    // decode call there would not be. Their literals keep their plain form.
    fn visit_item_const_mut(&mut self, _node: &mut syn::ItemConst) {}

    fn visit_item_static_mut(&mut self, _node: &mut syn::ItemStatic) {}

    fn visit_impl_item_const_mut(&mut self, _node: &mut syn::ImplItemConst) {}

    fn visit_trait_item_const_mut(&mut self, _node: &mut syn::TraitItemConst) {}

    // Doc strings and other attribute values are not expressions at runtime.
    fn visit_attribute_mut(&mut self, _attr: &mut syn::Attribute) {}
}
