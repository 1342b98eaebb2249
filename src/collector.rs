use std::collections::BTreeSet;

use syn::visit::{self, Visit};

/// Read-only pass that records every project-defined symbol name: free
/// functions, structs, enums, and methods (inherent, trait decl, trait impl).
/// Parameters, locals, fields and variants are deliberately not recorded.
#[derive(Default)]
pub struct NameCollector {
    defined_names: BTreeSet<String>,
}

impl NameCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(mut self, file: &syn::File) -> BTreeSet<String> {
        self.visit_file(file);
        self.defined_names
    }
}

impl<'ast> Visit<'ast> for NameCollector {
    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.defined_names.insert(node.sig.ident.to_string());
        // Keep walking so nested fns inside the body are captured too.
        visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.defined_names.insert(node.sig.ident.to_string());
        visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast syn::TraitItemFn) {
        self.defined_names.insert(node.sig.ident.to_string());
        visit::visit_trait_item_fn(self, node);
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        self.defined_names.insert(node.ident.to_string());
        visit::visit_item_struct(self, node);
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        self.defined_names.insert(node.ident.to_string());
        visit::visit_item_enum(self, node);
    }
}
