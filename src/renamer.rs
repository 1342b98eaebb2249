use syn::visit_mut::{self, VisitMut};
use syn::Ident;

use crate::rename_map::RenameMap;
use crate::template;

/// Applies the project-wide rename map to one syntax tree: definition sites,
/// path references, member accesses, method calls, and use-tree entries.
///
/// The substitution is flat and not scope-aware: any name matching a map key
/// is replaced, including an unrelated field or method that happens to share
/// a renamed symbol's name. That conservatism is intentional; pairing it with
/// the same substitution at binding patterns keeps shadowing locals and their
/// references consistent.
pub struct GlobalRenamer<'a> {
    rename_map: &'a RenameMap,
    substitutions: u64,
}

impl<'a> GlobalRenamer<'a> {
    pub fn new(rename_map: &'a RenameMap) -> Self {
        Self {
            rename_map,
            substitutions: 0,
        }
    }

    pub fn apply(&mut self, file: &mut syn::File) {
        self.visit_file_mut(file);
    }

    pub fn substitutions(&self) -> u64 {
        self.substitutions
    }

    fn substitute(&mut self, ident: &mut Ident) {
        if let Some(replacement) = self.rename_map.get(&ident.to_string()) {
            *ident = Ident::new(replacement, ident.span());
            self.substitutions += 1;
        }
    }
}

impl VisitMut for GlobalRenamer<'_> {
    fn visit_item_fn_mut(&mut self, node: &mut syn::ItemFn) {
        self.substitute(&mut node.sig.ident);
        visit_mut::visit_item_fn_mut(self, node);
    }

    fn visit_impl_item_fn_mut(&mut self, node: &mut syn::ImplItemFn) {
        self.substitute(&mut node.sig.ident);
        visit_mut::visit_impl_item_fn_mut(self, node);
    }

    fn visit_trait_item_fn_mut(&mut self, node: &mut syn::TraitItemFn) {
        self.substitute(&mut node.sig.ident);
        visit_mut::visit_trait_item_fn_mut(self, node);
    }

    fn visit_item_struct_mut(&mut self, node: &mut syn::ItemStruct) {
        self.substitute(&mut node.ident);
        visit_mut::visit_item_struct_mut(self, node);
    }

    fn visit_item_enum_mut(&mut self, node: &mut syn::ItemEnum) {
        self.substitute(&mut node.ident);
        visit_mut::visit_item_enum_mut(self, node);
    }

    fn visit_path_mut(&mut self, path: &mut syn::Path) {
        for segment in path.segments.iter_mut() {
            self.substitute(&mut segment.ident);
        }
        visit_mut::visit_path_mut(self, path);
    }

    fn visit_pat_ident_mut(&mut self, node: &mut syn::PatIdent) {
        self.substitute(&mut node.ident);
        visit_mut::visit_pat_ident_mut(self, node);
    }

    // Shorthand init like `Point { total }` couples a field name to a value
    // path. The field itself is never renamed, so when the value path is
    // about to be, expand the shorthand first to keep the two in sync.
    fn visit_field_value_mut(&mut self, node: &mut syn::FieldValue) {
        if node.colon_token.is_none() {
            if let (syn::Member::Named(ident), syn::Expr::Path(p)) = (&node.member, &node.expr) {
                if p.path.is_ident(ident) && self.rename_map.contains_key(&ident.to_string()) {
                    node.colon_token = Some(Default::default());
                }
            }
        }
        visit_mut::visit_field_value_mut(self, node);
    }

    fn visit_field_pat_mut(&mut self, node: &mut syn::FieldPat) {
        if node.colon_token.is_none() {
            if let (syn::Member::Named(ident), syn::Pat::Ident(p)) = (&node.member, &*node.pat) {
                if p.ident == *ident && self.rename_map.contains_key(&ident.to_string()) {
                    node.colon_token = Some(Default::default());
                }
            }
        }
        visit_mut::visit_field_pat_mut(self, node);
    }

    fn visit_expr_field_mut(&mut self, node: &mut syn::ExprField) {
        if let syn::Member::Named(ident) = &mut node.member {
            self.substitute(ident);
        }
        visit_mut::visit_expr_field_mut(self, node);
    }

    fn visit_expr_method_call_mut(&mut self, node: &mut syn::ExprMethodCall) {
        self.substitute(&mut node.method);
        visit_mut::visit_expr_method_call_mut(self, node);
    }

    fn visit_use_name_mut(&mut self, node: &mut syn::UseName) {
        self.substitute(&mut node.ident);
    }

    fn visit_use_rename_mut(&mut self, node: &mut syn::UseRename) {
        self.substitute(&mut node.ident);
    }

    // Format-like macro arguments are real expressions; re-parse them so
    // identifier references inside interpolations get renamed. Other macros
    // pass through with their tokens intact, and the macro's own path is
    // never renamed.
    fn visit_macro_mut(&mut self, mac: &mut syn::Macro) {
        if template::template_position(mac).is_some() {
            if let Some(mut args) = template::parse_args(mac) {
                for arg in args.iter_mut() {
                    self.visit_expr_mut(arg);
                }
                template::rebuild_args(mac, &args);
            }
        }
    }

    // Attribute contents (doc strings, derive lists) are not program
    // identifiers; leave them alone.
    fn visit_attribute_mut(&mut self, _attr: &mut syn::Attribute) {}
}
