use crate::prelude::*;
use syn::{Attribute, DeriveInput, Expr, ExprLit, Lit, Meta};

///
/// Def
///
/// Identity of the annotated item plus its doc comments.
///

#[derive(Debug)]
pub struct Def {
    pub ident: Ident,
    pub comments: Option<String>,
}

impl Def {
    pub fn new(item: &DeriveInput) -> Self {
        Self {
            ident: item.ident.clone(),
            comments: doc_comments(&item.attrs),
        }
    }

    pub fn ident(&self) -> Ident {
        self.ident.clone()
    }

    /// Base for generated constant names, e.g. `SALES_ORDER`.
    pub fn const_base(&self) -> String {
        upper_snake(&self.ident)
    }
}

impl Default for Def {
    fn default() -> Self {
        Self {
            ident: format_ident!("Unnamed"),
            comments: None,
        }
    }
}

impl HasSchemaPart for Def {
    fn schema_part(&self) -> TokenStream {
        let ident = to_str_lit(&self.ident.to_string());
        let comments = quote_option(self.comments.as_ref(), to_str_lit);

        quote! {
            ::icytrack::schema::node::Def {
                module_path: module_path!(),
                ident: #ident,
                comments: #comments,
            }
        }
    }
}

// Join `///` lines into one string, one line per attribute.
fn doc_comments(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    if lines.iter().all(String::is_empty) {
        None
    } else {
        Some(lines.join("\n").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn doc_comments_are_collected() {
        let item: DeriveInput = parse_quote! {
            /// Sales order.
            ///
            /// Tracked on update.
            pub struct SalesOrder;
        };
        let def = Def::new(&item);

        assert_eq!(def.comments.as_deref(), Some("Sales order.\n\nTracked on update."));
        assert_eq!(def.const_base(), "SALES_ORDER");
    }

    #[test]
    fn missing_docs_yield_none() {
        let item: DeriveInput = parse_quote!(pub struct Order;);

        assert!(Def::new(&item).comments.is_none());
    }
}
