use crate::prelude::*;
use convert_case::{Case, Casing};

///
/// HasDef
///

pub trait HasDef {
    fn def(&self) -> &Def;
}

///
/// ValidateNode
///
/// Runs input validation for macro arguments before code generation.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), DarlingError>;

    /// Fatal validation errors that must short-circuit macro expansion.
    fn fatal_errors(&self) -> Vec<syn::Error> {
        Vec::new()
    }
}

///
/// HasSchema
///
/// Anything that can emit a schema constant plus its startup registration.
///

pub trait HasSchema: HasSchemaPart + HasDef {
    /// The kind of schema node this represents.
    fn schema_node_kind() -> SchemaNodeKind;

    /// The uppercase snake-case constant name used for the schema node.
    fn schema_const(&self) -> Ident {
        let ident_s = self.def().const_base();
        format_ident!("{ident_s}_CONST")
    }

    /// Emits the full schema constant + registration constructor.
    fn schema_tokens(&self) -> TokenStream {
        let schema_expr = self.schema_part();
        if schema_expr.is_empty() {
            return quote!();
        }

        let const_var = self.schema_const();
        let kind = Self::schema_node_kind();

        quote! {
            const #const_var: ::icytrack::schema::node::#kind = #schema_expr;

            #[cfg(not(target_arch = "wasm32"))]
            #[::icytrack::__reexports::ctor::ctor(unsafe, anonymous, crate_path = ::icytrack::__reexports::ctor)]
            fn __ctor() {
                ::icytrack::schema::build::schema_write().insert_node(
                    ::icytrack::schema::node::SchemaNode::#kind(#const_var)
                );
            }
        }
    }
}

#[derive(Debug)]
pub enum SchemaNodeKind {
    Entity,
}

impl ToTokens for SchemaNodeKind {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        format_ident!("{self:?}").to_tokens(tokens);
    }
}

///
/// HasSchemaPart
///
/// Low-level helper for schema fragments.
///

pub trait HasSchemaPart {
    fn schema_part(&self) -> TokenStream {
        quote!()
    }
}

///
/// HasRuntimePart
///
/// Emits the `'static` runtime model read by engines.
///

pub trait HasRuntimePart {
    fn runtime_part(&self) -> TokenStream;
}

/// Upper snake-case form of an identifier, used for generated constant names.
pub fn upper_snake(ident: &Ident) -> String {
    ident.to_string().to_case(Case::Snake).to_uppercase()
}
