mod helper;
mod imp;
mod node;

use darling::{FromMeta, ast::NestedMeta};
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{DeriveInput, parse_macro_input};

///
/// Prelude
///

mod prelude {
    pub use crate::{helper::*, node::*};
    pub use darling::{Error as DarlingError, FromMeta};
    pub use icytrack_schema::{MAX_ENTITY_NAME_LEN, types::TrackEvent};
    pub use proc_macro2::TokenStream;
    pub use quote::{ToTokens, format_ident, quote};
    pub use syn::{Ident, LitStr, Path};
}

use crate::node::{Def, Entity, ValidateNode};

/// Declare a domain-model type, optionally with a change-tracking declaration.
///
/// ```ignore
/// #[entity(track(field = "StatusRule", message = "ChangedMessage", on = "Update"))]
/// pub struct Order {
///     pub status: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn entity(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    let args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(args) => args,
        Err(e) => return darling::Error::from(e).write_errors().into(),
    };

    let def = Def::new(&item);

    let mut node = match Entity::from_list(&args) {
        Ok(node) => node,
        Err(e) => return e.write_errors().into(),
    };
    node.def = def;
    node.item = Some(item);

    // Phase 1: fatal errors
    let fatal = node.fatal_errors();
    if !fatal.is_empty() {
        let errors = fatal.into_iter().map(|e| e.to_compile_error());

        return quote::quote!(#(#errors)*).into();
    }

    // Phase 2: argument validation
    if let Err(e) = node.validate() {
        return e.write_errors().into();
    }

    node.to_token_stream().into()
}
