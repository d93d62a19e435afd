use crate::{imp::EntityKindTrait, prelude::*};
use syn::{Data, DeriveInput, Fields};

///
/// Entity
///

#[derive(Debug, FromMeta)]
pub struct Entity {
    #[darling(default, skip)]
    pub def: Def,

    #[darling(default, skip)]
    pub item: Option<DeriveInput>,

    #[darling(default)]
    pub name: Option<LitStr>,

    #[darling(default)]
    pub track: Option<Track>,
}

impl Entity {
    /// Declared field names, in declaration order. Tuple fields use their index.
    pub fn field_names(&self) -> Vec<String> {
        let Some(DeriveInput {
            data: Data::Struct(data),
            ..
        }) = &self.item
        else {
            return Vec::new();
        };

        match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .filter_map(|f| f.ident.as_ref().map(ToString::to_string))
                .collect(),
            Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len()).map(|i| i.to_string()).collect(),
            Fields::Unit => Vec::new(),
        }
    }

    /// Stable external name; the struct ident unless overridden.
    pub fn entity_name(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(|| self.def.ident.to_string(), LitStr::value)
    }

    /// Name of the generated `'static` runtime declaration.
    pub fn track_const(&self) -> Ident {
        format_ident!("{}_TRACK", self.def.const_base())
    }
}

//
// ──────────────────────────
// TRAIT IMPLEMENTATIONS
// ──────────────────────────
//

impl HasDef for Entity {
    fn def(&self) -> &Def {
        &self.def
    }
}

impl ValidateNode for Entity {
    fn validate(&self) -> Result<(), DarlingError> {
        let Some(name) = &self.name else {
            return Ok(());
        };

        let value = name.value();
        if value.is_empty() {
            return Err(DarlingError::custom("entity name is empty").with_span(name));
        }
        if value.len() > MAX_ENTITY_NAME_LEN {
            return Err(DarlingError::custom(format!(
                "entity name '{value}' exceeds max length {MAX_ENTITY_NAME_LEN}"
            ))
            .with_span(name));
        }
        if !value.is_ascii() {
            return Err(
                DarlingError::custom(format!("entity name '{value}' must be ASCII"))
                    .with_span(name),
            );
        }

        Ok(())
    }

    fn fatal_errors(&self) -> Vec<syn::Error> {
        let mut errors = Vec::new();
        let Some(item) = &self.item else {
            return errors;
        };

        if !matches!(item.data, Data::Struct(_)) {
            errors.push(syn::Error::new_spanned(
                &item.ident,
                "#[entity] can only be applied to structs",
            ));
        }

        if !item.generics.params.is_empty() {
            errors.push(syn::Error::new_spanned(
                &item.generics,
                format!("entity '{}' cannot be generic", item.ident),
            ));
        }

        errors
    }
}

impl HasSchema for Entity {
    fn schema_node_kind() -> SchemaNodeKind {
        SchemaNodeKind::Entity
    }
}

impl HasSchemaPart for Entity {
    fn schema_part(&self) -> TokenStream {
        let def = self.def.schema_part();
        let name = quote_option(self.name.as_ref(), as_tokens);
        let fields = quote_slice(&self.field_names(), to_str_lit);
        let track = quote_option(self.track.as_ref(), Track::schema_part);

        // quote
        quote! {
            ::icytrack::schema::node::Entity {
                def: #def,
                name: #name,
                fields: #fields,
                track: #track,
            }
        }
    }
}

impl ToTokens for Entity {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let item = self.item.as_ref().map(ToTokens::to_token_stream);
        let schema = self.schema_tokens();
        let imp = EntityKindTrait::tokens(self);

        tokens.extend(quote! {
            // MAIN TYPE
            #item

            // SCHEMA CONSTANT
            #schema

            // IMPLEMENTATIONS
            #imp
        });
    }
}
