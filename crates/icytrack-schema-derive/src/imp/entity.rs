use crate::prelude::*;

///
/// EntityKindTrait
///
/// `Path` and `EntityKind` impls, plus the `'static` runtime declaration
/// when the entity is tracked.
///

pub struct EntityKindTrait {}

impl EntityKindTrait {
    pub fn tokens(node: &Entity) -> TokenStream {
        let ident = node.def.ident();
        let entity_name = node.entity_name();
        let fields = quote_slice(&node.field_names(), to_str_lit);

        let (track_model, track_expr) = match &node.track {
            Some(track) => {
                let track_const = node.track_const();
                let model = track.runtime_part();

                (
                    quote! {
                        #[doc(hidden)]
                        const #track_const: &'static ::icytrack::model::track::TrackModel = &#model;
                    },
                    quote!(Some(#track_const)),
                )
            }
            None => (quote!(), quote!(None)),
        };

        let mut tokens = quote! {
            impl ::icytrack::traits::Path for #ident {
                const PATH: &'static str = concat!(module_path!(), "::", stringify!(#ident));
            }

            #track_model

            impl ::icytrack::traits::EntityKind for #ident {
                const ENTITY_NAME: &'static str = #entity_name;
                const FIELDS: &'static [&'static str] = #fields;
                const TRACK: Option<&'static ::icytrack::model::track::TrackModel> = #track_expr;
            }
        };

        // The runtime model and the registered schema node must agree.
        if node.track.is_some() {
            let test_mod = format_ident!("__track_model_test_{ident}");
            let schema_const = node.schema_const();

            tokens.extend(quote! {
                #[cfg(test)]
                mod #test_mod {
                    use super::*;

                    #[test]
                    fn track_model_consistency() {
                        let model = <#ident as ::icytrack::traits::EntityKind>::TRACK
                            .expect("tracked entity must expose its declaration");
                        let track = #schema_const
                            .track
                            .expect("tracked entity must register its declaration");

                        assert!(model.agrees_with(&track));
                    }
                }
            });
        }

        tokens
    }
}
