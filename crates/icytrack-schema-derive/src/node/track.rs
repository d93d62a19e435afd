use crate::prelude::*;

///
/// Track
///
/// `track(...)` arguments on an entity. Every key is optional and
/// repeatable keys keep their declaration order.
///

#[derive(Debug, Default, FromMeta)]
pub struct Track {
    #[darling(multiple, rename = "field")]
    pub fields: Vec<Path>,

    #[darling(multiple, rename = "message")]
    pub messages: Vec<Path>,

    #[darling(multiple, rename = "content")]
    pub contents: Vec<Path>,

    #[darling(default)]
    pub subscribe: bool,

    #[darling(default)]
    pub files: bool,

    #[darling(default)]
    pub on: TrackEvent,
}

impl HasSchemaPart for Track {
    fn schema_part(&self) -> TokenStream {
        let fields = quote_slice(&self.fields, to_path);
        let messages = quote_slice(&self.messages, to_path);
        let contents = quote_slice(&self.contents, to_path);
        let subscribe = self.subscribe;
        let files = self.files;
        let on = self.on;

        // quote
        quote! {
            ::icytrack::schema::node::Track {
                fields: #fields,
                messages: #messages,
                contents: #contents,
                subscribe: #subscribe,
                files: #files,
                on: #on,
            }
        }
    }
}

impl HasRuntimePart for Track {
    fn runtime_part(&self) -> TokenStream {
        let fields = quote_slice(&self.fields, to_track_field);
        let messages = quote_slice(&self.messages, to_track_message);
        let contents = quote_slice(&self.contents, to_track_message);
        let subscribe = self.subscribe;
        let files = self.files;
        let on = self.on;

        // quote
        quote! {
            ::icytrack::model::track::TrackModel {
                fields: #fields,
                messages: #messages,
                contents: #contents,
                subscribe: #subscribe,
                files: #files,
                on: #on,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use darling::ast::NestedMeta;

    fn parse(tokens: TokenStream) -> darling::Result<Track> {
        let items = NestedMeta::parse_meta_list(tokens)?;

        Track::from_list(&items)
    }

    #[test]
    fn empty_list_uses_defaults() {
        let track = parse(quote!()).unwrap();

        assert!(track.fields.is_empty());
        assert!(track.messages.is_empty());
        assert!(track.contents.is_empty());
        assert!(!track.subscribe);
        assert!(!track.files);
        assert_eq!(track.on, TrackEvent::Always);
    }

    #[test]
    fn only_on_leaves_other_options_default() {
        let track = parse(quote!(on = "Create")).unwrap();

        assert_eq!(track.on, TrackEvent::Create);
        assert!(track.fields.is_empty() && track.messages.is_empty() && track.contents.is_empty());
        assert!(!track.subscribe && !track.files);
    }

    #[test]
    fn repeated_rules_keep_declaration_order() {
        let track = parse(quote!(
            field = "shop::Total",
            field = "shop::Status",
            message = "shop::Changed",
            content = "shop::Body",
            subscribe,
            files = true,
        ))
        .unwrap();

        let fields: Vec<String> = track
            .fields
            .iter()
            .map(|p| p.to_token_stream().to_string())
            .collect();

        assert_eq!(fields, vec!["shop :: Total", "shop :: Status"]);
        assert_eq!(track.messages.len(), 1);
        assert_eq!(track.contents.len(), 1);
        assert!(track.subscribe);
        assert!(track.files);
    }

    #[test]
    fn unknown_event_is_rejected() {
        assert!(parse(quote!(on = "Delete")).is_err());
    }

    #[test]
    fn event_name_must_match_case() {
        assert!(parse(quote!(on = "create")).is_err());
        assert!(parse(quote!(on = "UPDATE")).is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse(quote!(watch = "shop::Status")).is_err());
    }

    #[test]
    fn runtime_part_references_rules_by_kind() {
        let track = parse(quote!(field = "Status", content = "Body")).unwrap();
        let tokens = track.runtime_part().to_string();

        assert!(tokens.contains("TrackField :: of :: < Status > ()"), "{tokens}");
        assert!(tokens.contains("TrackMessage :: of :: < Body > ()"), "{tokens}");
        assert!(tokens.contains("messages : & []"), "{tokens}");
    }
}
