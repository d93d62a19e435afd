use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

// Quoting helpers

/// Quote an `Option`, applying the transform to the inner value when present.
pub fn quote_option<T, F>(opt: Option<&T>, transform: F) -> TokenStream
where
    F: FnOnce(&T) -> TokenStream,
{
    if let Some(v) = opt {
        let transformed = transform(v);
        quote!(Some(#transformed))
    } else {
        quote!(None)
    }
}

/// Quote a slice by transforming each element and returning a token array.
pub fn quote_slice<T, F>(vec: &[T], transform: F) -> TokenStream
where
    F: Fn(&T) -> TokenStream,
{
    let items: Vec<TokenStream> = vec
        .iter()
        .map(transform)
        .filter(|ts| !ts.is_empty())
        .collect();

    quote! {
        &[#(#items),*]
    }
}

// Transform helpers

/// Pass through a tokenizable value unchanged.
pub fn as_tokens<T: ToTokens>(t: &T) -> TokenStream {
    quote!(#t)
}

/// Convert a string into a string literal token.
pub fn to_str_lit<T: AsRef<str>>(s: &T) -> TokenStream {
    let s = s.as_ref();

    quote!(#s)
}

/// Resolve a `Path` implementor to its associated `PATH` constant.
pub fn to_path<T: ToTokens>(t: &T) -> TokenStream {
    quote! { <#t as ::icytrack::traits::Path>::PATH }
}

/// Reference a field-tracking rule in the runtime model.
pub fn to_track_field<T: ToTokens>(t: &T) -> TokenStream {
    quote! { ::icytrack::model::track::TrackField::of::<#t>() }
}

/// Reference a message-generation rule in the runtime model.
pub fn to_track_message<T: ToTokens>(t: &T) -> TokenStream {
    quote! { ::icytrack::model::track::TrackMessage::of::<#t>() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn quote_option_wraps_present_values() {
        let path: syn::Path = parse_quote!(shop::StatusRule);

        assert_eq!(
            quote_option(Some(&path), as_tokens).to_string(),
            "Some (shop :: StatusRule)"
        );
        assert_eq!(quote_option::<syn::Path, _>(None, as_tokens).to_string(), "None");
    }

    #[test]
    fn quote_slice_keeps_order() {
        let rules: Vec<syn::Path> = vec![parse_quote!(A), parse_quote!(B)];

        assert_eq!(
            quote_slice(&rules, to_path).to_string(),
            "& [< A as :: icytrack :: traits :: Path > :: PATH , < B as :: icytrack :: traits :: Path > :: PATH]"
        );
    }

    #[test]
    fn empty_slice_quotes_empty_array() {
        let rules: Vec<syn::Path> = Vec::new();

        assert_eq!(quote_slice(&rules, to_track_field).to_string(), "& []");
    }
}
