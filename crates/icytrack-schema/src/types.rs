use crate::prelude::*;
use darling::FromMeta;
use derive_more::Display;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

///
/// TrackEvent
///
/// Lifecycle event on which a track declaration is evaluated.
/// `Always` covers every persistence event.
///

#[derive(
    CandidType,
    Clone,
    Copy,
    Default,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[remain::sorted]
pub enum TrackEvent {
    #[default]
    Always,
    Create,
    Update,
}

impl TrackEvent {
    pub const ALL: [Self; 3] = [Self::Always, Self::Create, Self::Update];

    #[must_use]
    pub const fn fires_on(self, event: LifecycleEvent) -> bool {
        match self {
            Self::Always => true,
            Self::Create => matches!(event, LifecycleEvent::Create),
            Self::Update => matches!(event, LifecycleEvent::Update),
        }
    }
}

impl FromMeta for TrackEvent {
    // Variant names match exactly, as in the serde form.
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        Self::ALL
            .into_iter()
            .find(|event| event.to_string() == s)
            .ok_or_else(|| darling::Error::unknown_value(s))
    }
}

impl ToTokens for TrackEvent {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{self}");

        tokens.extend(quote!(::icytrack::schema::types::TrackEvent::#ident));
    }
}

///
/// LifecycleEvent
///
/// A concrete persistence event raised by the engine.
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum LifecycleEvent {
    Create,
    Update,
}
