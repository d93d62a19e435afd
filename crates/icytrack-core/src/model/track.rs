use crate::traits::{FieldRule, MessageRule};
use icytrack_schema::node::Track;
use serde::Serialize;

pub use icytrack_schema::types::{LifecycleEvent, TrackEvent};

///
/// TrackField
///
/// Opaque reference to a field-tracking rule. Only the rule's path is kept;
/// the engine that owns the rule type knows what it watches.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrackField {
    path: &'static str,
}

impl TrackField {
    #[must_use]
    pub const fn of<R: FieldRule>() -> Self {
        Self { path: R::PATH }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        self.path
    }
}

///
/// TrackMessage
///
/// Opaque reference to a message-generation rule, used for both summary
/// messages and body contents.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrackMessage {
    path: &'static str,
}

impl TrackMessage {
    #[must_use]
    pub const fn of<R: MessageRule>() -> Self {
        Self { path: R::PATH }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        self.path
    }
}

///
/// TrackModel
/// Macro-generated runtime declaration for one entity type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TrackModel {
    /// Field rules to diff, in declaration order.
    pub fields: &'static [TrackField],
    /// Rules producing short change-summary text.
    pub messages: &'static [TrackMessage],
    /// Rules producing long-form change-body text.
    pub contents: &'static [TrackMessage],
    /// Auto-subscribe interested parties to future changes.
    pub subscribe: bool,
    /// Track attachment additions and removals.
    pub files: bool,
    /// Lifecycle event that triggers evaluation.
    pub on: TrackEvent,
}

impl TrackModel {
    pub const DEFAULT: Self = Self::new();

    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: &[],
            messages: &[],
            contents: &[],
            subscribe: false,
            files: false,
            on: TrackEvent::Always,
        }
    }

    #[must_use]
    pub const fn with_fields(mut self, fields: &'static [TrackField]) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub const fn with_messages(mut self, messages: &'static [TrackMessage]) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub const fn with_contents(mut self, contents: &'static [TrackMessage]) -> Self {
        self.contents = contents;
        self
    }

    #[must_use]
    pub const fn with_subscribe(mut self, subscribe: bool) -> Self {
        self.subscribe = subscribe;
        self
    }

    #[must_use]
    pub const fn with_files(mut self, files: bool) -> Self {
        self.files = files;
        self
    }

    #[must_use]
    pub const fn with_on(mut self, on: TrackEvent) -> Self {
        self.on = on;
        self
    }

    #[must_use]
    pub const fn fires_on(&self, event: LifecycleEvent) -> bool {
        self.on.fires_on(event)
    }

    /// No rules of any kind and no attachment tracking.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.fields.is_empty() && self.messages.is_empty() && self.contents.is_empty() && !self.files
    }

    /// True when `track` describes the same declaration as this model.
    #[must_use]
    pub fn agrees_with(&self, track: &Track) -> bool {
        let fields = self.fields.iter().map(|r| r.path());
        let messages = self.messages.iter().map(|r| r.path());
        let contents = self.contents.iter().map(|r| r.path());

        fields.eq(track.fields.iter().copied())
            && messages.eq(track.messages.iter().copied())
            && contents.eq(track.contents.iter().copied())
            && self.subscribe == track.subscribe
            && self.files == track.files
            && self.on == track.on
    }
}

impl Default for TrackModel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

///
/// TESTS
///
