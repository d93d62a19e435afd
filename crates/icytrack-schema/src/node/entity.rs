use crate::{MAX_ENTITY_NAME_LEN, prelude::*};
use std::any::Any;

///
/// Entity
///
/// A domain-model type and its optional change-tracking declaration.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Entity {
    pub def: Def,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,

    /// Declared struct fields, in declaration order.
    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub fields: &'static [&'static str],

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<Track>,
}

impl Entity {
    /// Resolve the entity name used for schema identity.
    #[must_use]
    pub fn resolved_name(&self) -> &'static str {
        self.name.unwrap_or(self.def.ident)
    }

    #[must_use]
    pub fn has_field(&self, ident: &str) -> bool {
        self.fields.contains(&ident)
    }
}

impl MacroNode for Entity {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ValidateNode for Entity {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let name = self.resolved_name();

        if name.is_empty() {
            err!(errs, "entity name is empty");
        }
        if name.len() > MAX_ENTITY_NAME_LEN {
            err!(
                errs,
                "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
            );
        }
        if !name.is_ascii() {
            err!(errs, "entity name '{name}' must be ASCII");
        }

        errs.result()
    }
}

impl VisitableNode for Entity {
    fn route_key(&self) -> String {
        self.def.path()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.def.accept(v);
        if let Some(node) = &self.track {
            node.accept(v);
        }
    }
}
