mod def;
mod entity;
mod track;

pub use self::def::*;
pub use self::entity::*;
pub use self::track::*;

use crate::{
    prelude::*,
    visit::{Event, Visitor},
};
use std::{any::Any, collections::BTreeMap};
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("{0} is an incorrect node type")]
    IncorrectNodeType(String),

    #[error("path not found: {0}")]
    PathNotFound(String),
}

impl From<NodeError> for ErrorTree {
    fn from(err: NodeError) -> Self {
        Self::from_message(err.to_string())
    }
}

///
/// MacroNode
/// Any schema node that can be registered by a macro.
///

pub trait MacroNode: Any {
    fn as_any(&self) -> &dyn Any;
}

///
/// ValidateNode
/// Local structural checks; schema-wide checks live in `validate`.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// VisitableNode
///

pub trait VisitableNode: ValidateNode {
    /// Route segment used to address errors raised on this node.
    fn route_key(&self) -> String {
        String::new()
    }

    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.push(&self.route_key());
        visitor.visit(self, Event::Enter);
        self.drive(visitor);
        visitor.visit(self, Event::Exit);
        visitor.pop();
    }

    fn drive<V: Visitor>(&self, _: &mut V) {}
}

///
/// SchemaNode
///

#[derive(Clone, Debug, Serialize)]
#[remain::sorted]
pub enum SchemaNode {
    Entity(Entity),
}

impl SchemaNode {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Entity(n) => n.def.path(),
        }
    }

    fn get(&self) -> &dyn MacroNode {
        match self {
            Self::Entity(n) => n,
        }
    }
}

impl ValidateNode for SchemaNode {}

impl VisitableNode for SchemaNode {
    fn drive<V: Visitor>(&self, v: &mut V) {
        match self {
            Self::Entity(n) => n.accept(v),
        }
    }
}

///
/// Schema
/// Every registered node, keyed by fully-qualified path.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    nodes: BTreeMap<String, SchemaNode>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    /// Insert a node, returning whatever was registered under the same path.
    pub fn insert_node(&mut self, node: SchemaNode) -> Option<SchemaNode> {
        let path = node.path();
        let prev = self.nodes.insert(path.clone(), node);

        if prev.is_some() {
            tracing::warn!(path = %path, "schema node registered twice; keeping the latest");
        } else {
            tracing::debug!(path = %path, "schema node registered");
        }

        prev
    }

    #[must_use]
    pub fn get_node(&self, path: &str) -> Option<&SchemaNode> {
        self.nodes.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve a node by path and downcast it to `T`.
    pub fn cast_node<T: 'static>(&self, path: &str) -> Result<&T, NodeError> {
        let node = self
            .get_node(path)
            .ok_or_else(|| NodeError::PathNotFound(path.to_string()))?;

        node.get()
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| NodeError::IncorrectNodeType(path.to_string()))
    }

    /// Iterate every node of type `T`, in path order.
    pub fn get_nodes<T: 'static>(&self) -> impl Iterator<Item = (&str, &T)> {
        self.nodes
            .iter()
            .filter_map(|(path, node)| {
                node.get()
                    .as_any()
                    .downcast_ref::<T>()
                    .map(|n| (path.as_str(), n))
            })
    }

    pub fn filter_nodes<'a, T: 'static>(
        &'a self,
        pred: impl Fn(&T) -> bool + 'a,
    ) -> impl Iterator<Item = (&'a str, &'a T)> + 'a {
        self.get_nodes::<T>().filter(move |(_, n)| pred(n))
    }

    /// Declaration attached to the entity at `path`, if the entity exists and is tracked.
    #[must_use]
    pub fn track_for(&self, path: &str) -> Option<&Track> {
        self.cast_node::<Entity>(path).ok()?.track.as_ref()
    }

    /// Every tracked entity, in path order.
    pub fn tracked_entities(&self) -> impl Iterator<Item = (&str, &Entity)> {
        self.filter_nodes::<Entity>(|entity| entity.track.is_some())
    }
}

impl ValidateNode for Schema {}

impl VisitableNode for Schema {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.nodes.values() {
            node.accept(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(module_path: &'static str, ident: &'static str) -> Entity {
        Entity {
            def: Def {
                module_path,
                ident,
                comments: None,
            },
            name: None,
            fields: &["status"],
            track: None,
        }
    }

    #[test]
    fn cast_node_reports_missing_path() {
        let schema = Schema::new();
        let err = schema.cast_node::<Entity>("app::Missing").unwrap_err();

        assert!(matches!(err, NodeError::PathNotFound(path) if path == "app::Missing"));
    }

    #[test]
    fn cast_node_rejects_wrong_type() {
        let mut schema = Schema::new();
        schema.insert_node(SchemaNode::Entity(entity("app", "Order")));

        let err = schema.cast_node::<Track>("app::Order").unwrap_err();
        assert!(matches!(err, NodeError::IncorrectNodeType(_)));
    }

    #[test]
    fn insert_node_returns_previous_registration() {
        let mut schema = Schema::new();

        assert!(schema.insert_node(SchemaNode::Entity(entity("app", "Order"))).is_none());
        assert!(schema.insert_node(SchemaNode::Entity(entity("app", "Order"))).is_some());
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn untracked_entity_has_no_declaration() {
        let mut schema = Schema::new();
        schema.insert_node(SchemaNode::Entity(entity("app", "Order")));

        assert!(schema.cast_node::<Entity>("app::Order").is_ok());
        assert!(schema.track_for("app::Order").is_none());
        assert!(schema.track_for("app::Missing").is_none());
        assert_eq!(schema.tracked_entities().count(), 0);
    }

    #[test]
    fn tracked_entities_filters_declared_types() {
        let mut schema = Schema::new();
        schema.insert_node(SchemaNode::Entity(entity("app", "Order")));
        schema.insert_node(SchemaNode::Entity(Entity {
            track: Some(Track::DEFAULT),
            ..entity("app", "Invoice")
        }));

        let tracked: Vec<_> = schema.tracked_entities().map(|(path, _)| path).collect();
        assert_eq!(tracked, vec!["app::Invoice"]);
        assert_eq!(schema.track_for("app::Invoice"), Some(&Track::DEFAULT));
    }
}
