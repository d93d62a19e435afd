use crate::{
    error::ErrorTree,
    node::{ValidateNode, VisitableNode},
};

///
/// Event
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    Enter,
    Exit,
}

///
/// Visitor
///

pub trait Visitor {
    fn visit<N: VisitableNode + ?Sized>(&mut self, node: &N, event: Event);

    fn push(&mut self, _: &str) {}

    fn pop(&mut self) {}
}

///
/// ValidateVisitor
///
/// Runs `ValidateNode::validate` on every node and files the errors under
/// the route of the node that raised them.
///

#[derive(Debug, Default)]
pub struct ValidateVisitor {
    pub errors: ErrorTree,
    route: Vec<String>,
}

impl ValidateVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn current_route(&self) -> String {
        self.route
            .iter()
            .filter(|segment| !segment.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Visitor for ValidateVisitor {
    fn visit<N: VisitableNode + ?Sized>(&mut self, node: &N, event: Event) {
        if event == Event::Enter
            && let Err(errs) = ValidateNode::validate(node)
        {
            let route = self.current_route();
            self.errors.merge_for(&route, errs);
        }
    }

    fn push(&mut self, segment: &str) {
        self.route.push(segment.to_string());
    }

    fn pop(&mut self) {
        self.route.pop();
    }
}
