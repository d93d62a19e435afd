use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-aware error aggregation. Messages are attached either to the
/// current node or to a named child route, so one validation pass can report
/// every problem in the schema at once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    pub messages: Vec<String>,
    pub children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        let mut tree = Self::new();
        tree.add(message.into());

        tree
    }

    /// Attach a message to this node.
    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    /// Attach a message to a child route.
    pub fn add_for(&mut self, route: &str, message: impl ToString) {
        self.children
            .entry(route.to_string())
            .or_default()
            .add(message);
    }

    /// Merge another tree under a child route; empty routes merge in place.
    pub fn merge_for(&mut self, route: &str, other: Self) {
        if other.is_empty() {
            return;
        }

        if route.is_empty() {
            self.merge(other);
        } else {
            self.children.entry(route.to_string()).or_default().merge(other);
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
        for (route, child) in other.children {
            self.children.entry(route).or_default().merge(child);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in this tree, children included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten to `(route, message)` pairs, routes joined with `.`.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.to_string(), message.clone()));
        }
        for (route, child) in &self.children {
            let path = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(&path, out);
        }
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (route, message)) in self.flatten().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

impl From<String> for ErrorTree {
    fn from(message: String) -> Self {
        Self::from_message(message)
    }
}

impl From<&str> for ErrorTree {
    fn from(message: &str) -> Self {
        Self::from_message(message)
    }
}

/// Format a message and add it to an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_message_accepts_owned_and_borrowed() {
        let owned = ErrorTree::from_message(String::from("entity name is empty"));
        let borrowed = ErrorTree::from_message("entity name is empty");

        assert_eq!(owned, borrowed);
        assert_eq!(owned.messages, vec!["entity name is empty".to_string()]);
        assert_eq!(owned.to_string(), "entity name is empty");
    }

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn child_routes_flatten_with_dots() {
        let mut inner = ErrorTree::new();
        inner.add_for("track", "duplicate rule");

        let mut root = ErrorTree::new();
        root.add("top");
        root.merge_for("app::Order", inner);

        assert_eq!(root.len(), 2);
        assert_eq!(
            root.flatten(),
            vec![
                (String::new(), "top".to_string()),
                ("app::Order.track".to_string(), "duplicate rule".to_string()),
            ]
        );
        assert_eq!(root.to_string(), "top\napp::Order.track: duplicate rule");
    }

    #[test]
    fn merging_empty_tree_adds_no_route() {
        let mut root = ErrorTree::new();
        root.merge_for("x", ErrorTree::new());

        assert!(root.children.is_empty());
        assert!(root.is_empty());
    }

    #[test]
    fn err_macro_formats_message() {
        let mut errs = ErrorTree::new();
        let name = "Order";
        err!(errs, "duplicate entity name '{name}'");

        assert_eq!(errs.messages, vec!["duplicate entity name 'Order'"]);
    }
}
