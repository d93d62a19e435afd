use crate::prelude::*;

///
/// Def
///
/// Identity of a macro-declared type: where it lives and what it is called.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Def {
    pub module_path: &'static str,
    pub ident: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<&'static str>,
}

impl Def {
    /// Fully-qualified path, matching `<T as Path>::PATH` for the same type.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.module_path, self.ident)
    }
}

impl ValidateNode for Def {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.ident.is_empty() {
            err!(errs, "ident is empty");
        }

        errs.result()
    }
}

impl VisitableNode for Def {}
