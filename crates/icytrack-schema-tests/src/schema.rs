use crate::prelude::*;

// Rule types are owned by the tracking engine; fixtures only need their paths.
macro_rules! rule {
    ($ident:ident, $kind:ident) => {
        pub struct $ident;

        impl Path for $ident {
            const PATH: &'static str = concat!(module_path!(), "::", stringify!($ident));
        }

        impl $kind for $ident {}
    };
}

rule!(StatusRule, FieldRule);
rule!(TotalRule, FieldRule);
rule!(ChangedMessage, MessageRule);
rule!(ChangedBody, MessageRule);

///
/// Customer
/// No declaration attached.
///

#[entity]
pub struct Customer {
    pub name: String,
}

///
/// Note
/// Declared with every option left at its default.
///

#[entity(track())]
pub struct Note {
    pub text: String,
}

///
/// Signup
///

#[entity(track(on = "Create"))]
pub struct Signup {
    pub email: String,
}

///
/// Document
/// Attachments only.
///

#[entity(track(files))]
pub struct Document {
    pub title: String,
}

///
/// Order
///

#[entity(
    name = "SalesOrder",
    track(
        field = "TotalRule",
        field = "StatusRule",
        message = "ChangedMessage",
        content = "ChangedBody",
        subscribe,
        on = "Update",
    )
)]
pub struct Order {
    pub status: String,
    pub total: u64,
}
