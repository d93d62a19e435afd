use crate::{prelude::*, schema::*};
use icytrack::{
    config::ValidateConfig,
    schema::{
        build::{get_schema, get_schema_with},
        node::Entity,
    },
};

#[test]
fn every_fixture_is_registered() {
    let schema = get_schema().expect("fixture schema is valid");

    for path in [
        Customer::PATH,
        Note::PATH,
        Signup::PATH,
        Document::PATH,
        Order::PATH,
    ] {
        assert!(schema.cast_node::<Entity>(path).is_ok(), "{path} not registered");
    }
}

#[test]
fn registered_but_untracked_entity_has_no_track() {
    let schema = get_schema().unwrap();

    assert!(schema.get_node(Customer::PATH).is_some());
    assert!(schema.track_for(Customer::PATH).is_none());
}

#[test]
fn registered_declarations_agree_with_static_models() {
    let schema = get_schema().unwrap();

    let pairs = [
        (Note::PATH, Note::TRACK),
        (Signup::PATH, Signup::TRACK),
        (Document::PATH, Document::TRACK),
        (Order::PATH, Order::TRACK),
    ];

    for (path, model) in pairs {
        let track = schema.track_for(path).expect("tracked entity registered");
        let model = model.expect("tracked entity has a model");

        assert!(model.agrees_with(track), "{path} disagrees");
    }

    assert_eq!(schema.tracked_entities().count(), pairs.len());
}

#[test]
fn registered_entity_carries_identity() {
    let schema = get_schema().unwrap();
    let order = schema.cast_node::<Entity>(Order::PATH).unwrap();

    assert_eq!(order.resolved_name(), "SalesOrder");
    assert_eq!(order.fields, &["status", "total"]);
    assert!(order.has_field("total"));
    assert_eq!(order.def.comments, Some("Order"));
}

#[test]
fn deny_inert_rejects_empty_declarations() {
    let err = get_schema_with(&ValidateConfig { deny_inert: true })
        .map(|_| ())
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains(Note::PATH), "{message}");
    assert!(message.contains(Signup::PATH), "{message}");
    assert!(!message.contains(Document::PATH), "{message}");
    assert!(!message.contains(Order::PATH), "{message}");
}
