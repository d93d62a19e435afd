use crate::{prelude::*, schema::*};
use icytrack::export::schema_json;

#[test]
fn schema_exports_as_json() {
    let json = schema_json().expect("fixture schema exports");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let nodes = &value["nodes"];
    let order = &nodes[Order::PATH]["Entity"];

    assert_eq!(order["name"], "SalesOrder");
    assert_eq!(order["track"]["on"], "Update");
    assert_eq!(
        order["track"]["fields"],
        serde_json::json!([TotalRule::PATH, StatusRule::PATH])
    );

    let customer = &nodes[Customer::PATH]["Entity"];
    assert!(customer.get("track").is_none());
}

#[test]
fn start_applies_default_configuration() {
    let config = icytrack::start().expect("fixture schema validates");

    assert!(!config.validate.deny_inert);
}
