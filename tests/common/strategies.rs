#![allow(dead_code)]

use super::builders::AttributeBuilder;
use flow_helpers::service::AttributeMetadata;
use proptest::prelude::*;

/// Strategy for option labels
pub fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,31}"
}

/// Strategy for raw (value, label) option lists in arbitrary service order
pub fn option_list_strategy() -> impl Strategy<Value = Vec<(i32, String)>> {
    prop::collection::vec((any::<i32>(), label_strategy()), 0..20)
}

/// Strategy for (value, label, extra) triples used by State and Status options
pub fn extended_option_list_strategy() -> impl Strategy<Value = Vec<(i32, String, i32)>> {
    prop::collection::vec((0i32..100, label_strategy(), 0i32..10), 0..20)
}

/// Strategy for attribute type names that carry no options
pub fn optionless_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("String".to_string()),
        Just("Memo".to_string()),
        Just("Integer".to_string()),
        Just("DateTime".to_string()),
        Just("Lookup".to_string()),
        Just("Money".to_string()),
        "[A-Z][a-zA-Z]{2,15}",
    ]
}

pub fn picklist_strategy() -> impl Strategy<Value = AttributeMetadata> {
    option_list_strategy().prop_map(|options| {
        let borrowed: Vec<(i32, &str)> = options.iter().map(|(v, l)| (*v, l.as_str())).collect();
        AttributeBuilder::new("account", "industrycode").picklist(&borrowed)
    })
}
