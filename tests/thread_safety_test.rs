//! Tests for sharing rules, field bindings and registries across threads.

use fieldcheck::{
    field_of, rule, rules, validate, validate_object, validate_objects, Accessor, FieldRules,
    Rule, RuleRegistry, Value,
};
use std::sync::Arc;
use std::thread;

struct Order {
    id: u32,
    quantity: i64,
    sku: String,
}

fn order_rules() -> Vec<FieldRules<Order>> {
    vec![
        field_of(
            Accessor::new("quantity", |o: &Order| o.quantity),
            rules![rule::required(), rule::min(1), rule::max(100)],
        ),
        field_of(
            Accessor::new("sku", |o: &Order| o.sku.clone()),
            rules![rule::required(), rule::length(6, 6)],
        ),
    ]
}

#[test]
fn test_shared_chain_across_threads() {
    let chain: Arc<Vec<Rule>> = Arc::new(rules![rule::required(), rule::length(2, 4)]);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let chain = Arc::clone(&chain);
            thread::spawn(move || {
                let value = Value::from("x".repeat(i));
                let failed = validate(&value, &chain).unwrap().is_some();
                assert_eq!(failed, !(2..=4).contains(&i));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_shared_field_rules_see_their_own_target() {
    let fields = Arc::new(order_rules());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let fields = Arc::clone(&fields);
            thread::spawn(move || {
                let order = Order {
                    id: i,
                    quantity: if i % 2 == 0 { 5 } else { 500 },
                    sku: "ABC123".into(),
                };
                let result = validate_object(&order, fields.iter()).unwrap();
                assert_eq!(result.is_some(), order.id % 2 == 1);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_validate_objects_in_parallel() {
    let orders: Vec<Order> = (0..200)
        .map(|i| Order {
            id: i,
            quantity: i64::from(i % 120),
            sku: if i % 7 == 0 { "bad".into() } else { "ABC123".into() },
        })
        .collect();

    let results = validate_objects(&orders, &order_rules());
    assert_eq!(results.len(), orders.len());

    for (order, result) in orders.iter().zip(results) {
        let errors = result.unwrap();
        let bad_quantity = order.quantity == 0 || order.quantity > 100;
        let bad_sku = order.id % 7 == 0;
        match errors {
            None => assert!(!bad_quantity && !bad_sku, "order {} should fail", order.id),
            Some(errors) => {
                assert_eq!(errors.get("quantity").is_some(), bad_quantity);
                assert_eq!(errors.get("sku").is_some(), bad_sku);
            }
        }
    }
}

#[test]
fn test_concurrent_registry_access() {
    let registry = Arc::new(RuleRegistry::new());
    registry
        .register("Sku", rules![rule::required(), rule::length(6, 6)])
        .unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let name = format!("Chain{}", i);
                registry.register(name.clone(), rules![rule::min(i)]).unwrap();
                assert!(registry.get(&name).is_some());

                let sku = registry.validate("Sku", &Value::from("ABC123")).unwrap();
                assert!(sku.is_none());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.names().len(), 11);
}
