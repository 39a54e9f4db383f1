//! Quick benchmark to verify directive resolution performance

use std::time::Instant;

use serde_json::json;

use bindery::{
    BindingContext, BindingEntry, BindingMap, BindingRegistry, ClassBindingProvider, MemoryNode,
    ProviderOptions,
};

fn obj(value: serde_json::Value) -> BindingMap {
    value.as_object().cloned().unwrap()
}

fn main() {
    let registry = BindingRegistry::from_entries([
        ("one", BindingEntry::Static(obj(json!({"text": "test"})))),
        ("two", BindingEntry::Static(obj(json!({"visible": true})))),
        (
            "nav",
            BindingEntry::group([(
                "item",
                BindingEntry::Static(obj(json!({"css": {"active": true}}))),
            )]),
        ),
        (
            "greet",
            BindingEntry::callable(|ctx, _invocation| obj(json!({"text": ctx.data()["name"]}))),
        ),
    ]);
    let provider = ClassBindingProvider::new(registry, ProviderOptions::default());
    let ctx = BindingContext::new(json!({"name": "bench"}));

    // Directive strings of varying shape
    let directives = vec![
        "one",
        "one two",
        "nav.item",
        "greet(hello,world)",
        "one two nav.item greet(a,b) missing",
    ];

    println!("Directive Resolution Performance Test");
    println!("=====================================\n");

    for directive in &directives {
        let node = MemoryNode::element().with_attribute("data-class", *directive);
        let iterations = 100_000;
        let start = Instant::now();

        for _ in 0..iterations {
            let _ = provider.get_bindings(&node, &ctx);
        }

        let elapsed = start.elapsed();
        let per_op = elapsed / iterations;

        println!("Directive: {:50}", format!("\"{}\"", directive));
        println!("  Time for {} iterations: {:?}", iterations, elapsed);
        println!("  Per operation: {:?}\n", per_op);
    }
}
