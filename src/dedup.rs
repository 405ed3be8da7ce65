//! Opt-in structural deduplication, run after building.
//!
//! Classes whose ordered (field name, type) sequences are equal collapse onto
//! one survivor: the root class when it is part of the group, otherwise the
//! first one registered. References are rewritten and the pass repeats until
//! nothing else merges, since rewriting can make parents identical too.
use std::collections::HashMap;

use crate::ir::{ClassRegistry, Inferred, SchemaNode};

pub fn deduplicate(inferred: Inferred) -> Inferred {
    let Inferred { mut root, mut registry } = inferred;
    let root_class = match &root {
        SchemaNode::ObjectRef(name) => Some(name.clone()),
        _ => None,
    };

    loop {
        let renames = find_duplicates(&registry, root_class.as_deref());
        if renames.is_empty() {
            break;
        }
        tracing::debug!(merged = renames.len(), "collapsing identical classes");
        registry = registry
            .into_iter()
            .filter(|def| !renames.contains_key(&def.qualified_name))
            .map(|mut def| {
                for ty in def.fields.values_mut() {
                    rename_refs(ty, &renames);
                }
                def
            })
            .collect::<ClassRegistry>();
        rename_refs(&mut root, &renames);
    }

    Inferred { root, registry }
}

/// duplicate name → survivor name
fn find_duplicates(registry: &ClassRegistry, root_class: Option<&str>) -> HashMap<String, String> {
    let mut survivors: HashMap<Vec<(&str, &SchemaNode)>, &str> = HashMap::new();
    if let Some(def) = root_class.and_then(|name| registry.get(name)) {
        survivors.insert(def.signature(), def.qualified_name.as_str());
    }

    let mut renames = HashMap::new();
    for def in registry.iter() {
        let survivor = *survivors.entry(def.signature()).or_insert(def.qualified_name.as_str());
        if survivor != def.qualified_name {
            renames.insert(def.qualified_name.clone(), survivor.to_string());
        }
    }
    renames
}

fn rename_refs(ty: &mut SchemaNode, renames: &HashMap<String, String>) {
    match ty {
        SchemaNode::ObjectRef(name) => {
            if let Some(survivor) = renames.get(name) {
                *name = survivor.clone();
            }
        }
        SchemaNode::ListOf(item) => rename_refs(item, renames),
        _ => {}
    }
}
