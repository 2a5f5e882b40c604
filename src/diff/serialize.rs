// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonicalization of annotation snapshots for diffing.
//!
//! Each top-level content block's nested `content` subtree is replaced by its
//! serialized string form, so the structural differ compares subtrees as
//! opaque scalars. Serialization follows struct declaration order, which makes
//! equal subtrees serialize identically regardless of how they were built.

use serde_json::Value;

use crate::model::Annotation;

/// Returns structurally identical values for the given annotations, with
/// every block's `content` subtree stringified.
pub fn canonicalize(annotations: &[Annotation]) -> Vec<Value> {
    annotations.iter().map(annotation_value).collect()
}

fn annotation_value(annotation: &Annotation) -> Value {
    let mut value = serde_json::to_value(annotation).expect("annotation serializes to json");
    if let Some(Value::Array(blocks)) = value.get_mut("content") {
        for block in blocks {
            stringify_block_content(block);
        }
    }
    value
}

fn stringify_block_content(block: &mut Value) {
    let Value::Object(fields) = block else {
        return;
    };
    // A block without content (text leaves, rules, breaks) stays without one.
    let Some(content) = fields.get("content") else {
        return;
    };
    let serialized = serde_json::to_string(content).expect("block content serializes to json");
    fields.insert("content".to_owned(), Value::String(serialized));
}
