// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Content block patching inside an annotation body.
//!
//! Walks the nested block records in order against the body's children. The
//! running child index mirrors the record index and is pulled back one after
//! each deletion so later operations land on the shifted positions.

use serde_json::{Map, Value};

use crate::config;
use crate::diff::{DiffRecord, DiffStatus};
use crate::model::{BlockType, ContentBlock, NodeId};
use crate::scene::{NodeKind, SceneGraph};

use super::generators::block_to_node;
use super::ReconcileError;

/// Applies a modified `content` field record to the item's body container.
/// Stops after exactly `record.changes()` applied block operations, then
/// recomputes body visibility.
pub fn patch_content(
    scene: &mut SceneGraph,
    record: &DiffRecord,
    item: &NodeId,
) -> Result<(), ReconcileError> {
    let Some(body) = scene.find_child(item, |node| node.name() == config::BODY_NAME) else {
        return Ok(());
    };

    let blocks_amount = record
        .items()
        .iter()
        .filter(|block| block.status() != DiffStatus::Deleted)
        .count();
    let expected_changes = record.changes();
    let mut applied = 0;
    let mut slot: isize = -1;

    for block in record.items() {
        slot += 1;
        if block.changes() == 0 {
            continue;
        }

        match block.status() {
            DiffStatus::Added => {
                let added = safe_added_block(block.current())?;
                let node = block_to_node(scene, &added, blocks_amount);
                scene.insert_child(&body, slot.max(0) as usize, &node);
            }
            DiffStatus::Deleted => {
                if let Some(child) = child_at(scene, &body, slot) {
                    scene.remove(&child);
                }
                slot -= 1;
            }
            DiffStatus::Modified => {
                let modified = safe_modified_block(block)?;
                let node = block_to_node(scene, &modified, blocks_amount);
                if !scene.children(&body).is_empty() {
                    if let Some(child) = child_at(scene, &body, slot) {
                        scene.remove(&child);
                    }
                }
                scene.insert_child(&body, slot.max(0) as usize, &node);
            }
            DiffStatus::Unchanged => {}
        }

        applied += 1;
        if applied == expected_changes {
            break;
        }
    }

    refresh_body_visibility(scene, &body);
    Ok(())
}

/// A body is hidden exactly when it holds a single text child whose trimmed
/// characters are empty (the empty-placeholder state).
pub(crate) fn refresh_body_visibility(scene: &mut SceneGraph, body: &NodeId) {
    let children = scene.children(body);
    let visible = match children {
        [only] => scene
            .node(only)
            .map(|node| match node.kind() {
                NodeKind::Text => !node.characters().trim().is_empty(),
                NodeKind::Frame => true,
            })
            .unwrap_or(true),
        _ => true,
    };
    if let Some(node) = scene.node_mut(body) {
        node.set_visible(visible);
    }
}

fn child_at(scene: &SceneGraph, body: &NodeId, slot: isize) -> Option<NodeId> {
    if slot < 0 {
        return None;
    }
    scene.children(body).get(slot as usize).cloned()
}

/// Rebuilds an added block from its canonicalized value, re-parsing the
/// serialized content subtree and falling back to the default paragraph
/// content when it is absent.
fn safe_added_block(value: &Value) -> Result<ContentBlock, ReconcileError> {
    let mut fields: Map<String, Value> = value.as_object().cloned().unwrap_or_default();
    let content = materialize_content(fields.get("content"))?;
    fields.insert(
        "content".to_owned(),
        serde_json::to_value(&content).expect("content blocks serialize to json"),
    );
    serde_json::from_value(Value::Object(fields))
        .map_err(|source| ReconcileError::BlockContent { source })
}

/// Rebuilds a modified block from its `type` and `content` fields only; any
/// block-level change is treated as a full-block replacement.
fn safe_modified_block(block: &DiffRecord) -> Result<ContentBlock, ReconcileError> {
    let kind = block
        .field("type")
        .map(|field| serde_json::from_value(field.current().clone()))
        .transpose()
        .map_err(|source| ReconcileError::BlockContent { source })?
        .unwrap_or(BlockType::Paragraph);
    let content = materialize_content(block.field("content").map(DiffRecord::current))?;
    Ok(ContentBlock {
        kind,
        content: Some(content),
        attrs: None,
        text: None,
        marks: None,
    })
}

pub(crate) fn materialize_content(
    value: Option<&Value>,
) -> Result<Vec<ContentBlock>, ReconcileError> {
    match value.and_then(Value::as_str) {
        Some(raw) if !raw.is_empty() => {
            serde_json::from_str(raw).map_err(|source| ReconcileError::BlockContent { source })
        }
        _ => Ok(config::default_paragraph_content()),
    }
}
