// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! List reconciliation: maps annotation diffs to scene mutations.
//!
//! One pass per host state change, synchronous and single-writer: the host
//! must not interleave two passes over the same wrapper. The pass diffs the
//! two snapshots, short-circuits to reorder mode when identity keys shifted,
//! and otherwise creates, patches, or tears down item nodes and their badge
//! markers record by record. The returned [`ReconcileResult`] summarizes what
//! happened and tells the host when it has to reinitialize after a wrapper
//! teardown.

use std::fmt;

use serde_json::Value;

use crate::config;
use crate::diff::{diff_annotations, is_reorder, DiffRecord, DiffStatus};
use crate::model::{Annotation, NodeId};
use crate::placement::place_badge;
use crate::query;
use crate::scene::SceneGraph;

pub mod badges;
pub mod content;
pub mod generators;

pub use content::patch_content;

/// Which path a pass took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileMode {
    Patch,
    Reorder,
}

/// Summary of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileResult {
    pub mode: ReconcileMode,
    /// Item nodes created for added annotations.
    pub created: usize,
    /// Item nodes patched (or re-appended, in reorder mode).
    pub updated: usize,
    /// Item nodes removed for deleted annotations.
    pub removed: usize,
    /// Set when the pass removed the wrapper itself; the host must run its
    /// initialization flow again before the next pass.
    pub reinit_required: bool,
}

impl ReconcileResult {
    fn new(mode: ReconcileMode) -> Self {
        Self {
            mode,
            created: 0,
            updated: 0,
            removed: 0,
            reinit_required: false,
        }
    }
}

#[derive(Debug)]
pub enum ReconcileError {
    /// The wrapper frame the pass was asked to reconcile does not exist.
    WrapperNotFound { wrapper: NodeId },
    /// A serialized content subtree could not be parsed back into blocks.
    BlockContent { source: serde_json::Error },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrapperNotFound { wrapper } => {
                write!(f, "annotation wrapper not found (id={wrapper})")
            }
            Self::BlockContent { source } => {
                write!(f, "malformed serialized block content: {source}")
            }
        }
    }
}

impl std::error::Error for ReconcileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WrapperNotFound { .. } => None,
            Self::BlockContent { source } => Some(source),
        }
    }
}

/// Reconciles the scene under `wrapper` from `previous` to `next`.
///
/// Processing order follows the diff order, which follows `next`'s order.
/// Item-level lookup misses are silent no-ops; only a missing wrapper or
/// malformed serialized block content fail the pass.
pub fn reconcile(
    scene: &mut SceneGraph,
    next: &[Annotation],
    previous: &[Annotation],
    wrapper: &NodeId,
) -> Result<ReconcileResult, ReconcileError> {
    if !scene.contains(wrapper) {
        return Err(ReconcileError::WrapperNotFound {
            wrapper: wrapper.clone(),
        });
    }

    let records = diff_annotations(previous, next);

    if is_reorder(&records) {
        return Ok(reorder_items(scene, &records, wrapper));
    }

    let mut result = ReconcileResult::new(ReconcileMode::Patch);
    for (index, record) in records.iter().enumerate() {
        match record.status() {
            DiffStatus::Added => {
                let Some(annotation) = next.get(index) else {
                    continue;
                };
                create_item(scene, wrapper, annotation);
                result.created += 1;
            }
            DiffStatus::Modified => {
                if field_is_true(record, "isDeleted") {
                    delete_item(scene, wrapper, record, &mut result);
                } else {
                    update_item(scene, wrapper, record, next.get(index))?;
                    result.updated += 1;
                }
            }
            DiffStatus::Deleted | DiffStatus::Unchanged => {}
        }
    }
    Ok(result)
}

/// Pure reorder: every record's item node is re-appended to the wrapper in
/// diff order and nothing else is touched; badge indices are refreshed at
/// the end to match the final order.
fn reorder_items(scene: &mut SceneGraph, records: &[DiffRecord], wrapper: &NodeId) -> ReconcileResult {
    let mut result = ReconcileResult::new(ReconcileMode::Reorder);
    for record in records {
        let Some(id) = record.current().get("id").and_then(Value::as_str) else {
            continue;
        };
        let Some(item) = query::find_item_node(scene, wrapper, id) else {
            continue;
        };
        if scene.append_child(wrapper, &item) {
            result.updated += 1;
        }
    }
    badges::refresh_badge_indexes(scene, wrapper);
    result
}

fn create_item(scene: &mut SceneGraph, wrapper: &NodeId, annotation: &Annotation) {
    let index = query::item_nodes(scene, wrapper).len() + 1;
    let item = generators::generate_item_node(scene, annotation, index);
    scene.append_child(wrapper, &item);

    let badge = generators::generate_badge_node(scene, index, &annotation.id);
    let position = place_badge(scene, wrapper, &badge);
    if let Some(node) = scene.node_mut(&badge) {
        node.set_x(position.x());
        node.set_y(position.y());
    }
    scene.append_page_child(&badge);
}

fn delete_item(
    scene: &mut SceneGraph,
    wrapper: &NodeId,
    record: &DiffRecord,
    result: &mut ReconcileResult,
) {
    let Some(annotation_id) = record.field_str("id").map(str::to_owned) else {
        return;
    };

    if let Some(item) = query::find_item_node(scene, wrapper, &annotation_id) {
        scene.remove(&item);
        result.removed += 1;
    }

    if query::item_nodes(scene, wrapper).is_empty() {
        scene.remove(wrapper);
        result.reinit_required = true;
    }

    for badge in query::badge_nodes_for(scene, &annotation_id) {
        scene.remove(&badge);
    }

    if scene.contains(wrapper) {
        badges::refresh_badge_indexes(scene, wrapper);
    }
}

fn update_item(
    scene: &mut SceneGraph,
    wrapper: &NodeId,
    record: &DiffRecord,
    annotation: Option<&Annotation>,
) -> Result<(), ReconcileError> {
    // Modified items are still named after their previous id.
    let Some(original_id) = record
        .field("id")
        .and_then(|field| field.original().as_str())
        .map(str::to_owned)
    else {
        return Ok(());
    };
    let Some(item) = query::find_item_node(scene, wrapper, &original_id) else {
        return Ok(());
    };

    // Persist the plain updated record (without diff bookkeeping).
    if let Some(annotation) = annotation {
        let value = serde_json::to_value(annotation).expect("annotation serializes to json");
        scene.set_plugin_data(&item, config::ITEM_DATA_KEY, value);
    }

    let mut applied = 0;
    for (name, field) in record.fields() {
        if field.changes() == 0 {
            continue;
        }

        match name.as_str() {
            "title" => {
                let title = field.current().as_str().unwrap_or_default().to_owned();
                set_header_title(scene, &item, &title);
            }
            "content" => {
                patch_content(scene, field, &item)?;
            }
            "colorThemeId" => {
                let current_id = record
                    .field_str("id")
                    .unwrap_or(&original_id)
                    .to_owned();
                let theme = field.current().as_str().unwrap_or_default().to_owned();
                badges::update_badge_color(scene, &current_id, &theme);
            }
            // Other fields (id, isDeleted, ...) have no visual handler but
            // still count toward the stop counter.
            _ => {}
        }

        applied += 1;
        if applied == record.changes() {
            break;
        }
    }
    Ok(())
}

fn set_header_title(scene: &mut SceneGraph, item: &NodeId, title: &str) {
    let Some(text) = scene.find_descendant(item, |node| node.name() == config::HEADER_TEXT_NAME)
    else {
        return;
    };
    toggle_text_placeholder(scene, &text, title, config::TITLE_PLACEHOLDER);
}

/// Writes `value` into a text node, substituting the placeholder (in the
/// muted fill) when the value is blank.
pub(crate) fn toggle_text_placeholder(
    scene: &mut SceneGraph,
    text: &NodeId,
    value: &str,
    placeholder: &str,
) {
    let Some(node) = scene.node_mut(text) else {
        return;
    };
    if value.trim().is_empty() {
        node.set_characters(placeholder);
        node.set_fill(Some(config::PLACEHOLDER_FILL));
    } else {
        node.set_characters(value);
        node.set_fill(Some(config::TEXT_FILL));
    }
}

fn field_is_true(record: &DiffRecord, name: &str) -> bool {
    record
        .field(name)
        .is_some_and(|field| field.current() == &Value::Bool(true))
}
