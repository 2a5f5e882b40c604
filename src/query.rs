// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over annotation nodes in the scene.
//!
//! Item nodes are matched by the id embedded in their name; badge markers by
//! their name prefix plus the annotation id in their plugin data.

use crate::config;
use crate::model::NodeId;
use crate::scene::{Node, SceneGraph};

/// True for badge marker nodes at any level.
pub fn is_badge_node(node: &Node) -> bool {
    node.name().starts_with(config::BADGE_NAME_PREFIX)
}

/// All page-level badge markers, in page order.
pub fn page_badges(scene: &SceneGraph) -> Vec<NodeId> {
    scene
        .page_children()
        .iter()
        .filter(|id| scene.node(id).is_some_and(is_badge_node))
        .cloned()
        .collect()
}

/// Badge markers tagged with the given annotation id.
pub fn badge_nodes_for(scene: &SceneGraph, annotation_id: &str) -> Vec<NodeId> {
    page_badges(scene)
        .into_iter()
        .filter(|id| {
            badge_annotation_id(scene, id).as_deref() == Some(annotation_id)
                || scene
                    .node(id)
                    .is_some_and(|node| node.name_contains(annotation_id))
        })
        .collect()
}

/// The annotation id a badge marker is tagged with, from its plugin data.
pub fn badge_annotation_id(scene: &SceneGraph, badge: &NodeId) -> Option<String> {
    let value = scene.plugin_data(badge, config::BADGE_DATA_KEY)?;
    let data: config::BadgeData = serde_json::from_value(value.clone()).ok()?;
    Some(data.annotation_id)
}

/// The item nodes currently attached to a wrapper, in wrapper order.
pub fn item_nodes(scene: &SceneGraph, wrapper: &NodeId) -> Vec<NodeId> {
    scene
        .children(wrapper)
        .iter()
        .filter(|id| {
            scene
                .node(id)
                .is_some_and(|node| node.name().starts_with(config::ITEM_NAME_PREFIX))
        })
        .cloned()
        .collect()
}

/// Finds the wrapper item whose name embeds the given annotation id.
pub fn find_item_node(scene: &SceneGraph, wrapper: &NodeId, annotation_id: &str) -> Option<NodeId> {
    item_nodes(scene, wrapper)
        .into_iter()
        .find(|id| {
            scene
                .node(id)
                .is_some_and(|node| node.name_contains(annotation_id))
        })
}

/// The annotation id an item node belongs to: from the persisted annotation
/// record when present, otherwise parsed out of the node name.
pub fn item_annotation_id(scene: &SceneGraph, item: &NodeId) -> Option<String> {
    if let Some(value) = scene.plugin_data(item, config::ITEM_DATA_KEY) {
        if let Some(id) = value.get("id").and_then(serde_json::Value::as_str) {
            return Some(id.to_owned());
        }
    }
    let node = scene.node(item)?;
    let suffix = node.name().strip_prefix(config::ITEM_NAME_PREFIX)?;
    let id = suffix.trim_start();
    if id.is_empty() {
        return None;
    }
    Some(id.to_owned())
}
