// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Badge marker maintenance: index refresh and theme recoloring.

use crate::config;
use crate::model::NodeId;
use crate::query;
use crate::scene::SceneGraph;

/// Re-numbers every badge to match the current wrapper order: the badge for
/// the i-th item (1-based) shows `i` as its label and records it in its
/// plugin data.
pub fn refresh_badge_indexes(scene: &mut SceneGraph, wrapper: &NodeId) {
    let items = query::item_nodes(scene, wrapper);
    for (position, item) in items.iter().enumerate() {
        let index = position + 1;
        let Some(annotation_id) = query::item_annotation_id(scene, item) else {
            continue;
        };
        for badge in query::badge_nodes_for(scene, &annotation_id) {
            set_badge_index(scene, &badge, &annotation_id, index);
        }
    }
}

fn set_badge_index(scene: &mut SceneGraph, badge: &NodeId, annotation_id: &str, index: usize) {
    let mut buffer = itoa::Buffer::new();
    let label = buffer.format(index);
    if let Some(label_node) =
        scene.find_child(badge, |node| node.name() == config::BADGE_LABEL_NAME)
    {
        if let Some(node) = scene.node_mut(&label_node) {
            node.set_characters(label);
        }
    }
    let data = config::BadgeData {
        annotation_id: annotation_id.to_owned(),
        index,
    };
    let value = serde_json::to_value(&data).expect("badge data serializes to json");
    scene.set_plugin_data(badge, config::BADGE_DATA_KEY, value);
}

/// Recolors every badge tagged with the annotation id to the given theme.
pub fn update_badge_color(scene: &mut SceneGraph, annotation_id: &str, color_theme_id: &str) {
    let fill = config::badge_theme_fill(color_theme_id);
    for badge in query::badge_nodes_for(scene, annotation_id) {
        if let Some(node) = scene.node_mut(&badge) {
            node.set_fill(Some(fill));
        }
    }
}
