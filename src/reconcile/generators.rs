// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node generation for annotation items, badge markers, and content blocks.

use crate::config;
use crate::model::{Annotation, BlockType, ContentBlock, NodeId};
use crate::scene::SceneGraph;

use super::content::refresh_body_visibility;
use super::toggle_text_placeholder;

/// Builds a detached item node for an annotation: a frame named after the
/// annotation id, holding a `Header` (with its `Header/Text`) and a `Body`
/// whose children mirror the content blocks in order.
pub fn generate_item_node(scene: &mut SceneGraph, annotation: &Annotation, index: usize) -> NodeId {
    let item = scene.create_frame(&format!("{} {}", config::ITEM_NAME_PREFIX, annotation.id));
    if let Some(node) = scene.node_mut(&item) {
        node.set_width(config::ITEM_WIDTH);
        node.set_height(config::HEADER_HEIGHT);
        // Stand-in for the host's stacked auto-layout inside the wrapper.
        node.set_y((index.saturating_sub(1)) as f64 * (config::HEADER_HEIGHT + config::BLOCK_HEIGHT));
    }

    let header = scene.create_frame(config::HEADER_NAME);
    if let Some(node) = scene.node_mut(&header) {
        node.set_width(config::ITEM_WIDTH);
        node.set_height(config::HEADER_HEIGHT);
    }
    let header_text = scene.create_text(config::HEADER_TEXT_NAME, "");
    toggle_text_placeholder(scene, &header_text, &annotation.title, config::TITLE_PLACEHOLDER);
    scene.append_child(&header, &header_text);
    scene.append_child(&item, &header);

    let body = scene.create_frame(config::BODY_NAME);
    if let Some(node) = scene.node_mut(&body) {
        node.set_width(config::ITEM_WIDTH);
    }
    let blocks_amount = annotation.content.len();
    for block in &annotation.content {
        let block_node = block_to_node(scene, block, blocks_amount);
        scene.append_child(&body, &block_node);
    }
    refresh_body_visibility(scene, &body);
    scene.append_child(&item, &body);

    let value = serde_json::to_value(annotation).expect("annotation serializes to json");
    scene.set_plugin_data(&item, config::ITEM_DATA_KEY, value);

    item
}

/// Builds a detached badge marker tagged with the annotation id and showing
/// the given index as its label.
pub fn generate_badge_node(scene: &mut SceneGraph, index: usize, annotation_id: &str) -> NodeId {
    let badge = scene.create_frame(&format!("{} {}", config::BADGE_NAME_PREFIX, annotation_id));
    if let Some(node) = scene.node_mut(&badge) {
        node.set_width(config::BADGE_SIZE);
        node.set_height(config::BADGE_SIZE);
        node.set_fill(Some(config::badge_theme_fill("")));
    }

    let mut buffer = itoa::Buffer::new();
    let label = scene.create_text(config::BADGE_LABEL_NAME, buffer.format(index));
    scene.append_child(&badge, &label);

    let data = config::BadgeData {
        annotation_id: annotation_id.to_owned(),
        index,
    };
    let value = serde_json::to_value(&data).expect("badge data serializes to json");
    scene.set_plugin_data(&badge, config::BADGE_DATA_KEY, value);

    badge
}

/// Renders one content block to a detached text node. The whole subtree is
/// flattened to display characters; `blocks_amount` controls trailing block
/// spacing (a lone block gets none).
pub fn block_to_node(scene: &mut SceneGraph, block: &ContentBlock, blocks_amount: usize) -> NodeId {
    let characters = flatten_block(block);
    let node = scene.create_text(&format!("Block/{}", block.kind.as_str()), &characters);
    if let Some(node) = scene.node_mut(&node) {
        node.set_width(config::ITEM_WIDTH);
        let spacing = if blocks_amount > 1 {
            config::BLOCK_SPACING
        } else {
            0.0
        };
        node.set_height(config::BLOCK_HEIGHT + spacing);
    }
    node
}

fn flatten_block(block: &ContentBlock) -> String {
    match block.kind {
        BlockType::Text => block.text.clone().unwrap_or_default(),
        BlockType::HardBreak => "\n".to_owned(),
        BlockType::HorizontalRule => "---".to_owned(),
        BlockType::Paragraph => flatten_children(block),
        BlockType::BulletList => {
            let entries: Vec<String> = block
                .content
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|entry| {
                    let line = flatten_block(entry);
                    match entry.attrs {
                        Some(attrs) => format!("{}. {}", attrs.order, line),
                        None => format!("* {}", line),
                    }
                })
                .collect();
            entries.join("\n")
        }
    }
}

fn flatten_children(block: &ContentBlock) -> String {
    block
        .content
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(flatten_block)
        .collect()
}
