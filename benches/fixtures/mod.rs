// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use proteus::config;
use proteus::model::{Annotation, ContentBlock, NodeId};
use proteus::reconcile::reconcile;
use proteus::scene::SceneGraph;

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::paragraph(vec![ContentBlock::text(text)])
}

pub fn annotation(id: &str, title: &str, blocks: usize) -> Annotation {
    let content = (0..blocks)
        .map(|index| paragraph(&format!("{title} block {index:03}")))
        .collect();
    Annotation::new(id, title)
        .with_content(content)
        .with_color_theme("blue")
}

/// `count` annotations with `blocks` paragraphs each, deterministic ids.
pub fn annotations(count: usize, blocks: usize) -> Vec<Annotation> {
    (0..count)
        .map(|index| annotation(&format!("bench_{index:04}"), &format!("Note {index:04}"), blocks))
        .collect()
}

/// Same set with every title and last block edited, for update-heavy runs.
pub fn edited_annotations(count: usize, blocks: usize) -> Vec<Annotation> {
    let mut annots = annotations(count, blocks);
    for annot in &mut annots {
        annot.title.push_str(" (edited)");
        if let Some(last) = annot.content.last_mut() {
            *last = paragraph("edited block");
        }
    }
    annots
}

/// A scene holding a connected frame plus an empty wrapper.
pub fn scene_with_wrapper() -> (SceneGraph, NodeId) {
    let mut scene = SceneGraph::new();
    let target = scene.create_frame("Target Frame");
    if let Some(node) = scene.node_mut(&target) {
        node.set_x(400.0);
        node.set_y(200.0);
        node.set_width(360.0);
        node.set_height(640.0);
    }
    scene.append_page_child(&target);

    let wrapper = scene.create_frame(config::WRAPPER_NAME_PREFIX);
    scene.append_page_child(&wrapper);
    let data = config::WrapperData {
        connected_frame_id: Some(target.as_str().to_owned()),
    };
    scene.set_plugin_data(
        &wrapper,
        config::WRAPPER_DATA_KEY,
        serde_json::to_value(&data).expect("wrapper data"),
    );
    (scene, wrapper)
}

/// A scene already reconciled against the given annotations.
pub fn seeded_scene(annots: &[Annotation]) -> (SceneGraph, NodeId) {
    let (mut scene, wrapper) = scene_with_wrapper();
    reconcile(&mut scene, annots, &[], &wrapper).expect("seed reconcile");
    (scene, wrapper)
}
