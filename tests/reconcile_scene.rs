// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end lifecycle over the public API: add, edit, reorder, delete,
//! teardown, with badge placement against a connected frame.

use proteus::config;
use proteus::model::{Annotation, ContentBlock, NodeId};
use proteus::query;
use proteus::reconcile::{reconcile, ReconcileMode};
use proteus::scene::{Rect, SceneGraph};

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::paragraph(vec![ContentBlock::text(text)])
}

fn annotation(id: &str, title: &str, body: &str) -> Annotation {
    Annotation::new(id, title)
        .with_content(vec![paragraph(body)])
        .with_color_theme("blue")
}

fn connected_scene() -> (SceneGraph, NodeId, NodeId) {
    let mut scene = SceneGraph::new();
    let target = scene.create_frame("Login Screen");
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
    (scene, wrapper, target)
}

fn badge_rect(scene: &SceneGraph, badge: &NodeId) -> Rect {
    scene.node(badge).expect("badge node").rect()
}

#[test]
fn full_annotation_lifecycle_keeps_the_scene_in_sync() {
    let (mut scene, wrapper, _target) = connected_scene();

    // Two annotations arrive one after the other; badges must stack on the
    // connected frame's left edge without overlapping.
    let one = vec![annotation("a1", "Check contrast", "Contrast is low")];
    let result = reconcile(&mut scene, &one, &[], &wrapper).expect("first add");
    assert_eq!(result.created, 1);

    let two = vec![one[0].clone(), annotation("a2", "Fix copy", "Typos here")];
    let result = reconcile(&mut scene, &two, &one, &wrapper).expect("second add");
    assert_eq!(result.created, 1);

    let badge_one = query::badge_nodes_for(&scene, "a1")[0].clone();
    let badge_two = query::badge_nodes_for(&scene, "a2")[0].clone();
    let rect_one = badge_rect(&scene, &badge_one);
    let rect_two = badge_rect(&scene, &badge_two);
    assert_eq!(rect_one.overlap_area(&rect_two), 0.0);
    assert_eq!(rect_one.x(), rect_two.x());
    let step = config::BADGE_SIZE + config::BADGE_STACK_GAP;
    assert_eq!(rect_two.y() - rect_one.y(), step);

    // Editing title and content touches only the targeted item.
    let mut edited = two.clone();
    edited[0].title = "Check color contrast".to_owned();
    edited[0].content = vec![paragraph("Contrast is low"), paragraph("Use AA text")];
    let result = reconcile(&mut scene, &edited, &two, &wrapper).expect("edit");
    assert_eq!(result.updated, 1);
    assert_eq!(result.created, 0);

    // Upstream re-indexing swaps the two slots: pure reorder, nothing rebuilt.
    let nodes_before = scene.node_count();
    let swapped = vec![edited[1].clone(), edited[0].clone()];
    let result = reconcile(&mut scene, &swapped, &edited, &wrapper).expect("reorder");
    assert_eq!(result.mode, ReconcileMode::Reorder);
    assert_eq!(scene.node_count(), nodes_before);

    // Deleting the first annotation renumbers the survivor.
    let mut with_deletion = swapped.clone();
    with_deletion[0].is_deleted = true;
    let result = reconcile(&mut scene, &with_deletion, &swapped, &wrapper).expect("delete");
    assert_eq!(result.removed, 1);
    assert!(!result.reinit_required);
    let survivor_id = &with_deletion[1].id;
    let surviving = query::badge_nodes_for(&scene, survivor_id);
    assert_eq!(surviving.len(), 1);

    // Deleting the survivor tears the wrapper down and asks for reinit.
    let mut emptied = with_deletion.clone();
    emptied[1].is_deleted = true;
    let result = reconcile(&mut scene, &emptied, &with_deletion, &wrapper).expect("teardown");
    assert_eq!(result.removed, 1);
    assert!(result.reinit_required);
    assert!(scene.node(&wrapper).is_none());
    assert!(query::badge_nodes_for(&scene, survivor_id).is_empty());
}
