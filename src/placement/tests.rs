// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::config;
use crate::model::NodeId;
use crate::scene::{Rect, SceneGraph};

use super::{place_badge, Point};

fn wrapper(scene: &mut SceneGraph) -> NodeId {
    let wrapper = scene.create_frame(config::WRAPPER_NAME_PREFIX);
    scene.append_page_child(&wrapper);
    wrapper
}

fn anchor_frame(scene: &mut SceneGraph) -> NodeId {
    let anchor = scene.create_frame("Connected Frame");
    if let Some(node) = scene.node_mut(&anchor) {
        node.set_x(100.0);
        node.set_y(100.0);
        node.set_width(200.0);
        node.set_height(60.0);
    }
    scene.append_page_child(&anchor);
    anchor
}

fn badge(scene: &mut SceneGraph, name: &str) -> NodeId {
    let badge = scene.create_frame(name);
    if let Some(node) = scene.node_mut(&badge) {
        node.set_width(config::BADGE_SIZE);
        node.set_height(config::BADGE_SIZE);
    }
    badge
}

fn attach_badge_at(scene: &mut SceneGraph, name: &str, position: Point) -> NodeId {
    let id = badge(scene, name);
    if let Some(node) = scene.node_mut(&id) {
        node.set_x(position.x());
        node.set_y(position.y());
    }
    scene.append_page_child(&id);
    id
}

#[test]
fn unanchored_placement_returns_the_null_position() {
    let mut scene = SceneGraph::new();
    let wrapper = wrapper(&mut scene);
    let badge = badge(&mut scene, "Annotation Badge b1");

    assert_eq!(place_badge(&scene, &wrapper, &badge), Point::ORIGIN);
}

#[test]
fn selection_anchors_the_badge_with_the_edge_overlap() {
    let mut scene = SceneGraph::new();
    let wrapper = wrapper(&mut scene);
    let anchor = anchor_frame(&mut scene);
    scene.set_selection(Some(anchor));
    let badge = badge(&mut scene, "Annotation Badge b1");

    let position = place_badge(&scene, &wrapper, &badge);

    // x: anchor left minus (badge width - overlap); y: vertically centered.
    assert_eq!(position.x(), 100.0 - (config::BADGE_SIZE - config::BADGE_ANCHOR_OVERLAP));
    assert_eq!(position.y(), 100.0 + 30.0 - config::BADGE_SIZE / 2.0);
}

#[test]
fn connected_frame_is_the_fallback_anchor() {
    let mut scene = SceneGraph::new();
    let wrapper = wrapper(&mut scene);
    let anchor = anchor_frame(&mut scene);
    let data = config::WrapperData {
        connected_frame_id: Some(anchor.as_str().to_owned()),
    };
    scene.set_plugin_data(
        &wrapper,
        config::WRAPPER_DATA_KEY,
        serde_json::to_value(&data).expect("wrapper data"),
    );
    let badge = badge(&mut scene, "Annotation Badge b1");

    let position = place_badge(&scene, &wrapper, &badge);

    assert_eq!(position.x(), 84.0);
    assert_eq!(position.y(), 118.0);
}

#[test]
fn missing_connected_frame_leaves_the_badge_unanchored() {
    let mut scene = SceneGraph::new();
    let wrapper = wrapper(&mut scene);
    let data = config::WrapperData {
        connected_frame_id: Some("n:404".to_owned()),
    };
    scene.set_plugin_data(
        &wrapper,
        config::WRAPPER_DATA_KEY,
        serde_json::to_value(&data).expect("wrapper data"),
    );
    let badge = badge(&mut scene, "Annotation Badge b1");

    assert_eq!(place_badge(&scene, &wrapper, &badge), Point::ORIGIN);
}

#[test]
fn collisions_stack_badges_downward_in_exact_steps() {
    let mut scene = SceneGraph::new();
    let wrapper = wrapper(&mut scene);
    let anchor = anchor_frame(&mut scene);
    scene.set_selection(Some(anchor));

    let step = config::BADGE_SIZE + config::BADGE_STACK_GAP;
    attach_badge_at(&mut scene, "Annotation Badge b1", Point::new(84.0, 118.0));

    let second = badge(&mut scene, "Annotation Badge b2");
    let position = place_badge(&scene, &wrapper, &second);
    assert_eq!(position.x(), 84.0);
    assert_eq!(position.y(), 118.0 + step);

    attach_badge_at(&mut scene, "Annotation Badge b2", position);
    let third = badge(&mut scene, "Annotation Badge b3");
    let position = place_badge(&scene, &wrapper, &third);
    assert_eq!(position.y(), 118.0 + 2.0 * step);
}

#[test]
fn the_badge_being_placed_is_not_its_own_obstacle() {
    let mut scene = SceneGraph::new();
    let wrapper = wrapper(&mut scene);
    let anchor = anchor_frame(&mut scene);
    scene.set_selection(Some(anchor));

    let badge = attach_badge_at(&mut scene, "Annotation Badge b1", Point::new(84.0, 118.0));
    let position = place_badge(&scene, &wrapper, &badge);

    assert_eq!(position, Point::new(84.0, 118.0));
}

#[test]
fn a_full_stack_still_resolves_without_overlap() {
    let mut scene = SceneGraph::new();
    let wrapper = wrapper(&mut scene);
    let anchor = anchor_frame(&mut scene);
    scene.set_selection(Some(anchor));

    let step = config::BADGE_SIZE + config::BADGE_STACK_GAP;
    let mut placed: Vec<Rect> = Vec::new();
    for index in 0..6 {
        let name = format!("Annotation Badge b{index}");
        let id = badge(&mut scene, &name);
        let position = place_badge(&scene, &wrapper, &id);
        if let Some(node) = scene.node_mut(&id) {
            node.set_x(position.x());
            node.set_y(position.y());
        }
        scene.append_page_child(&id);

        let rect = Rect::new(position.x(), position.y(), config::BADGE_SIZE, config::BADGE_SIZE);
        for existing in &placed {
            assert_eq!(rect.overlap_area(existing), 0.0);
        }
        // Each resolved slot sits an exact number of steps below the first.
        let offset = position.y() - 118.0;
        assert_eq!(offset % step, 0.0);
        placed.push(rect);
    }
}
