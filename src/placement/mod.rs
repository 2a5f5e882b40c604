// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collision-avoiding badge placement.
//!
//! A badge wants to sit on its anchor's left edge, vertically centered, with
//! an intentional 8-unit overlap into the anchor. When that slot is taken by
//! another badge the search walks straight down in `badge height + gap`
//! steps until the slot is free. Pure: reads the scene, never mutates it.

use serde_json::Value;

use crate::config;
use crate::model::NodeId;
use crate::query;
use crate::scene::{find_collisions, Rect, SceneGraph};

/// A resolved page position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The null position: returned when no anchor can be resolved, leaving
    /// the badge at the page origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Computes where to place `badge` for the given wrapper.
///
/// Anchor resolution order: the host's current selection, then the frame the
/// wrapper was connected to (if it still exists), then nothing, in which case
/// the null position is returned. Existing badges other than `badge` itself
/// are collision obstacles; each collision advances the candidate `y` by one
/// badge height plus the stacking gap. The probe count is capped by the
/// number of existing badges, which bounds the strictly-descending search.
pub fn place_badge(scene: &SceneGraph, wrapper: &NodeId, badge: &NodeId) -> Point {
    let Some(badge_node) = scene.node(badge) else {
        return Point::ORIGIN;
    };
    let badge_width = badge_node.width();
    let badge_height = badge_node.height();

    let Some(anchor_id) = resolve_anchor(scene, wrapper) else {
        return Point::ORIGIN;
    };
    let Some(anchor) = scene.node(&anchor_id) else {
        return Point::ORIGIN;
    };

    let x = anchor.x() - (badge_width - config::BADGE_ANCHOR_OVERLAP);
    let mut y = anchor.y() + anchor.height() / 2.0 - badge_height / 2.0;

    let obstacles: Vec<NodeId> = query::page_badges(scene)
        .into_iter()
        .filter(|id| id != badge)
        .collect();

    // A uniform-size badge can straddle at most two consecutive probe
    // windows, so 2N + 1 probes always reach a free slot.
    let probes = obstacles.len() * 2 + 1;
    for _ in 0..probes {
        let wanted = Rect::new(x, y, badge_width, badge_height);
        if find_collisions(scene, &obstacles, wanted).is_empty() {
            return Point::new(x, y);
        }
        y += badge_height + config::BADGE_STACK_GAP;
    }
    Point::new(x, y)
}

fn resolve_anchor(scene: &SceneGraph, wrapper: &NodeId) -> Option<NodeId> {
    if let Some(selection) = scene.selection() {
        return Some(selection.clone());
    }

    let value: &Value = scene.plugin_data(wrapper, config::WRAPPER_DATA_KEY)?;
    let data: config::WrapperData = serde_json::from_value(value.clone()).ok()?;
    let connected = NodeId::new(data.connected_frame_id?).ok()?;
    if !scene.contains(&connected) {
        return None;
    }
    Some(connected)
}

#[cfg(test)]
mod tests;
