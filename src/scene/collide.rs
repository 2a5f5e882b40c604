// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Axis-aligned collision detection over scene nodes.

use smallvec::SmallVec;

use crate::model::NodeId;

use super::SceneGraph;

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Strict overlap: rectangles that merely share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Zero-area overlap with `other`.
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let dx = (self.x + self.width).min(other.x + other.width) - self.x.max(other.x);
        let dy = (self.y + self.height).min(other.y + other.height) - self.y.max(other.y);
        if dx > 0.0 && dy > 0.0 {
            dx * dy
        } else {
            0.0
        }
    }
}

/// Returns the candidates whose current rect strictly overlaps `rect`.
/// Candidates that no longer exist in the scene are skipped.
pub fn find_collisions<'a>(
    scene: &SceneGraph,
    candidates: impl IntoIterator<Item = &'a NodeId>,
    rect: Rect,
) -> SmallVec<[NodeId; 4]> {
    candidates
        .into_iter()
        .filter(|id| {
            scene
                .node(id)
                .is_some_and(|node| node.rect().intersects(&rect))
        })
        .cloned()
        .collect()
}
