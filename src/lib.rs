// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — canvas annotation reconciler.
//!
//! Diffs two annotation snapshots and applies the minimal set of scene
//! mutations (insert/update/delete/reorder, at list and content-block
//! granularity), plus collision-aware badge placement next to the anchor.

pub mod config;
pub mod diff;
pub mod model;
pub mod placement;
pub mod query;
pub mod reconcile;
pub mod scene;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
