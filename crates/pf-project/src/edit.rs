//! Segment-list editing on a system definition.
//!
//! The chain order is the flow direction, so edits only ever append or pop.
//! Ids of the remaining segments never change.

use crate::ProjectError;
use crate::schema::{SegmentDef, SystemDef};

impl SystemDef {
    /// Id the next appended segment will receive: one past the largest id.
    pub fn next_segment_id(&self) -> u32 {
        self.segments.iter().map(|s| s.id).max().map_or(1, |id| id + 1)
    }

    /// Append `segment` at the outlet end, overwriting its id. Returns the new id.
    pub fn add_segment(&mut self, mut segment: SegmentDef) -> u32 {
        let id = self.next_segment_id();
        segment.id = id;
        self.segments.push(segment);
        id
    }

    /// Remove the last segment. The chain must keep at least one segment.
    pub fn remove_last_segment(&mut self) -> Result<SegmentDef, ProjectError> {
        if self.segments.len() <= 1 {
            return Err(ProjectError::Edit {
                what: format!("system '{}' must keep at least one segment", self.id),
            });
        }
        self.segments.pop().ok_or_else(|| ProjectError::Edit {
            what: format!("system '{}' has no segments", self.id),
        })
    }
}
