use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::{debug, trace, warn};

use crate::error::{NetworkError, Result};
use crate::segment::{IdGenerator, RandomIds, SegmentId, SegmentShape, Switch, TrackSegment};

slotmap::new_key_type! {
    /// Stable handle to a segment stored in a [`TrackNetwork`].
    pub struct SegmentKey;
}

/// The segments of one layout, in insertion order.
///
/// Segments are owned by the network and addressed either by their
/// [`SegmentId`] or by the [`SegmentKey`] returned on insertion. Adjacency is
/// not stored: segments connect where their endpoints coincide, and keeping
/// a chained layout continuous is up to the caller.
#[derive(Debug)]
pub struct TrackNetwork<G = RandomIds> {
    segments: SlotMap<SegmentKey, TrackSegment>,
    order: Vec<SegmentKey>,
    index: HashMap<SegmentId, SegmentKey>,
    ids: G,
}

impl TrackNetwork {
    /// Creates an empty network that generates random segment ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(RandomIds::new())
    }
}

impl Default for TrackNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TrackNetwork<G> {
    /// Creates an empty network drawing ids for [`insert`](Self::insert) from `ids`.
    #[must_use]
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            segments: SlotMap::with_key(),
            order: Vec::new(),
            index: HashMap::new(),
            ids,
        }
    }

    /// Appends a segment and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment with the same id is already present.
    pub fn add(&mut self, segment: TrackSegment) -> Result<SegmentKey> {
        if self.index.contains_key(segment.id()) {
            return Err(NetworkError::DuplicateId(segment.id().clone()).into());
        }
        Ok(self.push(segment))
    }

    /// Appends a shape under a freshly generated id and returns its handle.
    ///
    /// Ids already taken in this network are skipped.
    pub fn insert(&mut self, shape: impl Into<SegmentShape>) -> SegmentKey {
        let id = loop {
            let id = self.ids.next_id();
            if !self.index.contains_key(&id) {
                break id;
            }
            debug!(%id, "generated segment id already taken");
        };
        self.push(TrackSegment::new(id, shape))
    }

    fn push(&mut self, segment: TrackSegment) -> SegmentKey {
        let id = segment.id().clone();
        let key = self.segments.insert(segment);
        debug!(%id, position = self.order.len(), "added segment");
        self.order.push(key);
        self.index.insert(id, key);
        key
    }

    /// Iterates over all segments in insertion order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &TrackSegment> + '_ {
        self.order.iter().map(|key| &self.segments[*key])
    }

    /// Iterates over the switches in insertion order.
    pub fn switches(&self) -> impl Iterator<Item = (&SegmentId, &Switch)> + '_ {
        self.all()
            .filter_map(|segment| segment.as_switch().map(|switch| (segment.id(), switch)))
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the network has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up a segment by handle.
    #[must_use]
    pub fn get(&self, key: SegmentKey) -> Option<&TrackSegment> {
        self.segments.get(key)
    }

    /// Looks up a segment mutably by handle.
    pub fn get_mut(&mut self, key: SegmentKey) -> Option<&mut TrackSegment> {
        self.segments.get_mut(key)
    }

    /// Looks up a segment by id.
    #[must_use]
    pub fn find(&self, id: &SegmentId) -> Option<&TrackSegment> {
        self.index.get(id).and_then(|key| self.segments.get(*key))
    }

    /// Looks up a segment mutably by id.
    pub fn find_mut(&mut self, id: &SegmentId) -> Option<&mut TrackSegment> {
        let key = *self.index.get(id)?;
        self.segments.get_mut(key)
    }

    /// Flips every switch in the network.
    pub fn toggle_all_switches(&mut self) {
        let mut toggled = 0_usize;
        for key in &self.order {
            let segment = &mut self.segments[*key];
            let id = segment.id().clone();
            if let Some(switch) = segment.as_switch_mut() {
                switch.toggle();
                trace!(%id, active = switch.is_active(), "toggled switch");
                toggled += 1;
            }
        }
        debug!(toggled, "toggled all switches");
    }

    /// Marks the segment `id` as highlighted.
    ///
    /// # Errors
    ///
    /// Returns an error if no segment has this id.
    pub fn highlight(&mut self, id: &SegmentId) -> Result<()> {
        self.segment_mut(id)?.highlight();
        Ok(())
    }

    /// Clears the highlight of segment `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no segment has this id.
    pub fn remove_highlight(&mut self, id: &SegmentId) -> Result<()> {
        self.segment_mut(id)?.remove_highlight();
        Ok(())
    }

    fn segment_mut(&mut self, id: &SegmentId) -> std::result::Result<&mut TrackSegment, NetworkError> {
        if let Some(key) = self.index.get(id) {
            if let Some(segment) = self.segments.get_mut(*key) {
                return Ok(segment);
            }
        }
        warn!(%id, "no such segment");
        Err(NetworkError::SegmentNotFound(id.clone()))
    }
}
