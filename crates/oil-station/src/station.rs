//! The `Station` contract shared by both variants.

use oil_core::TrainId;
use oil_train::TrainFleet;

use crate::snapshot::StationInfo;

/// What a track slot holds.
///
/// The unloader is owned by its entrepot, not by the fleet, so it gets its
/// own tag instead of a `TrainId` — there is no identity comparison to get
/// wrong when asking "is this slot the unloader's?".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Occupant {
    /// A roster train, resolved through the fleet arena.
    Roster(TrainId),
    /// The entrepot's own unloader train.
    Unloader,
}

/// One track slot: empty, or holding exactly one occupant.
pub type Track = Option<Occupant>;

/// Capability set shared by [`Terminal`][crate::Terminal] and
/// [`Entrepot`][crate::Entrepot].
///
/// Stations receive `&mut TrainFleet` for the operations that move oil or
/// change train state; exclusive access makes check-then-place atomic within
/// one call.
pub trait Station {
    /// Unique station name.
    fn station_name(&self) -> &str;

    /// Current storage level.  No floor is enforced here — see the
    /// production sampling note on [`Terminal`][crate::Terminal].
    fn oil_volume(&self) -> i64;

    /// The fixed track row.
    fn tracks(&self) -> &[Track];

    /// `true` if at least one slot is empty.
    fn has_free_tracks(&self) -> bool {
        self.tracks().iter().any(Track::is_none)
    }

    /// Try to admit `train` onto a free slot, subject to the variant's
    /// admission policy.  On success the train's state becomes
    /// `InCargoProcess`.  `false` is ordinary backpressure.
    fn add_train_to_track(&mut self, train: TrainId, fleet: &mut TrainFleet) -> bool;

    /// Run one tick of the variant's oil-balance and departure logic.
    fn update(&mut self, fleet: &mut TrainFleet);

    /// Immutable snapshot for the reporting sinks.
    fn info(&self, fleet: &TrainFleet) -> StationInfo;
}

/// Base placement behavior: put `occupant` into the first empty slot.
///
/// Returns the slot index, or `None` if every slot is taken.  Variants wrap
/// this with their admission policy.
pub(crate) fn place_in_first_free(tracks: &mut [Track], occupant: Occupant) -> Option<usize> {
    for (i, track) in tracks.iter_mut().enumerate() {
        if track.is_none() {
            *track = Some(occupant);
            return Some(i);
        }
    }
    None
}
