//! Marker types.

/// Marker type describing the moment an entity becomes available.
#[derive(Clone, Copy, Debug)]
pub struct Availability;
