pub mod invitation;
pub mod segment;

pub use invitation::{EventRecord, InvitationRecord, StoredInvitation};
pub use segment::SegmentAsset;
