pub mod invite;
pub mod segments;
