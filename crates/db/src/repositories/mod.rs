pub mod invite_repo;

pub use invite_repo::InviteRepo;
