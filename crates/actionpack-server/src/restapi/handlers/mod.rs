pub mod health;
pub mod packs;
