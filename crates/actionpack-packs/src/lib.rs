//! Sample action packs and their registrars

pub mod textutils;
pub mod weather;

use actionpack_registry::PackRegistrar;

/// Return registrars for all bundled packs
pub fn registrars() -> Vec<PackRegistrar> {
    vec![weather::registrar(), textutils::registrar()]
}
