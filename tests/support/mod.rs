// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every
// helper, so silence the per-binary dead code warnings here.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod failing;

#[allow(dead_code, unused_imports)]
pub mod logger;

#[allow(dead_code, unused_imports)]
pub mod time;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use failing::*;
#[allow(unused_imports)]
pub use logger::*;
#[allow(unused_imports)]
pub use time::*;
