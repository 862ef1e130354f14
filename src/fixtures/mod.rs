// fixtures/mod.rs - Test fixtures module
//
// What is a fixture?
// A fixture is reusable test setup. Instead of building the same products
// in every test, we define them once here and reuse them across the unit
// tests inside the crate and the integration tests under tests/.

pub mod products;
