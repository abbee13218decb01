pub mod fs;
pub mod world_bank;

pub use world_bank::{ClientBuildError, WorldBankClient, WorldBankSettings};
