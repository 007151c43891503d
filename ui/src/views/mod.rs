mod generator;
pub use generator::SignatureGenerator;
