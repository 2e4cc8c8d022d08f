pub mod generate;
pub mod health;

pub use generate::generate_disposal_pdf;
pub use health::liveness;
