pub mod measurer;

pub use measurer::NonEmptyLineMeasurer;
