mod cubic;

pub use cubic::Cubic;
