/// Ordinary finite sums, including cancellation and gradual underflow.
pub mod addition;




/// Round-to-nearest-even and overflow behaviour.
pub mod rounding;
