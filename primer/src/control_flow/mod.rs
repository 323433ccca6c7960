//! State-transition primitives and the exercise kernels written with them.

pub mod arithmetic;
pub mod branching;
pub mod conditions;
pub mod looping;
pub mod loops;
pub mod sequential;
