pub mod digits;
pub mod factorial;
pub mod fibonacci;
pub mod gcd;
pub mod primality;
pub mod sieve;
