// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example xor
fn main() {
    println!("magnetite-nn: a from-scratch back-propagation network library in Rust.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
