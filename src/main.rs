// This binary crate is intentionally minimal.
// All classifier logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example and_gate
fn main() {
    println!("perceptron: a from-scratch single-neuron classifier in Rust.");
    println!("Run `cargo run --example and_gate` to see the AND-gate demo.");
}
