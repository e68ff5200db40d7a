//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `code_utils` package `README.md`.

use code_utils::{
    Formatter, LastElement, RandomNumberEngine, Timer, UniformRandomBitGenerator, Xorshift32,
    print_values,
};

fn main() {
    // Time the whole example; the report is printed when `main` returns.
    let _timer = Timer::new();

    // Deterministic random numbers that can be saved and restored.
    let mut rng = Xorshift32::new(2024);
    rng.discard(10);
    let saved = rng.to_string();
    let rolls: Vec<u32> = (0..5).map(|_| rng.generate() % 6 + 1).collect();

    let mut replay: Xorshift32 = saved.parse().expect("saved state is a valid number");
    let replayed: Vec<u32> = (0..5).map(|_| replay.generate() % 6 + 1).collect();

    // rolls { 2 , 4 , 3 , 3 , 6 } replayed { 2 , 4 , 3 , 3 , 6 }
    print_values!("rolls", rolls, "replayed", replayed);

    // Containers are compared by value to find their last element unless asked otherwise.
    let strict = Formatter::new().with_last_element(LastElement::ByPosition);
    strict.print(&[&"by position:", &vec![6, 1, 6]]);
}
