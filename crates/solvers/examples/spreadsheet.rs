//! Spreadsheet goal seek scenarios.
//!
//! Run with `cargo run -p goalseek-solvers --example spreadsheet`.

use std::error::Error;

use goalseek_solvers::equation::goal_seek::{Config, seek};

fn main() -> Result<(), Box<dyn Error>> {
    // Which x squares to 10?
    let x = seek(|x| x * x, 10.0, 3.0, &Config::default())?;
    println!("x^2 = 10          -> x = {x:.6}");

    // Selling 100 items at $5 with a 10% commission makes $450.
    // How many items make $1000?
    let revenue = |items: f64| {
        let price = 5.0;
        let commission = 0.1;
        price * items * (1.0 - commission)
    };
    let items = seek(revenue, 1000.0, 100.0, &Config::default())?;
    println!("revenue = $1000   -> items = {items:.2}");

    // Which slope gives a 30 degree angle?
    let slope = seek(f64::atan, 30.0_f64.to_radians(), 0.5, &Config::positive())?;
    println!("atan(x) = 30 deg  -> x = {slope:.4}");

    // Stay clear of the pole at x = 10 with an explicit bracket.
    let gain = |x: f64| (10.0 * x / (10.0 - x)).powi(2);
    let x = seek(gain, 25.0, [1e-6, 9.999], &Config::positive())?;
    println!("gain = 25         -> x = {x:.6}");

    Ok(())
}
