//! Simple Factory: one factory function decides which concrete shape to
//! build from a string label; the caller only ever sees the `Shape` contract.

use colored::Colorize;
use patterns::shapes::create_shape;

fn draw_requested(kind: &str) {
    match create_shape(kind) {
        Ok(shape) => println!("{}", shape.draw()),
        Err(err) => eprintln!("{}", err.to_string().red()),
    }
}

fn main() {
    draw_requested("circle");
    draw_requested("square");
    draw_requested("rectangle");
    draw_requested("triangle"); // nobody makes these
}

// Expected output (stdout):
//
// Drawing Circle
// Drawing Square
// Drawing Rectangle
//
// Expected output (stderr):
//
// unknown variant requested: 'triangle'
