//! Demonstrates DPAS conversions and domain checks

use dpas_types::{Angle, AngleUnit};

fn main() {
    // from degrees to the DPAS scales
    let angle = Angle::from_degrees(90.0);
    println!("Input: 90 degrees");
    println!(" -> macro: {}", angle.macro_value());
    println!(" -> micro: {}", angle.micro_value());
    println!(" -> domain: {}", angle.domain());

    // from a DPAS macro value back to degrees
    let angle = Angle::new(25.5, AngleUnit::Macro);
    println!("Input: 25.5 macro units");
    println!(" -> degrees: {}", angle.degrees());
    println!(" -> domain: {}", angle.domain());

    // dynamic textual input
    let rotation: Angle = "195 deg".parse().expect("Valid value-unit notation");
    println!("State check for {rotation:#}");
    if rotation.domain().number() == 3 {
        println!(" -> the rotation is between 20 and 30 macro units");
    }
}
