use ac_phasor::power::{Impedance, Phasor, ThreePhase, UnbalanceMethod};

fn main() {
    // Line-to-line voltages of a slightly sagging feeder.
    let lines = ThreePhase::new(
        Phasor::new(400.0, 0.0),
        Phasor::new(392.0, -121.5),
        Phasor::new(407.0, 119.0),
    );

    println!("V_ab = {:.3}", lines.a);
    println!("V_bc = {:.3}", lines.b);
    println!("V_ca = {:.3}", lines.c);
    println!(
        "NEMA unbalance: {:.3} %",
        lines.unbalance(UnbalanceMethod::MaxDeviation)
    );
    println!(
        "IEC unbalance:  {:.3} %",
        lines.unbalance(UnbalanceMethod::NegativeSequence)
    );

    // Current through a series R-L branch and the resulting drop.
    let z = Impedance::new(0.2, 0.6);
    let current = Phasor::from_rms(32.0, -25.0);
    let drop = current * z;
    println!("Z = {z:.2}, I = {current:.3}, V_drop = {drop:.3} ({:.3} V rms)", drop.to_rms());

    match lines.a.divided_by(Phasor::zero()) {
        Ok(v) => println!("unexpected quotient {v}"),
        Err(err) => println!("division rejected: {err}"),
    }
}
