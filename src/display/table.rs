use std::io::{self, Write};

use crate::core::trajectory::TrajectorySample;

const TIME_HEADER: &str = "Tempo (s)";
const POSITION_HEADER: &str = "Posição (m)";
const VELOCITY_HEADER: &str = "Velocidade (m/s)";

pub fn write_table<W: Write>(out: &mut W, samples: &[TrajectorySample]) -> io::Result<()> {
    let time_w = TIME_HEADER.chars().count();
    let position_w = POSITION_HEADER.chars().count();
    let velocity_w = VELOCITY_HEADER.chars().count();

    writeln!(out, "{TIME_HEADER} | {POSITION_HEADER} | {VELOCITY_HEADER}")?;
    writeln!(out, "{}", "-".repeat(time_w + position_w + velocity_w + 6))?;
    for sample in samples {
        writeln!(
            out,
            "{:>time_w$.2} | {:>position_w$.2} | {:>velocity_w$.2}",
            sample.time_s, sample.position_m, sample.velocity_mps,
        )?;
    }
    Ok(())
}
