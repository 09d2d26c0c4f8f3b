//! The read-convert-print loop

use std::io::{BufRead, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};

use super::prompt::{interpret_line, FieldInput};
use crate::coordinate::errors::{ConvertError, ConvertResult};
use crate::coordinate::{CylindricalPoint, CylindricalTransformer};
use crate::utils::format_utils;

/// Prompt labels, in the fixed order fields are read each iteration
const ROTATION_PROMPT: &str = "Rotation (degrees): ";
const HEIGHT_PROMPT: &str = "Height (y): ";
const RADIUS_PROMPT: &str = "Radius (r): ";

/// Result of acquiring one full input triple
enum IterationOutcome {
    /// All three fields were read successfully
    Point(CylindricalPoint),
    /// The user stopped the session with a keyword, or input ended
    Quit,
    /// An interrupt signal arrived during acquisition
    Interrupted,
}

/// Interactive session converting cylindrical input to Cartesian output
///
/// Generic over its input and output streams so tests can drive it
/// with in-memory buffers instead of the real console.
pub struct ConsoleSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    transformer: CylindricalTransformer,
    interrupted: Arc<AtomicBool>,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Create a session over the given streams
    ///
    /// # Arguments
    /// * `reader` - Line-oriented input source (stdin in production)
    /// * `writer` - Output sink for prompts and results
    /// * `transformer` - The conversion to apply to each triple
    /// * `interrupted` - Flag set asynchronously by the signal handler
    pub fn new(
        reader: R,
        writer: W,
        transformer: CylindricalTransformer,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        ConsoleSession {
            reader,
            writer,
            transformer,
            interrupted,
        }
    }

    /// Run the loop until the user stops it
    ///
    /// Keyword termination, end of input and interrupts all end the
    /// loop normally; only console I/O failure is reported as an error.
    pub fn run(&mut self) -> ConvertResult<()> {
        self.print_banner()?;

        loop {
            match self.read_triple()? {
                IterationOutcome::Point(point) => {
                    let center = self.transformer.to_cartesian(&point);
                    info!(
                        "Converted (r={}, theta={}, y={}) to ({}, {}, {})",
                        point.radius, point.rotation_deg, point.height,
                        center.x, center.y, center.z
                    );
                    writeln!(self.writer, "{}\n", format_utils::format_center(&center))?;
                }
                IterationOutcome::Quit => {
                    info!("Session ended by user request");
                    break;
                }
                IterationOutcome::Interrupted => {
                    info!("Session ended by interrupt");
                    writeln!(self.writer, "\nExiting.")?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Print the startup banner with keywords, offsets and convention
    fn print_banner(&mut self) -> ConvertResult<()> {
        let offset = self.transformer.offset();

        writeln!(self.writer, "Polar + height -> XYZ")?;
        writeln!(self.writer, "Type q / quit / exit at any prompt to stop.\n")?;
        writeln!(self.writer, "Offsets: x0={}, z0={}", offset.x0, offset.z0)?;
        writeln!(self.writer, "Rotation 0 degrees points along -Z.\n")?;

        Ok(())
    }

    /// Read the three fields of one iteration in fixed order
    ///
    /// A parse failure on any field abandons the whole iteration:
    /// the error line is printed, fields already entered are discarded
    /// and acquisition starts over from the rotation prompt.
    fn read_triple(&mut self) -> ConvertResult<IterationOutcome> {
        'iteration: loop {
            let mut fields = [0.0_f64; 3];

            for (slot, label) in fields
                .iter_mut()
                .zip([ROTATION_PROMPT, HEIGHT_PROMPT, RADIUS_PROMPT])
            {
                match self.read_field(label) {
                    Ok(FieldInput::Value(value)) => *slot = value,
                    Ok(FieldInput::Quit) => return Ok(IterationOutcome::Quit),
                    Ok(FieldInput::Interrupted) => return Ok(IterationOutcome::Interrupted),
                    Err(ConvertError::InvalidNumber(text)) => {
                        debug!("Rejected input {:?} at prompt {:?}", text, label);
                        writeln!(self.writer, "Please enter a valid number (or q to quit).\n")?;
                        continue 'iteration;
                    }
                    Err(e) => return Err(e),
                }
            }

            let [rotation_deg, height, radius] = fields;
            return Ok(IterationOutcome::Point(CylindricalPoint::new(
                rotation_deg,
                height,
                radius,
            )));
        }
    }

    /// Prompt for and read a single field
    fn read_field(&mut self, label: &str) -> ConvertResult<FieldInput> {
        if self.interrupted.load(Ordering::SeqCst) {
            return Ok(FieldInput::Interrupted);
        }

        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = match self.reader.read_line(&mut line) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                return Ok(FieldInput::Interrupted)
            }
            Err(e) => return Err(ConvertError::IoError(e)),
        };

        if self.interrupted.load(Ordering::SeqCst) {
            return Ok(FieldInput::Interrupted);
        }

        // End of input behaves like a quit keyword
        if bytes == 0 {
            return Ok(FieldInput::Quit);
        }

        interpret_line(&line)
    }
}
