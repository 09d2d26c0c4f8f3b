use log::info;
use crate::coordinate::errors::ConvertResult;
use crate::coordinate::{CartesianPoint, CylindricalPoint, CylindricalTransformer, OriginOffset};
use crate::utils::format_utils;
use crate::utils::logger::Logger;

/// Main interface to the PolarKit library
pub struct PolarKit {
    logger: Logger,
    transformer: CylindricalTransformer,
}

impl PolarKit {
    /// Create a new PolarKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "polarkit.log"
    ///
    /// # Returns
    /// A PolarKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ConvertResult<Self> {
        let log_path = log_file.unwrap_or("polarkit.log");
        let logger = Logger::new(log_path)?;
        Ok(PolarKit {
            logger,
            transformer: CylindricalTransformer::default(),
        })
    }

    /// The origin offset in use (the Cartesian point radius = 0 maps to)
    pub fn offset(&self) -> OriginOffset {
        self.transformer.offset()
    }

    /// Convert one cylindrical triple to Cartesian coordinates
    ///
    /// Rotation is in degrees, with 0 pointing along -Z. The height is
    /// carried through unchanged as y.
    ///
    /// # Arguments
    /// * `rotation_deg` - Rotation angle in degrees
    /// * `height` - Height along the Y axis
    /// * `radius` - Radius from the offset origin
    ///
    /// # Returns
    /// The converted Cartesian point
    pub fn convert(&self, rotation_deg: f64, height: f64, radius: f64) -> ConvertResult<CartesianPoint> {
        let point = CylindricalPoint::new(rotation_deg, height, radius);
        let center = self.transformer.to_cartesian(&point);

        self.logger.log(&format!(
            "convert(theta={}, y={}, r={}) -> {}",
            rotation_deg, height, radius,
            format_utils::format_center(&center)
        ))?;
        info!("Converted triple via library API");

        Ok(center)
    }

    /// Convert a triple and render it as the tool's result line
    pub fn convert_formatted(&self, rotation_deg: f64, height: f64, radius: f64) -> ConvertResult<String> {
        let center = self.convert(rotation_deg, height, radius)?;
        Ok(format_utils::format_center(&center))
    }
}
