use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    /// Easting or northing was NaN or infinite.
    #[error("Non-finite grid coordinate: x={x}, y={y}")]
    InvalidInput { x: f64, y: f64 },

    /// The conformal correction series produced a value outside the domain
    /// of the inverse trigonometric step. Only reachable for grid coordinates
    /// so far outside the projection zone that the hyperbolic terms overflow.
    #[error("Inverse projection argument {0} is outside [-1, 1]")]
    Domain(f64),
}
