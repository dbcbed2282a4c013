/// One WRAP kinematic parameter: a statistical model of a flight-phase variable.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapParameter {
    pub optimum: f64,
    pub minimum: f64,
    pub maximum: f64,
    /// Name of the statistical distribution, e.g. `norm`.
    pub model: String,
    pub parameters: Vec<f64>,
}
