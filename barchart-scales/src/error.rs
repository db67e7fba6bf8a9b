#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BarchartScaleError {
    #[error("Domain bounds must be finite: ({0}, {1})")]
    NonFiniteDomain(f32, f32),

    #[error("Range bounds must be finite: ({0}, {1})")]
    NonFiniteRange(f32, f32),
}
