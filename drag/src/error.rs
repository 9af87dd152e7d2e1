use thiserror::Error;

/// Failures raised inside the drag pipeline.
///
/// None of these escape [`crate::process_step`]; they are absorbed there with a
/// conservative fallback. They are public so hosts can validate settings up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DragError {
    /// The swept box of a requested displacement is absurdly large.
    #[error("displacement exploded: swept box average edge {average_edge} exceeds {limit}")]
    DisplacementExploded { average_edge: f32, limit: f32 },

    /// A tuning value is out of its valid range.
    #[error("invalid drag settings: {0}")]
    InvalidSettings(&'static str),
}
