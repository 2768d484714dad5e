/// Reasons a job could not be handed off.
pub mod dispatch_error;
