use cb_app::GateError;

/// Centralized error mapping for commands.
pub fn map_err(err: GateError) -> String {
    tracing::debug!(error = %err, "command failed");
    err.display_message()
}
