use std::error::Error;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceDisplayEvent {
    ToggleFacingPressed,
}

/// Single-screen display surface: one result line, one status line, and the
/// facing-toggle control.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    #[allow(dead_code)]
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the formatted classification result.
    fn show_result(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show session/authorization status.
    fn show_status(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn events(&self) -> Receiver<DeviceDisplayEvent>;
}
