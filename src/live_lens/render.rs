use crate::device_camera::interface::AuthorizationStatus;
use crate::device_display::interface::DeviceDisplay;
use crate::frame::DeviceFacing;
use crate::image_classifier::interface::Classification;
use crate::live_lens::core::Model;
use std::sync::{Arc, Mutex};

pub const NO_RESULT_MESSAGE: &str = "no recognizable result";

/// Render confidence as a percentage with up to two decimals, trailing
/// zeros trimmed: 0.8734 -> "87.34%", 0.0 -> "0%", 1.0 -> "100%".
pub fn format_confidence(confidence: f32) -> String {
    let formatted = format!("{:.2}", confidence * 100.0);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

pub fn format_result(result: Option<&Classification>) -> String {
    match result {
        Some(top) => format!("{} - {}", top.label, format_confidence(top.confidence)),
        None => NO_RESULT_MESSAGE.to_string(),
    }
}

/// The result reporter: only the top-ranked entry is shown, the rest of the
/// list is discarded.
pub fn report(classifications: &[Classification]) -> String {
    format_result(classifications.first())
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        match model {
            Model::Streaming { last_result, facing, .. } => {
                device_display.show_result(&report(last_result.as_slice()))?;
                let status = match facing {
                    DeviceFacing::Back => "Back camera",
                    DeviceFacing::Front => "Front camera",
                };
                device_display.show_status(status)?;
            }
            Model::WaitingForCamera { .. } => {
                device_display.show_result("")?;
                device_display.show_status("Camera connecting...")?;
            }
            Model::CheckingAuthorization { .. } => {
                device_display.show_result("")?;
                device_display.show_status("Checking camera access...")?;
            }
            Model::RequestingAccess { .. } => {
                device_display.show_result("")?;
                device_display.show_status("Requesting camera access...")?;
            }
            Model::AuthorizationRefused { status, .. } => {
                device_display.show_result("")?;
                let text = match status {
                    AuthorizationStatus::Restricted => "Camera access restricted",
                    _ => "Camera access denied",
                };
                device_display.show_status(text)?;
            }
            Model::StartingSession { .. } => {
                device_display.show_result("")?;
                device_display.show_status("Starting camera...")?;
            }
            Model::SessionFailed { .. } => {
                device_display.show_result("")?;
                device_display.show_status("Camera failed to start")?;
            }
            Model::RestartingSession { .. } => {
                device_display.show_result("")?;
                device_display.show_status("Switching camera...")?;
            }
        }

        Ok(())
    }
}
