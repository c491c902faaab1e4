use crate::frame::{DeviceFacing, Frame};
use std::sync::mpsc::Receiver;

/// Closed set of camera authorization states. `Undetermined` is the only
/// state that leads to an access prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Authorized,
    Denied,
    Restricted,
    Undetermined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCameraEvent {
    Connected,
    Disconnected,
}

pub trait DeviceCamera: Send + Sync {
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Prompt the user for camera access. Blocks until the user responds.
    fn request_access(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// Start a capture session on the given facing.
    fn start(&self, facing: DeviceFacing)
        -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Push stream of frames for the running session. The receiver closes
    /// when the session stops.
    fn frames(&self) -> Receiver<Frame>;

    fn events(&self) -> Receiver<DeviceCameraEvent>;
}
