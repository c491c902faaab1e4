use crate::config::Config;
use crate::device_camera::interface::{AuthorizationStatus, DeviceCameraEvent};
use crate::frame::{DeviceFacing, Frame};
use crate::image_classifier::interface::Classification;

#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    WaitingForCamera {
        facing: DeviceFacing,
    },
    CheckingAuthorization {
        facing: DeviceFacing,
    },
    RequestingAccess {
        facing: DeviceFacing,
    },
    AuthorizationRefused {
        facing: DeviceFacing,
        status: AuthorizationStatus,
    },
    StartingSession {
        facing: DeviceFacing,
    },
    SessionFailed {
        facing: DeviceFacing,
    },
    Streaming {
        facing: DeviceFacing,
        /// Single-slot mailbox: while true, arriving frames are dropped.
        frame_in_flight: bool,
        last_result: Option<Classification>,
    },
    RestartingSession {
        facing: DeviceFacing,
    },
}

impl Model {
    pub fn facing(&self) -> DeviceFacing {
        match self {
            Model::WaitingForCamera { facing }
            | Model::CheckingAuthorization { facing }
            | Model::RequestingAccess { facing }
            | Model::AuthorizationRefused { facing, .. }
            | Model::StartingSession { facing }
            | Model::SessionFailed { facing }
            | Model::Streaming { facing, .. }
            | Model::RestartingSession { facing } => *facing,
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    CameraEvent(DeviceCameraEvent),
    AuthorizationChecked(AuthorizationStatus),
    AccessRequestDone(Result<bool, Box<dyn std::error::Error + Send + Sync>>),
    SessionStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    SessionStopDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameArrived(Frame),
    FrameClassifyDone(Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>),
    ToggleFacingPressed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeToCameraEvents,
    SubscribeToDisplayEvents,
    CheckAuthorization,
    RequestAccess,
    StartSession { facing: DeviceFacing },
    StopSession,
    SubscribeToFrames,
    ClassifyFrame { frame: Frame },
}

pub fn init(config: &Config) -> (Model, Vec<Effect>) {
    (
        Model::WaitingForCamera {
            facing: config.initial_facing,
        },
        vec![
            Effect::SubscribeToCameraEvents,
            Effect::SubscribeToDisplayEvents,
        ],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model, msg) {
        (
            Model::WaitingForCamera { facing },
            Msg::CameraEvent(DeviceCameraEvent::Connected),
        ) => (
            Model::CheckingAuthorization { facing },
            vec![Effect::CheckAuthorization],
        ),

        (Model::CheckingAuthorization { facing }, Msg::AuthorizationChecked(status)) => {
            match status {
                AuthorizationStatus::Authorized => (
                    Model::StartingSession { facing },
                    vec![Effect::StartSession { facing }],
                ),
                AuthorizationStatus::Undetermined => {
                    (Model::RequestingAccess { facing }, vec![Effect::RequestAccess])
                }
                AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
                    (Model::AuthorizationRefused { facing, status }, vec![])
                }
            }
        }

        // The prompt callback re-enters the same authorization check,
        // whatever the user answered
        (Model::RequestingAccess { facing }, Msg::AccessRequestDone(_)) => (
            Model::CheckingAuthorization { facing },
            vec![Effect::CheckAuthorization],
        ),

        (Model::StartingSession { facing }, Msg::SessionStartDone(Ok(()))) => (
            Model::Streaming {
                facing,
                frame_in_flight: false,
                last_result: None,
            },
            vec![Effect::SubscribeToFrames],
        ),
        (Model::StartingSession { facing }, Msg::SessionStartDone(Err(_))) => {
            (Model::SessionFailed { facing }, vec![])
        }

        // At most one frame in flight; late frames are dropped
        (
            Model::Streaming {
                facing,
                frame_in_flight: false,
                last_result,
            },
            Msg::FrameArrived(frame),
        ) => (
            Model::Streaming {
                facing,
                frame_in_flight: true,
                last_result,
            },
            vec![Effect::ClassifyFrame {
                frame: frame.normalized(facing),
            }],
        ),
        (
            model @ Model::Streaming {
                frame_in_flight: true,
                ..
            },
            Msg::FrameArrived(_),
        ) => (model, vec![]),

        (Model::Streaming { facing, .. }, Msg::FrameClassifyDone(Ok(classifications))) => (
            Model::Streaming {
                facing,
                frame_in_flight: false,
                last_result: classifications.into_iter().next(),
            },
            vec![],
        ),
        // Inference failure maps to an empty result for that frame; the
        // pipeline keeps going
        (Model::Streaming { facing, .. }, Msg::FrameClassifyDone(Err(_))) => (
            Model::Streaming {
                facing,
                frame_in_flight: false,
                last_result: None,
            },
            vec![],
        ),

        // Stop session, flip facing, then rebuild
        (Model::Streaming { facing, .. }, Msg::ToggleFacingPressed)
        | (Model::AuthorizationRefused { facing, .. }, Msg::ToggleFacingPressed)
        | (Model::SessionFailed { facing }, Msg::ToggleFacingPressed) => (
            Model::RestartingSession {
                facing: facing.toggled(),
            },
            vec![Effect::StopSession],
        ),

        (Model::RestartingSession { facing }, Msg::SessionStopDone(_)) => (
            Model::CheckingAuthorization { facing },
            vec![Effect::CheckAuthorization],
        ),

        (model, Msg::CameraEvent(DeviceCameraEvent::Disconnected)) => (
            Model::WaitingForCamera {
                facing: model.facing(),
            },
            vec![],
        ),

        // Default case
        (model, _) => (model, vec![]),
    }
}
