use crate::config::Config;
use crate::device_camera::interface::{AuthorizationStatus, DeviceCameraEvent};
use crate::frame::{DeviceFacing, Frame, Orientation};
use crate::image_classifier::interface::Classification;
use crate::live_lens::core::{init, transition, Effect, Model, Msg};
use crate::live_lens::tests::fixture::Fixture;
use image::DynamicImage;

fn test_frame(facing: DeviceFacing) -> Frame {
    Frame::new(DynamicImage::new_rgb8(4, 4), facing)
}

fn cat() -> Classification {
    Classification {
        label: "cat".to_string(),
        confidence: 0.9,
    }
}

#[test]
fn test_init() {
    let config = Config::default();
    let (model, effects) = init(&config);

    assert_eq!(
        model,
        Model::WaitingForCamera {
            facing: DeviceFacing::Back
        }
    );
    assert_eq!(
        effects,
        vec![
            Effect::SubscribeToCameraEvents,
            Effect::SubscribeToDisplayEvents,
        ]
    );
}

#[test]
fn test_camera_connected_checks_authorization() {
    let config = Config::default();
    let (model, _) = init(&config);

    let (model, effects) = transition(model, Msg::CameraEvent(DeviceCameraEvent::Connected));

    assert_eq!(
        model,
        Model::CheckingAuthorization {
            facing: DeviceFacing::Back
        }
    );
    assert_eq!(effects, vec![Effect::CheckAuthorization]);
}

#[test]
fn test_authorized_starts_session() {
    let model = Model::CheckingAuthorization {
        facing: DeviceFacing::Back,
    };

    let (model, effects) = transition(
        model,
        Msg::AuthorizationChecked(AuthorizationStatus::Authorized),
    );

    assert_eq!(
        model,
        Model::StartingSession {
            facing: DeviceFacing::Back
        }
    );
    assert_eq!(
        effects,
        vec![Effect::StartSession {
            facing: DeviceFacing::Back
        }]
    );
}

#[test]
fn test_refused_authorization_leaves_session_inactive() {
    for status in [AuthorizationStatus::Denied, AuthorizationStatus::Restricted] {
        let model = Model::CheckingAuthorization {
            facing: DeviceFacing::Back,
        };

        let (model, effects) = transition(model, Msg::AuthorizationChecked(status));

        assert_eq!(
            model,
            Model::AuthorizationRefused {
                facing: DeviceFacing::Back,
                status,
            }
        );
        assert!(effects.is_empty());
    }
}

#[test]
fn test_undetermined_requests_access_then_proceeds_on_grant() {
    let model = Model::CheckingAuthorization {
        facing: DeviceFacing::Back,
    };

    // Undetermined issues the access request
    let (model, effects) = transition(
        model,
        Msg::AuthorizationChecked(AuthorizationStatus::Undetermined),
    );
    assert_eq!(
        model,
        Model::RequestingAccess {
            facing: DeviceFacing::Back
        }
    );
    assert_eq!(effects, vec![Effect::RequestAccess]);

    // The prompt callback re-enters the authorization check
    let (model, effects) = transition(model, Msg::AccessRequestDone(Ok(true)));
    assert_eq!(
        model,
        Model::CheckingAuthorization {
            facing: DeviceFacing::Back
        }
    );
    assert_eq!(effects, vec![Effect::CheckAuthorization]);

    // After the grant, session setup proceeds without further user action
    let (model, effects) = transition(
        model,
        Msg::AuthorizationChecked(AuthorizationStatus::Authorized),
    );
    assert_eq!(
        model,
        Model::StartingSession {
            facing: DeviceFacing::Back
        }
    );
    assert_eq!(
        effects,
        vec![Effect::StartSession {
            facing: DeviceFacing::Back
        }]
    );
}

#[test]
fn test_session_start_begins_streaming() {
    let model = Model::StartingSession {
        facing: DeviceFacing::Back,
    };

    let (model, effects) = transition(model, Msg::SessionStartDone(Ok(())));

    assert_eq!(
        model,
        Model::Streaming {
            facing: DeviceFacing::Back,
            frame_in_flight: false,
            last_result: None,
        }
    );
    assert_eq!(effects, vec![Effect::SubscribeToFrames]);
}

#[test]
fn test_session_start_failure_leaves_session_inactive() {
    let model = Model::StartingSession {
        facing: DeviceFacing::Back,
    };

    let (model, effects) = transition(model, Msg::SessionStartDone(Err("no device".into())));

    assert_eq!(
        model,
        Model::SessionFailed {
            facing: DeviceFacing::Back
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn test_frame_is_normalized_for_facing_before_inference() {
    for (facing, expected) in [
        (DeviceFacing::Front, Orientation::LeftMirrored),
        (DeviceFacing::Back, Orientation::DownMirrored),
    ] {
        let model = Model::Streaming {
            facing,
            frame_in_flight: false,
            last_result: None,
        };
        let frame = test_frame(facing);

        let (model, effects) = transition(model, Msg::FrameArrived(frame.clone()));

        assert_eq!(
            model,
            Model::Streaming {
                facing,
                frame_in_flight: true,
                last_result: None,
            }
        );
        assert_eq!(
            effects,
            vec![Effect::ClassifyFrame {
                frame: frame.normalized(facing)
            }]
        );
        match &effects[0] {
            Effect::ClassifyFrame { frame } => assert_eq!(frame.orientation, expected),
            effect => panic!("Unexpected effect: {:?}", effect),
        }
    }
}

#[test]
fn test_late_frame_is_dropped_while_one_is_in_flight() {
    let model = Model::Streaming {
        facing: DeviceFacing::Back,
        frame_in_flight: true,
        last_result: None,
    };

    let (model, effects) = transition(model, Msg::FrameArrived(test_frame(DeviceFacing::Back)));

    assert_eq!(
        model,
        Model::Streaming {
            facing: DeviceFacing::Back,
            frame_in_flight: true,
            last_result: None,
        }
    );
    assert!(effects.is_empty());

    // The classification already in flight still completes and reports
    let (model, effects) = transition(model, Msg::FrameClassifyDone(Ok(vec![cat()])));
    assert_eq!(
        model,
        Model::Streaming {
            facing: DeviceFacing::Back,
            frame_in_flight: false,
            last_result: Some(cat()),
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn test_classification_keeps_only_top_entry() {
    let model = Model::Streaming {
        facing: DeviceFacing::Back,
        frame_in_flight: true,
        last_result: None,
    };

    let classifications = vec![
        cat(),
        Classification {
            label: "dog".to_string(),
            confidence: 0.3,
        },
    ];

    let (model, _) = transition(model, Msg::FrameClassifyDone(Ok(classifications)));

    assert_eq!(
        model,
        Model::Streaming {
            facing: DeviceFacing::Back,
            frame_in_flight: false,
            last_result: Some(cat()),
        }
    );
}

#[test]
fn test_empty_classification_clears_result() {
    let model = Model::Streaming {
        facing: DeviceFacing::Back,
        frame_in_flight: true,
        last_result: Some(cat()),
    };

    let (model, _) = transition(model, Msg::FrameClassifyDone(Ok(vec![])));

    assert_eq!(
        model,
        Model::Streaming {
            facing: DeviceFacing::Back,
            frame_in_flight: false,
            last_result: None,
        }
    );
}

#[test]
fn test_inference_failure_recovers_on_next_frame() {
    let model = Model::Streaming {
        facing: DeviceFacing::Back,
        frame_in_flight: true,
        last_result: Some(cat()),
    };

    // Failure maps to no result, not a crash
    let (model, effects) = transition(
        model,
        Msg::FrameClassifyDone(Err("inference exploded".into())),
    );
    assert_eq!(
        model,
        Model::Streaming {
            facing: DeviceFacing::Back,
            frame_in_flight: false,
            last_result: None,
        }
    );
    assert!(effects.is_empty());

    // The next frame is processed normally
    let frame = test_frame(DeviceFacing::Back);
    let (model, effects) = transition(model, Msg::FrameArrived(frame.clone()));
    assert_eq!(
        model,
        Model::Streaming {
            facing: DeviceFacing::Back,
            frame_in_flight: true,
            last_result: None,
        }
    );
    assert_eq!(
        effects,
        vec![Effect::ClassifyFrame {
            frame: frame.normalized(DeviceFacing::Back)
        }]
    );
}

#[test]
fn test_toggle_stops_session_then_rebuilds_with_flipped_facing() {
    let model = Model::Streaming {
        facing: DeviceFacing::Back,
        frame_in_flight: false,
        last_result: Some(cat()),
    };

    let (model, effects) = transition(model, Msg::ToggleFacingPressed);
    assert_eq!(
        model,
        Model::RestartingSession {
            facing: DeviceFacing::Front
        }
    );
    assert_eq!(effects, vec![Effect::StopSession]);

    let (model, effects) = transition(model, Msg::SessionStopDone(Ok(())));
    assert_eq!(
        model,
        Model::CheckingAuthorization {
            facing: DeviceFacing::Front
        }
    );
    assert_eq!(effects, vec![Effect::CheckAuthorization]);
}

#[test]
fn test_toggling_twice_returns_to_original_facing() {
    let model = Model::Streaming {
        facing: DeviceFacing::Back,
        frame_in_flight: false,
        last_result: None,
    };

    let (model, _) = transition(model, Msg::ToggleFacingPressed);
    let (model, _) = transition(model, Msg::SessionStopDone(Ok(())));
    assert_eq!(model.facing(), DeviceFacing::Front);

    let model = Model::Streaming {
        facing: model.facing(),
        frame_in_flight: false,
        last_result: None,
    };
    let (model, _) = transition(model, Msg::ToggleFacingPressed);
    let (model, _) = transition(model, Msg::SessionStopDone(Ok(())));
    assert_eq!(model.facing(), DeviceFacing::Back);
}

#[test]
fn test_camera_disconnect_resets_to_waiting() {
    let model = Model::Streaming {
        facing: DeviceFacing::Front,
        frame_in_flight: true,
        last_result: Some(cat()),
    };

    let (model, effects) = transition(model, Msg::CameraEvent(DeviceCameraEvent::Disconnected));

    assert_eq!(
        model,
        Model::WaitingForCamera {
            facing: DeviceFacing::Front
        }
    );
    assert!(effects.is_empty());
}

#[test]
fn test_fixture_starts_in_initial_model() {
    let fixture = Fixture::new();

    let model = fixture.live_lens.model.lock().unwrap().clone();
    assert_eq!(model, init(&fixture.config).0);
}
