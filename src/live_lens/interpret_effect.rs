use crate::device_display::interface::DeviceDisplayEvent;
use crate::live_lens::core::{Effect, Msg};
use crate::live_lens::main::LiveLens;

impl LiveLens {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("effect: {:?}", effect));

        match effect {
            Effect::SubscribeToCameraEvents => {
                let events = self.device_camera.events();
                while let Ok(event) = events.recv() {
                    self.send(Msg::CameraEvent(event));
                }
            }
            Effect::SubscribeToDisplayEvents => {
                let events = self.device_display.lock().unwrap().events();
                while let Ok(event) = events.recv() {
                    match event {
                        DeviceDisplayEvent::ToggleFacingPressed => {
                            self.send(Msg::ToggleFacingPressed)
                        }
                    }
                }
            }
            Effect::CheckAuthorization => {
                let status = self.device_camera.authorization_status();
                self.send(Msg::AuthorizationChecked(status));
            }
            Effect::RequestAccess => {
                let granted = self.device_camera.request_access();
                self.send(Msg::AccessRequestDone(granted));
            }
            Effect::StartSession { facing } => {
                let started = self.device_camera.start(facing);
                self.send(Msg::SessionStartDone(started));
            }
            Effect::StopSession => {
                let stopped = self.device_camera.stop();
                self.send(Msg::SessionStopDone(stopped));
            }
            Effect::SubscribeToFrames => {
                // The receiver closes when the session stops, which ends
                // this subscription
                let frames = self.device_camera.frames();
                while let Ok(frame) = frames.recv() {
                    self.send(Msg::FrameArrived(frame));
                }
            }
            Effect::ClassifyFrame { frame } => {
                let result = self.image_classifier.classify(&frame.to_upright());
                self.send(Msg::FrameClassifyDone(result));
            }
        }
    }
}
