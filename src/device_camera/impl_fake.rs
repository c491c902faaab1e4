use crate::device_camera::interface::{AuthorizationStatus, DeviceCamera, DeviceCameraEvent};
use crate::frame::{DeviceFacing, Frame};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Session {
    id: u64,
    facing: DeviceFacing,
    subscribers: Vec<Sender<Frame>>,
}

/// Fake camera that grants access on request and produces noise frames on
/// an interval thread while a session is running.
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    frame_interval: Duration,
    authorization: Arc<Mutex<AuthorizationStatus>>,
    session: Arc<Mutex<Option<Session>>>,
    next_session_id: AtomicU64,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, frame_interval: Duration) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            frame_interval,
            authorization: Arc::new(Mutex::new(AuthorizationStatus::Undetermined)),
            session: Arc::new(Mutex::new(None)),
            next_session_id: AtomicU64::new(0),
        }
    }

    fn synthetic_frame(facing: DeviceFacing) -> Frame {
        let mut rng = rand::rng();
        let image = image::RgbImage::from_fn(64, 64, |_, _| {
            image::Rgb([rng.random(), rng.random(), rng.random()])
        });
        Frame::new(DynamicImage::ImageRgb8(image), facing)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn authorization_status(&self) -> AuthorizationStatus {
        *self.authorization.lock().unwrap()
    }

    fn request_access(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Requesting camera access...")?;
        std::thread::sleep(Duration::from_millis(300));
        *self.authorization.lock().unwrap() = AuthorizationStatus::Authorized;
        self.logger.info("Camera access granted")?;
        Ok(true)
    }

    fn start(
        &self,
        facing: DeviceFacing,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Starting session ({:?})...", facing))?;

        let id = self.next_session_id.fetch_add(1, Ordering::SeqCst);

        *self.session.lock().unwrap() = Some(Session {
            id,
            facing,
            subscribers: vec![],
        });

        // Producer thread runs until this session is stopped or replaced
        let session = self.session.clone();
        let interval = self.frame_interval;
        std::thread::spawn(move || loop {
            std::thread::sleep(interval);
            let mut guard = session.lock().unwrap();
            match guard.as_mut() {
                Some(s) if s.id == id => {
                    let frame = DeviceCameraFake::synthetic_frame(s.facing);
                    s.subscribers.retain(|tx| tx.send(frame.clone()).is_ok());
                }
                _ => break,
            }
        });

        self.logger.info("Session started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping session...")?;
        *self.session.lock().unwrap() = None;
        self.logger.info("Session stopped")?;
        Ok(())
    }

    fn frames(&self) -> Receiver<Frame> {
        let (tx, rx) = channel();
        if let Some(session) = self.session.lock().unwrap().as_mut() {
            session.subscribers.push(tx);
        }
        rx
    }

    fn events(&self) -> Receiver<DeviceCameraEvent> {
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(100));
            let _ = tx.send(DeviceCameraEvent::Connected);
        });
        rx
    }
}
