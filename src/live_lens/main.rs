use crate::config::Config;
use crate::device_camera::interface::{AuthorizationStatus, DeviceCamera};
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::live_lens::core::{init, transition, Effect, Model, Msg};
use crate::live_lens::render::Render;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct LiveLens {
    pub model: Arc<Mutex<Model>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    event_sender: Sender<Msg>,
    event_receiver: Arc<Mutex<Receiver<Msg>>>,
    render: Render,
}

impl LiveLens {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let initial = init(&config);
        let render = Render::new(device_display.clone());

        Self {
            model: Arc::new(Mutex::new(initial.0)),
            config,
            logger,
            device_camera,
            device_display,
            image_classifier,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            render,
        }
    }

    pub fn send(&self, msg: Msg) {
        let _ = self.event_sender.send(msg);
    }

    fn recv(&self) -> Result<Msg, std::sync::mpsc::RecvError> {
        self.event_receiver.lock().unwrap().recv()
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }

    /// Failures never escape the loop; they are logged here and converted
    /// to whatever the transition makes of them.
    fn log_msg(&self, msg: &Msg) {
        match msg {
            Msg::AuthorizationChecked(AuthorizationStatus::Denied) => {
                let _ = self.logger.error("Camera access denied");
            }
            Msg::AuthorizationChecked(AuthorizationStatus::Restricted) => {
                let _ = self.logger.error("Camera access restricted");
            }
            Msg::AccessRequestDone(Err(e)) => {
                let _ = self.logger.error(&format!("Access request failed: {}", e));
            }
            Msg::SessionStartDone(Err(e)) => {
                let _ = self.logger.error(&format!("Session setup failed: {}", e));
            }
            Msg::SessionStopDone(Err(e)) => {
                let _ = self.logger.error(&format!("Session stop failed: {}", e));
            }
            Msg::FrameClassifyDone(Err(e)) => {
                let _ = self.logger.error(&format!("Inference failed: {}", e));
            }
            msg => {
                let _ = self.logger.info(&format!("msg: {:?}", msg));
            }
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display.lock().unwrap().init()?;

        let (initial_model, initial_effects) = init(&self.config);
        *self.model.lock().unwrap() = initial_model.clone();
        self.spawn_effects(initial_effects);

        let mut current_model = initial_model;

        loop {
            let msg = self.recv()?;
            self.log_msg(&msg);

            let (new_model, effects) = transition(current_model, msg);

            current_model = new_model.clone();
            *self.model.lock().unwrap() = new_model;

            if let Err(e) = self.render.render(&current_model) {
                let _ = self.logger.error(&format!("Render failed: {}", e));
            }

            self.spawn_effects(effects);
        }
    }
}
