use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    event_senders: Mutex<Vec<Sender<DeviceDisplayEvent>>>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            event_senders: Mutex::new(vec![]),
        }
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::clear()")?;
        Ok(())
    }

    fn show_result(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show_result({})", text))?;
        Ok(())
    }

    fn show_status(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show_status({})", text))?;
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        let (tx, rx) = channel();
        self.event_senders.lock().unwrap().push(tx);
        rx
    }
}
