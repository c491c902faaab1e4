use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent};
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone)]
struct ResultWindow {
    result_line: Arc<Mutex<String>>,
    status_line: Arc<Mutex<String>>,
    event_senders: Arc<Mutex<Vec<Sender<DeviceDisplayEvent>>>>,
}

impl eframe::App for ResultWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let result_line = self.result_line.lock().unwrap().clone();
        let status_line = self.status_line.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);

                ui.label(
                    egui::RichText::new(result_line)
                        .strong()
                        .size(28.0),
                );

                ui.add_space(10.0);

                ui.label(egui::RichText::new(status_line).size(14.0));

                ui.add_space(30.0);

                if ui.button("Flip camera").clicked() {
                    self.event_senders
                        .lock()
                        .unwrap()
                        .retain(|tx| tx.send(DeviceDisplayEvent::ToggleFacingPressed).is_ok());
                }
            });
        });

        // Result text is pushed from the run loop, not from UI interactions
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    result_line: Arc<Mutex<String>>,
    status_line: Arc<Mutex<String>>,
    event_senders: Arc<Mutex<Vec<Sender<DeviceDisplayEvent>>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            result_line: Arc::new(Mutex::new(String::new())),
            status_line: Arc::new(Mutex::new(String::new())),
            event_senders: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let window = ResultWindow {
            result_line: self.result_line.clone(),
            status_line: self.status_line.clone(),
            event_senders: self.event_senders.clone(),
        };

        // The window blocks its own thread until closed
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([400.0, 260.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let _ = eframe::run_native("Live Lens", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.result_line.lock().unwrap().clear();
        self.status_line.lock().unwrap().clear();
        Ok(())
    }

    fn show_result(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.result_line.lock().unwrap() = text.to_string();
        Ok(())
    }

    fn show_status(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.status_line.lock().unwrap() = text.to_string();
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        let (tx, rx) = channel();
        self.event_senders.lock().unwrap().push(tx);
        rx
    }
}
