use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent};
use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};

const PANEL_WIDTH: usize = 32;

pub struct DeviceDisplayConsole {
    result_line: String,
    status_line: String,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            result_line: String::new(),
            status_line: String::new(),
        }
    }

    fn render_display(&self) {
        let pad = |text: &str| {
            let truncated: String = text.chars().take(PANEL_WIDTH).collect();
            format!("{:<width$}", truncated, width = PANEL_WIDTH)
        };
        println!("┌{}┐", "─".repeat(PANEL_WIDTH));
        println!("│{}│", pad(&self.result_line));
        println!("│{}│", pad(&self.status_line));
        println!("└{}┘", "─".repeat(PANEL_WIDTH));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("Press Enter to flip the camera");
        self.render_display();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.result_line.clear();
        self.status_line.clear();
        self.render_display();
        Ok(())
    }

    fn show_result(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.result_line = text.to_string();
        self.render_display();
        Ok(())
    }

    fn show_status(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.status_line = text.to_string();
        self.render_display();
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                if line.is_err() {
                    break;
                }
                if tx.send(DeviceDisplayEvent::ToggleFacingPressed).is_err() {
                    break;
                }
            }
        });
        rx
    }
}
