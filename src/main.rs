use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract::ImageClassifierTract;
use image_classifier::interface::ImageClassifier;
use image_classifier::models::model_config::ModelConfig;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use live_lens::main::LiveLens;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_display;
mod frame;
mod image_classifier;
mod library;
mod live_lens;

fn arg_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|index| args.get(index + 1).cloned())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone(), config.frame_interval));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        if args.iter().any(|arg| arg == "--gui") {
            Arc::new(Mutex::new(DeviceDisplayGui::new()))
        } else {
            Arc::new(Mutex::new(DeviceDisplayConsole::new()))
        };

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> =
        match arg_value(&args, "--model") {
            Some(model_path) => Arc::new(ImageClassifierTract::new(ModelConfig {
                onnx_model_path: model_path,
                labels_path: arg_value(&args, "--labels"),
                input_shape: (224, 224),
            })?),
            None => Arc::new(ImageClassifierFake::new(logger.clone())),
        };

    let app = LiveLens::new(
        config,
        logger,
        device_camera,
        device_display,
        image_classifier,
    );

    app.run()?;

    Ok(())
}
